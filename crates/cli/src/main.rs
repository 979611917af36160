mod commands;
mod config;
mod progress;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "docstore",
    version,
    about = "Store documents on a local directory tree or an S3 bucket"
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    // stdout carries document bytes for `get`.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.unwrap_or_else(AppConfig::default_path);

    match cli.command {
        commands::Command::Init(args) => commands::init::run(args, &config_path).await,
        commands::Command::Get(args) => commands::get::run(args, &config_path).await,
        commands::Command::Save(args) => commands::save::run(args, &config_path).await,
        commands::Command::Remove(args) => commands::remove::run(args, &config_path).await,
    }
}

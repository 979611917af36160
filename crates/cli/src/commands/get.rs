use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::AsyncWriteExt;
use tracing::info;

use super::DocumentArgs;
use crate::config::AppConfig;
use crate::progress;

#[derive(Args)]
pub struct GetArgs {
    #[command(flatten)]
    pub(crate) doc: DocumentArgs,

    /// Write the document here instead of stdout
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,
}

pub async fn run(args: GetArgs, config_path: &Path) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let store = config.open_store()?;

    let spinner = progress::create_spinner("Fetching document...");
    let result = store.get(&args.doc.owner, &args.doc.file).await;
    spinner.finish_and_clear();
    let data = result?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, &data)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                owner = %args.doc.owner,
                file = %args.doc.file,
                bytes = data.len(),
                "Document written to {}",
                path.display()
            );
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&data).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::AsyncReadExt;
use tracing::info;

use super::DocumentArgs;
use crate::config::AppConfig;
use crate::progress;

#[derive(Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub(crate) doc: DocumentArgs,

    /// Read the document from here instead of stdin
    #[arg(long, short)]
    pub(crate) input: Option<PathBuf>,
}

pub async fn run(args: SaveArgs, config_path: &Path) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let store = config.open_store()?;

    let data = match &args.input {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            buf
        }
    };

    let spinner = progress::create_spinner("Saving document...");
    let result = store.save(&args.doc.owner, &args.doc.file, &data).await;
    spinner.finish_and_clear();
    result?;

    info!(owner = %args.doc.owner, file = %args.doc.file, bytes = data.len(), "Document saved");
    Ok(())
}

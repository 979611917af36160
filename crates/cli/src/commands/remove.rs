use std::path::Path;

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::DocumentArgs;
use crate::config::AppConfig;
use crate::progress;

#[derive(Args)]
pub struct RemoveArgs {
    #[command(flatten)]
    doc: DocumentArgs,
}

pub async fn run(args: RemoveArgs, config_path: &Path) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let store = config.open_store()?;

    let spinner = progress::create_spinner("Removing document...");
    let result = store.remove(&args.doc.owner, &args.doc.file).await;
    spinner.finish_and_clear();
    result?;

    info!(owner = %args.doc.owner, file = %args.doc.file, "Document removed");
    Ok(())
}

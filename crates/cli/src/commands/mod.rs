pub mod get;
pub mod init;
pub mod remove;
pub mod save;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Command {
    /// Configure the document store
    Init(init::InitArgs),
    /// Fetch a document
    Get(get::GetArgs),
    /// Store a document
    Save(save::SaveArgs),
    /// Delete a document
    Remove(remove::RemoveArgs),
}

/// Owner and filename addressing one document.
#[derive(Args)]
pub struct DocumentArgs {
    /// Owner identifier
    #[arg(long)]
    pub owner: String,

    /// Document filename
    #[arg(long)]
    pub file: String,
}

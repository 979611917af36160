use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use docstore_core::S3Config;

use crate::config::{AppConfig, StoreConfig};

#[derive(Args)]
pub struct InitArgs {
    /// Backend type: filesystem or s3
    #[arg(long)]
    backend: String,

    /// Root directory for the filesystem backend
    #[arg(long)]
    path: Option<PathBuf>,

    /// S3 bucket name
    #[arg(long)]
    bucket: Option<String>,

    /// S3 access key
    #[arg(long)]
    access_key: Option<String>,

    /// S3 secret key
    #[arg(long)]
    secret_key: Option<String>,

    /// S3 region
    #[arg(long, default_value = "us-east-1")]
    region: String,

    /// S3 endpoint URL for S3-compatible services
    #[arg(long)]
    endpoint: Option<String>,

    /// S3 key prefix
    #[arg(long)]
    prefix: Option<String>,
}

fn store_config(args: InitArgs) -> Result<StoreConfig> {
    match args.backend.as_str() {
        "filesystem" => {
            let path = args
                .path
                .ok_or_else(|| anyhow::anyhow!("--path required for filesystem backend"))?;
            Ok(StoreConfig::Filesystem { path })
        }
        "s3" => {
            let bucket = args
                .bucket
                .ok_or_else(|| anyhow::anyhow!("--bucket required for S3 backend"))?;
            let access_key = args
                .access_key
                .ok_or_else(|| anyhow::anyhow!("--access-key required for S3 backend"))?;
            let secret_key = args
                .secret_key
                .ok_or_else(|| anyhow::anyhow!("--secret-key required for S3 backend"))?;
            Ok(StoreConfig::S3(S3Config {
                bucket,
                access_key,
                secret_key,
                region: args.region,
                endpoint: args.endpoint,
                prefix: args.prefix,
            }))
        }
        other => anyhow::bail!("unknown backend: {other} (supported: filesystem, s3)"),
    }
}

pub async fn run(args: InitArgs, config_path: &Path) -> Result<()> {
    let store = store_config(args)?;

    if let StoreConfig::Filesystem { path } = &store {
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }

    let config = AppConfig { store };
    // Fail here rather than on first use if the backend cannot be built.
    config.open_store()?;
    config.save(config_path)?;

    info!(config_path = %config_path.display(), "Document store configured");
    println!("Config: {}", config_path.display());
    Ok(())
}

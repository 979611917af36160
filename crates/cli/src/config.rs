use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use docstore_core::{DocumentStore, FilesystemStore, ObjectStore, S3Config};

const CONFIG_FILE: &str = "docstore.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreConfig {
    #[serde(rename = "filesystem")]
    Filesystem { path: PathBuf },
    #[serde(rename = "s3")]
    S3(S3Config),
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("docstore")
            .join(CONFIG_FILE)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("config not found at {}", path.display()))?;
        toml::from_str(&content).context("failed to parse config")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn open_store(&self) -> Result<Arc<dyn DocumentStore>> {
        match &self.store {
            StoreConfig::Filesystem { path } => Ok(Arc::new(
                FilesystemStore::new(path).context("failed to open filesystem store")?,
            )),
            StoreConfig::S3(s3) => Ok(Arc::new(
                ObjectStore::s3(s3).context("failed to open S3 store")?,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filesystem_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [store]
            type = "filesystem"
            path = "/data"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.store,
            StoreConfig::Filesystem {
                path: PathBuf::from("/data")
            }
        );
    }

    #[test]
    fn s3_config_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = AppConfig {
            store: StoreConfig::S3(S3Config {
                bucket: "docs".into(),
                access_key: "AKIA".into(),
                secret_key: "secret".into(),
                region: "eu-central-1".into(),
                endpoint: None,
                prefix: Some("prod".into()),
            }),
        };
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_filesystem_root_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            store: StoreConfig::Filesystem {
                path: dir.path().join("absent"),
            },
        };
        assert!(config.open_store().is_err());
    }

    #[tokio::test]
    async fn opened_filesystem_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            store: StoreConfig::Filesystem {
                path: dir.path().to_path_buf(),
            },
        };
        let store = config.open_store().unwrap();
        store.save("42", "a.txt", b"hello").await.unwrap();
        assert_eq!(store.get("42", "a.txt").await.unwrap(), b"hello");
    }
}

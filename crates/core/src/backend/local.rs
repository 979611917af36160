use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::DocumentStore;
use crate::error::{Result, StoreError};
use crate::key::DocumentKey;

/// Documents stored as `root/<owner>/<filename>`.
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Open a store rooted at an existing directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(StoreError::Config(format!(
                "directory does not exist: {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }
}

fn io_error(path: PathBuf, source: std::io::Error) -> StoreError {
    StoreError::Io { path, source }
}

#[async_trait]
impl DocumentStore for FilesystemStore {
    async fn get(&self, owner: &str, filename: &str) -> Result<Vec<u8>> {
        let key = DocumentKey::new(owner, filename)?;
        let full = key.file_path(&self.root);
        debug!(owner, file = filename, path = %full.display(), "reading document");
        match tokio::fs::read(&full).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(io_error(full, e)),
        }
    }

    async fn save(&self, owner: &str, filename: &str, data: &[u8]) -> Result<()> {
        let key = DocumentKey::new(owner, filename)?;
        let dir = key.owner_dir(&self.root);
        // create_dir_all tolerates a concurrent save creating the same owner.
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| io_error(dir, e))?;

        let full = key.file_path(&self.root);
        debug!(owner, file = filename, bytes = data.len(), "writing document");
        tokio::fs::write(&full, data)
            .await
            .map_err(|e| io_error(full, e))
    }

    async fn remove(&self, owner: &str, filename: &str) -> Result<()> {
        let key = DocumentKey::new(owner, filename)?;
        let full = key.file_path(&self.root);
        match tokio::fs::remove_file(&full).await {
            Ok(()) => {
                debug!(owner, file = filename, "removed document");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(owner, file = filename, "nothing to remove");
                Ok(())
            }
            Err(e) => Err(io_error(full, e)),
        }
    }
}

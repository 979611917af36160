pub mod local;
pub mod object;
pub mod s3;

use async_trait::async_trait;

use crate::error::Result;

/// Get, save and remove documents addressed by owner and filename.
///
/// Every backend composes `owner` and `filename` into its own locator, reports
/// a missing document on `get` as [`StoreError::NotFound`], and treats `remove`
/// of a missing document as success.
///
/// [`StoreError::NotFound`]: crate::StoreError::NotFound
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, owner: &str, filename: &str) -> Result<Vec<u8>>;
    async fn save(&self, owner: &str, filename: &str, data: &[u8]) -> Result<()>;
    async fn remove(&self, owner: &str, filename: &str) -> Result<()>;
}

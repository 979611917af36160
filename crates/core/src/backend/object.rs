use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use tracing::{debug, error};

use super::DocumentStore;
use crate::error::{Result, StoreError, TransportError};
use crate::key::DocumentKey;

const STATUS_OK: u16 = 200;
const STATUS_NO_CONTENT: u16 = 204;
const STATUS_NOT_FOUND: u16 = 404;

/// Response to a PUT or DELETE.
#[derive(Debug, Clone)]
pub struct ObjectResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Response to a GET, body still in flight.
pub struct ObjectStream {
    pub status: u16,
    pub body: BoxStream<'static, std::result::Result<Bytes, TransportError>>,
}

/// Key-addressed requests against one bucket.
///
/// Implementations return every HTTP status as a response; only failures that
/// produce no status at all are errors.
#[async_trait]
pub trait ObjectClient: Send + Sync {
    async fn get(&self, key: &str) -> std::result::Result<ObjectStream, TransportError>;
    async fn put(
        &self,
        key: &str,
        data: &[u8],
    ) -> std::result::Result<ObjectResponse, TransportError>;
    async fn delete(&self, key: &str) -> std::result::Result<ObjectResponse, TransportError>;
}

/// Documents stored under the object key `[prefix/]<owner>/<filename>`.
pub struct ObjectStore<C> {
    client: C,
    prefix: String,
}

impl<C: ObjectClient> ObjectStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn object_key(&self, owner: &str, filename: &str) -> Result<(DocumentKey, String)> {
        let key = DocumentKey::new(owner, filename)?;
        let full = key.object_key(&self.prefix);
        Ok((key, full))
    }
}

fn status_error(key: String, status: u16, body: &[u8]) -> StoreError {
    StoreError::Status {
        key,
        status,
        body: String::from_utf8_lossy(body).into_owned(),
    }
}

#[async_trait]
impl<C: ObjectClient> DocumentStore for ObjectStore<C> {
    async fn get(&self, owner: &str, filename: &str) -> Result<Vec<u8>> {
        let (key, full) = self.object_key(owner, filename)?;
        debug!(owner, file = filename, key = %full, "GET");

        let mut response = match self.client.get(&full).await {
            Ok(response) => response,
            Err(source) => return Err(StoreError::Transport { key: full, source }),
        };

        let mut buffer = Vec::new();
        while let Some(chunk) = response.body.next().await {
            match chunk {
                Ok(chunk) => buffer.extend_from_slice(&chunk),
                Err(source) => return Err(StoreError::Transport { key: full, source }),
            }
        }

        match response.status {
            200..=299 => Ok(buffer),
            STATUS_NOT_FOUND => Err(StoreError::NotFound(key.to_string())),
            status => Err(status_error(full, status, &buffer)),
        }
    }

    async fn save(&self, owner: &str, filename: &str, data: &[u8]) -> Result<()> {
        let (_, full) = self.object_key(owner, filename)?;
        debug!(owner, file = filename, key = %full, bytes = data.len(), "PUT");

        let response = match self.client.put(&full, data).await {
            Ok(response) => response,
            Err(source) => {
                error!(key = %full, error = %source, "PUT request failed");
                return Err(StoreError::Transport { key: full, source });
            }
        };

        if response.status == STATUS_OK {
            Ok(())
        } else {
            Err(status_error(full, response.status, &response.body))
        }
    }

    async fn remove(&self, owner: &str, filename: &str) -> Result<()> {
        let (_, full) = self.object_key(owner, filename)?;
        debug!(owner, file = filename, key = %full, "DELETE");

        let response = match self.client.delete(&full).await {
            Ok(response) => response,
            Err(source) => {
                error!(key = %full, error = %source, "DELETE request failed");
                return Err(StoreError::Transport { key: full, source });
            }
        };

        if response.status == STATUS_NO_CONTENT {
            Ok(())
        } else {
            Err(status_error(full, response.status, &response.body))
        }
    }
}

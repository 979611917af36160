use async_trait::async_trait;
use futures::StreamExt;
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::region::Region;
use serde::{Deserialize, Serialize};

use super::object::{ObjectClient, ObjectResponse, ObjectStore, ObjectStream};
use crate::error::{Result, StoreError, TransportError};

fn default_region() -> String {
    "us-east-1".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Config {
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    #[serde(default = "default_region")]
    pub region: String,
    /// Custom endpoint for S3-compatible services. Implies path-style requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Reusable handle on one bucket.
///
/// rust-s3 is built without `fail-on-err`, so non-2xx statuses come back as
/// responses and are judged by [`ObjectStore`].
pub struct S3Client {
    bucket: Box<Bucket>,
}

impl S3Client {
    pub fn new(config: &S3Config) -> Result<Self> {
        let credentials = Credentials::new(
            Some(config.access_key.as_str()),
            Some(config.secret_key.as_str()),
            None,
            None,
            None,
        )
        .map_err(|e| StoreError::Config(format!("invalid S3 credentials: {e}")))?;

        let bucket = match &config.endpoint {
            Some(endpoint) => {
                let region = Region::Custom {
                    region: config.region.clone(),
                    endpoint: endpoint.clone(),
                };
                Bucket::new(&config.bucket, region, credentials)
                    .map_err(|e| StoreError::Config(format!("invalid S3 bucket: {e}")))?
                    .with_path_style()
            }
            None => {
                let region: Region = config
                    .region
                    .parse()
                    .map_err(|e| StoreError::Config(format!("invalid S3 region: {e}")))?;
                Bucket::new(&config.bucket, region, credentials)
                    .map_err(|e| StoreError::Config(format!("invalid S3 bucket: {e}")))?
            }
        };

        Ok(Self { bucket })
    }
}

impl ObjectStore<S3Client> {
    /// Client and key prefix from one config.
    pub fn s3(config: &S3Config) -> Result<Self> {
        let store = Self::new(S3Client::new(config)?);
        Ok(match &config.prefix {
            Some(prefix) => store.with_prefix(prefix.clone()),
            None => store,
        })
    }
}

#[async_trait]
impl ObjectClient for S3Client {
    async fn get(&self, key: &str) -> std::result::Result<ObjectStream, TransportError> {
        let response = self.bucket.get_object_stream(key).await?;
        let status = response.status_code;
        let body = response
            .bytes
            .map(|chunk| chunk.map_err(|e| Box::new(e) as TransportError))
            .boxed();
        Ok(ObjectStream { status, body })
    }

    async fn put(
        &self,
        key: &str,
        data: &[u8],
    ) -> std::result::Result<ObjectResponse, TransportError> {
        let response = self.bucket.put_object(key, data).await?;
        Ok(ObjectResponse {
            status: response.status_code(),
            body: response.bytes().clone(),
        })
    }

    async fn delete(&self, key: &str) -> std::result::Result<ObjectResponse, TransportError> {
        let response = self.bucket.delete_object(key).await?;
        Ok(ObjectResponse {
            status: response.status_code(),
            body: response.bytes().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_region() {
        let config: S3Config = toml::from_str(
            r#"
            bucket = "docs"
            access_key = "AKIA"
            secret_key = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint, None);
        assert_eq!(config.prefix, None);
    }

    #[test]
    fn builds_client_for_custom_endpoint() {
        let config = S3Config {
            bucket: "docs".into(),
            access_key: "minio".into(),
            secret_key: "minio123".into(),
            region: "local".into(),
            endpoint: Some("http://127.0.0.1:9000".into()),
            prefix: Some("tenant-a".into()),
        };
        assert!(ObjectStore::s3(&config).is_ok());
    }
}

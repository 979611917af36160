use std::path::PathBuf;

use thiserror::Error;

/// Boxed error raised by an object-store client before a status code is known.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend construction preconditions were not met.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid document key: {0}")]
    InvalidKey(String),

    #[error("document not found: {0}")]
    NotFound(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("object store returned {status} for {key}: {body}")]
    Status { key: String, status: u16, body: String },

    #[error("object store request failed for {key}: {source}")]
    Transport {
        key: String,
        #[source]
        source: TransportError,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True for failures that originate in the storage medium or transport.
    pub fn is_backend(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Status { .. } | Self::Transport { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_error_kinds() {
        assert!(StoreError::NotFound("1/a".into()).is_not_found());
        assert!(!StoreError::NotFound("1/a".into()).is_backend());

        let status = StoreError::Status {
            key: "1/a".into(),
            status: 500,
            body: "boom".into(),
        };
        assert!(status.is_backend());
        assert_eq!(
            status.to_string(),
            "object store returned 500 for 1/a: boom"
        );

        assert!(!StoreError::Config("missing".into()).is_backend());
    }
}

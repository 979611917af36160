pub mod backend;
pub mod error;
pub mod key;

pub use backend::DocumentStore;
pub use backend::local::FilesystemStore;
pub use backend::object::ObjectStore;
pub use backend::s3::{S3Client, S3Config};
pub use error::{Result, StoreError};
pub use key::DocumentKey;

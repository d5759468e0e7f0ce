// Object storage seam: the S3 client in production, `MemoryStore` in tests.
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod s3;

use async_trait::async_trait;
use thiserror::Error;

#[cfg(any(test, feature = "test-util"))]
pub use memory::{MemoryStore, StoredObject};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object {key} not found in bucket {bucket}")]
    NotFound { bucket: String, key: String },
    #[error("access denied to {key} in bucket {bucket}: {detail}")]
    AccessDenied {
        bucket: String,
        key: String,
        detail: String,
    },
    #[error("storage transport error: {0}")]
    Transport(String),
}

/// The two storage operations the resizer consumes.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read the full body of `bucket/key`.
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Write `body` to `bucket/key`, replacing any existing object.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;
}

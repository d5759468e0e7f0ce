use super::{ObjectStore, StorageError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// In-process bucket store standing in for S3 in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    denied_buckets: Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) {
        self.lock_objects().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.lock_objects()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// Number of objects currently held in `bucket`.
    pub fn object_count(&self, bucket: &str) -> usize {
        self.lock_objects().keys().filter(|(b, _)| b == bucket).count()
    }

    /// Make every read and write against `bucket` fail with access denied.
    pub fn deny_bucket(&self, bucket: &str) {
        self.denied_buckets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(bucket.to_string());
    }

    fn lock_objects(&self) -> std::sync::MutexGuard<'_, HashMap<(String, String), StoredObject>> {
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_access(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let denied = self
            .denied_buckets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(bucket);

        if denied {
            return Err(StorageError::AccessDenied {
                bucket: bucket.to_string(),
                key: key.to_string(),
                detail: "bucket policy denies access".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        self.check_access(bucket, key)?;
        self.object(bucket, key)
            .map(|o| o.body)
            .ok_or_else(|| StorageError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.check_access(bucket, key)?;
        self.insert(bucket, key, body, content_type);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_returns_body() {
        let store = MemoryStore::new();
        store.put("dest", "a.jpg", vec![1, 2, 3], "image/jpeg").await.unwrap();

        assert_eq!(store.get("dest", "a.jpg").await.unwrap(), vec![1, 2, 3]);
        assert_eq!(store.object("dest", "a.jpg").unwrap().content_type, "image/jpeg");
        assert_eq!(store.object_count("dest"), 1);
        assert_eq!(store.object_count("src"), 0);
    }

    #[tokio::test]
    async fn missing_object_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get("src", "nada.jpg").await.unwrap_err();

        assert!(matches!(err, StorageError::NotFound { .. }));
        assert_eq!(err.to_string(), "object nada.jpg not found in bucket src");
    }

    #[tokio::test]
    async fn denied_bucket_rejects_reads_and_writes() {
        let store = MemoryStore::new();
        store.insert("src", "a.jpg", vec![0], "image/jpeg");
        store.deny_bucket("src");

        assert!(matches!(
            store.get("src", "a.jpg").await,
            Err(StorageError::AccessDenied { .. })
        ));
        assert!(matches!(
            store.put("src", "b.jpg", vec![0], "image/jpeg").await,
            Err(StorageError::AccessDenied { .. })
        ));
    }
}

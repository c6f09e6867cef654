use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BlobStorageError {
    #[error("Access to the storage bucket was denied")]
    AccessDenied,
    #[error("Storage bucket does not exist")]
    BucketNotFound,
    #[error("Storage infrastructure error: {0}")]
    Infrastructure(String),
}

/// Outgoing port for publicly served binary assets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Stores `bytes` under `object_name`, overwriting any existing object.
    async fn upload(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobStorageError>;

    /// Public HTTPS URL the object will be served from after upload.
    fn public_url(&self, object_name: &str) -> String;
}

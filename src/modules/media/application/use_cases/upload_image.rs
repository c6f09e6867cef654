use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::media::application::ports::outgoing::blob_storage::{BlobStorage, BlobStorageError};

#[derive(Debug, Clone)]
pub enum UploadImageError {
    EmptyFileName,
    StorageError(String),
}

impl std::fmt::Display for UploadImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadImageError::EmptyFileName => write!(f, "File name cannot be empty"),
            UploadImageError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for UploadImageError {}

#[async_trait]
pub trait IUploadImageUseCase: Send + Sync {
    /// Stores the image and returns its public URL.
    async fn execute(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadImageError>;
}

#[derive(Clone)]
pub struct UploadImageUseCase {
    storage: Arc<dyn BlobStorage>,
}

impl UploadImageUseCase {
    pub fn new(storage: Arc<dyn BlobStorage>) -> Self {
        Self { storage }
    }

    /// Objects are keyed by upload time so re-uploading the same file never
    /// overwrites an image still referenced by published content.
    fn object_name(file_name: &str) -> String {
        format!("portfolio/{}_{}", Utc::now().timestamp_millis(), file_name)
    }
}

#[async_trait]
impl IUploadImageUseCase for UploadImageUseCase {
    async fn execute(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadImageError> {
        if file_name.trim().is_empty() {
            return Err(UploadImageError::EmptyFileName);
        }

        let object_name = Self::object_name(file_name);

        self.storage
            .upload(&object_name, bytes, content_type)
            .await
            .map_err(|err| match err {
                BlobStorageError::AccessDenied | BlobStorageError::BucketNotFound => {
                    UploadImageError::StorageError(err.to_string())
                }
                BlobStorageError::Infrastructure(msg) => UploadImageError::StorageError(msg),
            })?;

        Ok(self.storage.public_url(&object_name))
    }
}

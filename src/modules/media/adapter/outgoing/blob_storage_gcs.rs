use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::media::application::ports::outgoing::blob_storage::{BlobStorage, BlobStorageError};

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_upload_error(msg: &str) -> BlobStorageError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        BlobStorageError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        BlobStorageError::BucketNotFound
    } else {
        BlobStorageError::Infrastructure(msg.to_string())
    }
}

/// Internal seam to make the adapter testable without mocking google-cloud-storage types.
///
/// Tests implement this trait with a fake client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String> {
        self.0
            .upload_object(bucket_resource, object_name, bytes, content_type)
            .await
    }
}

/// Production adapter backed by a public GCS bucket.
#[derive(Clone)]
pub struct GcsBlobStorage {
    bucket: String,
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
}

impl GcsBlobStorage {
    /// Synchronous constructor - client is initialized lazily on first use.
    pub fn new(bucket: String) -> Self {
        Self {
            bucket,
            client: Arc::new(OnceCell::new()),
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    /// Test-friendly constructor with pre-initialized client.
    #[cfg(test)]
    fn with_client(bucket: String, client: Arc<dyn GcsClient>) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            bucket,
            client: Arc::new(once),
        }
    }
}

#[async_trait]
impl BlobStorage for GcsBlobStorage {
    async fn upload(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobStorageError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| BlobStorageError::Infrastructure(e.to_string()))?;

        let bucket = bucket_resource(&self.bucket);

        client
            .upload_object(&bucket, object_name, bytes, content_type)
            .await
            .map_err(|e| map_upload_error(&e))
    }

    fn public_url(&self, object_name: &str) -> String {
        format!("https://storage.googleapis.com/{}/{}", self.bucket, object_name)
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        tracing::info!("GCS storage client created");

        Ok(Self { storage })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .set_content_type(content_type.to_string())
            .send_unbuffered()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

pub mod blob_storage;

pub use blob_storage::{BlobStorage, BlobStorageError};

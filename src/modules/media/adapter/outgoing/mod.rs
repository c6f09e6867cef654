pub mod blob_storage_gcs;

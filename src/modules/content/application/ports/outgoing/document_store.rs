use async_trait::async_trait;

use crate::content::application::domain::document::{ContentDocument, ContentPatch};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("no document stored under key '{0}'")]
    NotFound(String),
    #[error("stored document is malformed: {0}")]
    Corrupt(String),
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

/// Outgoing port to the remote document store.
///
/// The store is a key/value surface: get-by-key, create-if-absent and a
/// shallow top-level merge. Deep merging is intentionally NOT part of the
/// contract; callers send complete subtrees for any section they touch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<Option<ContentDocument>, DocumentStoreError>;

    /// Persist `document` under `key` unless a record already exists.
    /// Existing records are left untouched and this returns Ok.
    async fn create_if_absent(
        &self,
        key: &str,
        document: &ContentDocument,
    ) -> Result<(), DocumentStoreError>;

    /// Replace the top-level sections listed in `patch`, leave the rest.
    async fn merge_update(&self, key: &str, patch: &ContentPatch)
        -> Result<(), DocumentStoreError>;
}

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, warn};

use crate::content::application::domain::document::{
    ContentDocument, ContentPatch, DOCUMENT_KEY,
};
use crate::content::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};

#[derive(Debug, Clone)]
pub enum UpdateContentError {
    EmptyPatch,
    StoreError(String),
}

impl std::fmt::Display for UpdateContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateContentError::EmptyPatch => write!(f, "Patch contains no sections"),
            UpdateContentError::StoreError(msg) => write!(f, "Document store error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateContentError {}

#[derive(Debug, Default)]
struct ProviderState {
    document: Option<ContentDocument>,
    loading: bool,
    last_error: Option<String>,
}

/// Holder of the current content document.
///
/// Owned by the composition root and handed to handlers through `AppState`;
/// the only mutation paths are [`load`](Self::load) and
/// [`update`](Self::update). Everything else gets cloned snapshots.
pub struct ContentProvider {
    store: Arc<dyn DocumentStore>,
    state: RwLock<ProviderState>,
}

impl ContentProvider {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            state: RwLock::new(ProviderState::default()),
        }
    }

    /// Fetch the document by its fixed key and adopt it.
    ///
    /// An absent record is seeded with the built-in default, which happens
    /// at most once: repeat loads find the stored row. Store failures never
    /// surface to callers; the provider degrades to the default document
    /// and records the failure in `last_error`.
    pub async fn load(&self) {
        {
            let mut state = self.state.write().await;
            state.loading = true;
        }

        let outcome = self.fetch_or_seed().await;

        let mut state = self.state.write().await;
        match outcome {
            Ok(document) => {
                state.document = Some(document);
                state.last_error = None;
            }
            Err(err) => {
                warn!("Content load failed, serving default document: {}", err);
                state.last_error = Some(err.to_string());
                state.document = Some(ContentDocument::default_document());
            }
        }
        state.loading = false;
    }

    async fn fetch_or_seed(&self) -> Result<ContentDocument, DocumentStoreError> {
        match self.store.fetch(DOCUMENT_KEY).await? {
            Some(document) => Ok(document),
            None => {
                let seed = ContentDocument::default_document();
                self.store.create_if_absent(DOCUMENT_KEY, &seed).await?;
                Ok(seed)
            }
        }
    }

    /// Send a shallow top-level merge to the store, then mirror it locally.
    ///
    /// On failure both the remote record and the local document are left
    /// unchanged; the failure is returned to the caller and never retried.
    pub async fn update(&self, patch: ContentPatch) -> Result<(), UpdateContentError> {
        if patch.is_empty() {
            return Err(UpdateContentError::EmptyPatch);
        }

        self.store
            .merge_update(DOCUMENT_KEY, &patch)
            .await
            .map_err(|err| {
                error!("Content update rejected by store: {}", err);
                UpdateContentError::StoreError(err.to_string())
            })?;

        let mut state = self.state.write().await;
        state
            .document
            .get_or_insert_with(ContentDocument::default_document)
            .apply(patch);
        state.last_error = None;
        Ok(())
    }

    /// Cloned snapshot of the current document; `None` before the first load.
    pub async fn current(&self) -> Option<ContentDocument> {
        self.state.read().await.document.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }
}

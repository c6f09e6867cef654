use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{BlacklistError, TokenBlacklist};
use crate::auth::application::use_cases::fetch_admin::{FetchAdminError, IFetchAdminUseCase};
use crate::auth::application::use_cases::login_admin::{
    AdminInfo, ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest,
};
use crate::auth::application::use_cases::logout_admin::{ILogoutAdminUseCase, LogoutError};
use crate::content::application::domain::document::{ContentDocument, ContentPatch};
use crate::content::application::ports::outgoing::{DocumentStore, DocumentStoreError};
use crate::media::application::use_cases::upload_image::{IUploadImageUseCase, UploadImageError};

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutAdminUseCase;

#[async_trait]
impl ILogoutAdminUseCase for StubLogoutAdminUseCase {
    async fn execute(&self, _token: &str) -> Result<(), LogoutError> {
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct StubFetchAdminUseCase;

#[async_trait]
impl IFetchAdminUseCase for StubFetchAdminUseCase {
    async fn execute(&self, admin_id: Uuid) -> Result<AdminInfo, FetchAdminError> {
        Ok(AdminInfo {
            id: admin_id,
            email: "stub@example.com".to_string(),
        })
    }
}

#[derive(Default, Clone)]
pub struct StubUploadImageUseCase;

#[async_trait]
impl IUploadImageUseCase for StubUploadImageUseCase {
    async fn execute(
        &self,
        _file_name: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, UploadImageError> {
        unimplemented!("Not used in this test")
    }
}

/// Blacklist that never reports a token as revoked. Handler tests that care
/// about revocation bring their own implementation.
#[derive(Default, Clone)]
pub struct StubTokenBlacklist;

#[async_trait]
impl TokenBlacklist for StubTokenBlacklist {
    async fn revoke(&self, _token: &str, _ttl_seconds: u64) -> Result<(), BlacklistError> {
        Ok(())
    }

    async fn is_revoked(&self, _token: &str) -> Result<bool, BlacklistError> {
        Ok(false)
    }
}

/// Document store backed by process memory, mirroring the shallow-merge
/// semantics of the real adapter so provider round-trips work in tests.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    document: Mutex<Option<ContentDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch(&self, _key: &str) -> Result<Option<ContentDocument>, DocumentStoreError> {
        Ok(self.document.lock().unwrap().clone())
    }

    async fn create_if_absent(
        &self,
        _key: &str,
        document: &ContentDocument,
    ) -> Result<(), DocumentStoreError> {
        let mut guard = self.document.lock().unwrap();
        if guard.is_none() {
            *guard = Some(document.clone());
        }
        Ok(())
    }

    async fn merge_update(
        &self,
        _key: &str,
        patch: &ContentPatch,
    ) -> Result<(), DocumentStoreError> {
        let mut guard = self.document.lock().unwrap();
        guard
            .get_or_insert_with(ContentDocument::default_document)
            .apply(patch.clone());
        Ok(())
    }
}

/// Store whose every operation fails, for degraded-path tests.
#[derive(Default, Clone)]
pub struct FailingDocumentStore;

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn fetch(&self, _key: &str) -> Result<Option<ContentDocument>, DocumentStoreError> {
        Err(DocumentStoreError::Unavailable(
            "connection refused".to_string(),
        ))
    }

    async fn create_if_absent(
        &self,
        _key: &str,
        _document: &ContentDocument,
    ) -> Result<(), DocumentStoreError> {
        Err(DocumentStoreError::Unavailable(
            "connection refused".to_string(),
        ))
    }

    async fn merge_update(
        &self,
        _key: &str,
        _patch: &ContentPatch,
    ) -> Result<(), DocumentStoreError> {
        Err(DocumentStoreError::Unavailable(
            "connection refused".to_string(),
        ))
    }
}

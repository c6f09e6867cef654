use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenProvider};
use crate::auth::application::use_cases::fetch_admin::IFetchAdminUseCase;
use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::auth::application::use_cases::logout_admin::ILogoutAdminUseCase;
use crate::content::application::ports::outgoing::DocumentStore;
use crate::content::application::provider::ContentProvider;
use crate::editor::application::sessions::EditorSessions;
use crate::media::application::use_cases::upload_image::IUploadImageUseCase;
use crate::tests::support::auth_helper::create_test_jwt_service;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    document_store: Arc<dyn DocumentStore>,
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    logout_admin: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    fetch_admin: Arc<dyn IFetchAdminUseCase + Send + Sync>,
    upload_image: Arc<dyn IUploadImageUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            document_store: Arc::new(InMemoryDocumentStore::new()),
            login_admin: Arc::new(StubLoginAdminUseCase),
            logout_admin: Arc::new(StubLogoutAdminUseCase),
            fetch_admin: Arc::new(StubFetchAdminUseCase),
            upload_image: Arc::new(StubUploadImageUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_document_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.document_store = store;
        self
    }

    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_logout_admin(
        mut self,
        uc: impl ILogoutAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.logout_admin = Arc::new(uc);
        self
    }

    pub fn with_fetch_admin(mut self, uc: impl IFetchAdminUseCase + Send + Sync + 'static) -> Self {
        self.fetch_admin = Arc::new(uc);
        self
    }

    pub fn with_upload_image(
        mut self,
        uc: impl IUploadImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.upload_image = Arc::new(uc);
        self
    }

    /// App data pair the auth extractor looks up, wired with the same token
    /// service that `issue_test_token` uses and a blacklist that never
    /// reports revocation.
    pub fn auth_app_data(
        &self,
    ) -> (
        web::Data<Arc<dyn TokenProvider + Send + Sync>>,
        web::Data<Arc<dyn TokenBlacklist + Send + Sync>>,
    ) {
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(create_test_jwt_service());
        let blacklist: Arc<dyn TokenBlacklist + Send + Sync> = Arc::new(StubTokenBlacklist);
        (web::Data::new(token_provider), web::Data::new(blacklist))
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content_provider: Arc::new(ContentProvider::new(self.document_store)),
            editor_sessions: Arc::new(EditorSessions::new()),
            login_admin_use_case: self.login_admin,
            logout_admin_use_case: self.logout_admin,
            fetch_admin_use_case: self.fetch_admin,
            upload_image_use_case: self.upload_image,
        })
    }
}

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;
use uuid::Uuid;

/// Token service wired with the same secret the app state builder installs,
/// so tokens issued here pass the auth extractor in handler tests.
pub fn create_test_jwt_service() -> JwtTokenService {
    let config = JwtConfig {
        secret_key: std::env::var("TEST_JWT_SECRET")
            .unwrap_or_else(|_| "FAKE_JWT_SECRET_DO_NOT_USE".to_string()),
        issuer: "test_issuer".to_string(),
        access_token_expiry: 3600,
    };
    JwtTokenService::new(config)
}

pub fn issue_test_token(admin_id: Uuid) -> String {
    create_test_jwt_service()
        .generate_access_token(admin_id)
        .unwrap()
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenError, TokenProvider};

#[derive(Debug, Clone)]
pub enum LogoutError {
    InvalidToken(String),
    BlacklistUnavailable(String),
}

impl std::fmt::Display for LogoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoutError::InvalidToken(msg) => write!(f, "Invalid token: {}", msg),
            LogoutError::BlacklistUnavailable(msg) => {
                write!(f, "Token blacklist unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for LogoutError {}

#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutAdminUseCase {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
}

impl LogoutAdminUseCase {
    pub fn new(
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
    ) -> Self {
        Self {
            token_provider,
            blacklist,
        }
    }
}

#[async_trait]
impl ILogoutAdminUseCase for LogoutAdminUseCase {
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        let claims = match self.token_provider.verify_token(token) {
            Ok(claims) => claims,
            // An expired token no longer grants access, nothing to revoke.
            Err(TokenError::TokenExpired) => return Ok(()),
            Err(err) => return Err(LogoutError::InvalidToken(err.to_string())),
        };

        let remaining = claims.exp - Utc::now().timestamp();
        if remaining <= 0 {
            return Ok(());
        }

        self.blacklist
            .revoke(token, remaining as u64)
            .await
            .map_err(|err| LogoutError::BlacklistUnavailable(err.to_string()))
    }
}

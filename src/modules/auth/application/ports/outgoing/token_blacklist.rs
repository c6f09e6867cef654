use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlacklistError {
    #[error("token blacklist unavailable: {0}")]
    Unavailable(String),
}

/// Revoked-token store. Logout puts the presented access token here for its
/// remaining lifetime; the auth extractor rejects anything it finds.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    async fn revoke(&self, token: &str, ttl_seconds: u64) -> Result<(), BlacklistError>;

    async fn is_revoked(&self, token: &str) -> Result<bool, BlacklistError>;
}

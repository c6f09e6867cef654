use async_trait::async_trait;
use uuid::Uuid;

/// Stored admin credentials row, as the query port returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminQuery: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AdminQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminRecord>, AdminQueryError>;
}

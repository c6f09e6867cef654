use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{AdminQuery, AdminQueryError};
use crate::auth::application::use_cases::login_admin::AdminInfo;

#[derive(Debug, Clone)]
pub enum FetchAdminError {
    AdminNotFound,
    QueryError(String),
}

impl std::fmt::Display for FetchAdminError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchAdminError::AdminNotFound => write!(f, "Admin not found"),
            FetchAdminError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchAdminError {}

#[async_trait]
pub trait IFetchAdminUseCase: Send + Sync {
    async fn execute(&self, admin_id: Uuid) -> Result<AdminInfo, FetchAdminError>;
}

#[derive(Clone)]
pub struct FetchAdminUseCase<Q>
where
    Q: AdminQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchAdminUseCase<Q>
where
    Q: AdminQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchAdminUseCase for FetchAdminUseCase<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self, admin_id: Uuid) -> Result<AdminInfo, FetchAdminError> {
        let admin = self
            .query
            .find_by_id(admin_id)
            .await
            .map_err(|err| match err {
                AdminQueryError::DatabaseError(msg) => FetchAdminError::QueryError(msg),
            })?
            .ok_or(FetchAdminError::AdminNotFound)?;

        Ok(AdminInfo {
            id: admin.id,
            email: admin.email,
        })
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    AdminQuery, AdminQueryError, PasswordHasher, TokenProvider,
};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = Self::validate_email(email)?;
        let password = Self::validate_password(password)?;

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: String) -> Result<String, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }

    fn validate_password(password: String) -> Result<String, LoginRequestError> {
        let password = password.trim();

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(password.to_string())
    }
}

// Validation happens during parsing, so handlers never see an invalid request.
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ====================== Login Response ==========================
#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginAdminResponse {
    pub access_token: String,
    pub admin: AdminInfo,
}

// ====================== Login Use Case ==========================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase<Q>
where
    Q: AdminQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginAdminUseCase<Q>
where
    Q: AdminQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginAdminUseCase for LoginAdminUseCase<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        let admin = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|err| match err {
                AdminQueryError::DatabaseError(msg) => LoginError::QueryError(msg),
            })?
            // Unknown email and wrong password are indistinguishable on purpose.
            .ok_or(LoginError::InvalidCredentials)?;

        let password_matches = self
            .password_hasher
            .verify_password(request.password(), &admin.password_hash)
            .await
            .map_err(|err| LoginError::PasswordVerificationFailed(err.to_string()))?;

        if !password_matches {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(admin.id)
            .map_err(|err| LoginError::TokenGenerationFailed(err.to_string()))?;

        Ok(LoginAdminResponse {
            access_token,
            admin: AdminInfo {
                id: admin.id,
                email: admin.email,
            },
        })
    }
}

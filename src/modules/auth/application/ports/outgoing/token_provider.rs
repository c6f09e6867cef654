use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
}

#[derive(Debug, Clone)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidSignature,
    InvalidTokenType(String),
    MalformedToken,
    EncodingError(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::InvalidTokenType(expected) => {
                write!(f, "Invalid token type, expected: {}", expected)
            }
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}

impl std::error::Error for TokenError {}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, admin_id: Uuid) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
    TaskFailed,
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashError::HashFailed => write!(f, "Password hashing failed"),
            HashError::VerifyFailed => write!(f, "Password verification failed"),
            HashError::TaskFailed => write!(f, "Hashing task failed"),
        }
    }
}

impl std::error::Error for HashError {}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// Ok(false) means "wrong password"; errors are infrastructure only.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

pub mod admin_query;
pub mod password_hasher;
pub mod token_blacklist;
pub mod token_provider;

pub use admin_query::{AdminQuery, AdminQueryError, AdminRecord};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_blacklist::{BlacklistError, TokenBlacklist};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};

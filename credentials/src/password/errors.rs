use thiserror::Error;

/// Error type for password operations.
///
/// Messages never carry the password or the pepper.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Invalid pepper: {0}")]
    InvalidPepper(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
}

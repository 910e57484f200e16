use thiserror::Error;

/// Top-level error for all account operations.
///
/// Every variant is an infrastructure fault. An unknown email or a wrong
/// password is not an error: authentication reports it as `None`.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Password comparison failed: {0}")]
    Comparison(String),

    #[error("Access token issuance failed: {0}")]
    Token(String),

    // Storage errors
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        AccountError::Unknown(err.to_string())
    }
}

use thiserror::Error;

/// Error type for password hashing and comparison.
///
/// A password that simply does not match is not an error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),

    #[error("Password comparison failed: {0}")]
    ComparisonFailed(String),
}

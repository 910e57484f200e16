use thiserror::Error;

/// Error for diagnostic log persistence
#[derive(Debug, Clone, Error)]
pub enum LogRepositoryError {
    #[error("Failed to persist error log: {0}")]
    PersistFailed(String),
}

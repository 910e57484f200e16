use async_trait::async_trait;

use crate::domain::log::errors::LogRepositoryError;

/// Durable storage for server-error diagnostics.
#[async_trait]
pub trait LogErrorRepository: Send + Sync + 'static {
    /// Append one diagnostic trace.
    ///
    /// # Errors
    /// * `PersistFailed` - Storage operation failed
    async fn log_error(&self, trace: &str) -> Result<(), LogRepositoryError>;
}

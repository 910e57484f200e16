use std::sync::Arc;

use async_trait::async_trait;
use credentials::PasswordHasher;

use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::HashComparer;
use crate::domain::account::ports::Hasher;

/// Argon2id hashing for the account domain.
///
/// Argon2 is CPU-bound, so both operations run on the blocking thread pool.
#[derive(Clone, Default)]
pub struct Argon2Adapter {
    hasher: Arc<PasswordHasher>,
}

impl Argon2Adapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Hasher for Argon2Adapter {
    async fn hash(&self, plaintext: &str) -> Result<String, AccountError> {
        let hasher = Arc::clone(&self.hasher);
        let plaintext = plaintext.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| AccountError::Hashing(e.to_string()))?
            .map_err(|e| AccountError::Hashing(e.to_string()))
    }
}

#[async_trait]
impl HashComparer for Argon2Adapter {
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, AccountError> {
        let hasher = Arc::clone(&self.hasher);
        let plaintext = plaintext.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || hasher.matches(&plaintext, &hash))
            .await
            .map_err(|e| AccountError::Comparison(e.to_string()))?
            .map_err(|e| AccountError::Comparison(e.to_string()))
    }
}

//! In-process repositories, selected with `database.url = "memory"`.
//!
//! State lives for the lifetime of the process. Integration tests use these
//! to run the full HTTP stack without Postgres.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::NewAccount;
use crate::domain::account::ports::AccountRepository;
use crate::domain::log::errors::LogRepositoryError;
use crate::domain::log::ports::LogErrorRepository;

/// Accounts keyed by email, which is unique.
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn add(&self, account: NewAccount) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.email) {
            return Err(AccountError::EmailAlreadyExists(account.email));
        }

        let stored = Account {
            id: AccountId::new(),
            name: account.name,
            email: account.email,
            password: account.password,
            access_token: None,
        };
        accounts.insert(stored.email.clone(), stored.clone());

        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn update_access_token(
        &self,
        id: &AccountId,
        access_token: &str,
    ) -> Result<(), AccountError> {
        let mut accounts = self.accounts.write().await;

        let account = accounts
            .values_mut()
            .find(|account| account.id == *id)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;
        account.access_token = Some(access_token.to_string());

        Ok(())
    }
}

/// Error traces in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryLogErrorRepository {
    entries: Arc<RwLock<Vec<String>>>,
}

impl InMemoryLogErrorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entries(&self) -> Vec<String> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl LogErrorRepository for InMemoryLogErrorRepository {
    async fn log_error(&self, trace: &str) -> Result<(), LogRepositoryError> {
        self.entries.write().await.push(trace.to_string());
        Ok(())
    }
}

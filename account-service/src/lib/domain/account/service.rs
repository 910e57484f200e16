use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AddAccountCommand;
use crate::domain::account::models::AuthenticationCommand;
use crate::domain::account::models::NewAccount;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AddAccount;
use crate::domain::account::ports::Authentication;
use crate::domain::account::ports::HashComparer;
use crate::domain::account::ports::Hasher;
use crate::domain::account::ports::TokenIssuer;

/// Account creation backed by a hasher and an account repository.
pub struct AddAccountService<H, AR>
where
    H: Hasher,
    AR: AccountRepository,
{
    hasher: Arc<H>,
    repository: Arc<AR>,
}

impl<H, AR> AddAccountService<H, AR>
where
    H: Hasher,
    AR: AccountRepository,
{
    /// Create a new add account service with injected dependencies.
    ///
    /// # Arguments
    /// * `hasher` - Password hashing implementation
    /// * `repository` - Account persistence implementation
    pub fn new(hasher: Arc<H>, repository: Arc<AR>) -> Self {
        Self { hasher, repository }
    }
}

#[async_trait]
impl<H, AR> AddAccount for AddAccountService<H, AR>
where
    H: Hasher,
    AR: AccountRepository,
{
    async fn add(&self, command: AddAccountCommand) -> Result<Account, AccountError> {
        let password = self.hasher.hash(&command.password).await?;

        let record = NewAccount {
            name: command.name,
            email: command.email,
            password,
        };

        let account = self.repository.add(record).await?;
        tracing::info!(account_id = %account.id, "Account created");

        Ok(account)
    }
}

/// Credential check and token issuance.
///
/// An unknown email and a wrong password both yield `Ok(None)` so callers
/// cannot tell them apart.
pub struct AuthenticationService<AR, HC, TI>
where
    AR: AccountRepository,
    HC: HashComparer,
    TI: TokenIssuer,
{
    repository: Arc<AR>,
    hash_comparer: Arc<HC>,
    token_issuer: Arc<TI>,
}

impl<AR, HC, TI> AuthenticationService<AR, HC, TI>
where
    AR: AccountRepository,
    HC: HashComparer,
    TI: TokenIssuer,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account lookup and token persistence
    /// * `hash_comparer` - Password comparison implementation
    /// * `token_issuer` - Access token implementation
    pub fn new(repository: Arc<AR>, hash_comparer: Arc<HC>, token_issuer: Arc<TI>) -> Self {
        Self {
            repository,
            hash_comparer,
            token_issuer,
        }
    }
}

#[async_trait]
impl<AR, HC, TI> Authentication for AuthenticationService<AR, HC, TI>
where
    AR: AccountRepository,
    HC: HashComparer,
    TI: TokenIssuer,
{
    async fn auth(&self, command: AuthenticationCommand) -> Result<Option<String>, AccountError> {
        let Some(account) = self.repository.find_by_email(&command.email).await? else {
            tracing::debug!("Authentication rejected");
            return Ok(None);
        };

        let matches = self
            .hash_comparer
            .compare(&command.password, &account.password)
            .await?;

        if !matches {
            tracing::debug!("Authentication rejected");
            return Ok(None);
        }

        let access_token = self.token_issuer.issue(&account.id).await?;

        self.repository
            .update_access_token(&account.id, &access_token)
            .await?;

        tracing::info!(account_id = %account.id, "Access token issued");

        Ok(Some(access_token))
    }
}

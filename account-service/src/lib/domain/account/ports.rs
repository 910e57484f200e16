use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AddAccountCommand;
use crate::domain::account::models::AuthenticationCommand;
use crate::domain::account::models::NewAccount;

/// Use case: create an account.
#[async_trait]
pub trait AddAccount: Send + Sync + 'static {
    /// Hash the password and persist a new account.
    ///
    /// # Arguments
    /// * `command` - Name, email and plaintext password
    ///
    /// # Returns
    /// Stored account, with identifier and hashed password
    ///
    /// # Errors
    /// * `Hashing` - Password hashing failed (nothing was persisted)
    /// * `EmailAlreadyExists` - Storage rejected a duplicate email
    /// * `DatabaseError` - Storage operation failed
    async fn add(&self, command: AddAccountCommand) -> Result<Account, AccountError>;
}

/// Use case: exchange credentials for an access token.
#[async_trait]
pub trait Authentication: Send + Sync + 'static {
    /// Verify credentials and issue a fresh access token.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// `Some(token)` on success, `None` when the email is unknown or the
    /// password does not match
    ///
    /// # Errors
    /// Any collaborator failure (storage, comparison, token issuance)
    async fn auth(&self, command: AuthenticationCommand) -> Result<Option<String>, AccountError>;
}

/// One-way password hashing.
#[async_trait]
pub trait Hasher: Send + Sync + 'static {
    /// # Errors
    /// * `Hashing` - Backend failure
    async fn hash(&self, plaintext: &str) -> Result<String, AccountError>;
}

/// Comparison of a plaintext password with a stored hash.
#[async_trait]
pub trait HashComparer: Send + Sync + 'static {
    /// # Returns
    /// `true` on match, `false` on mismatch
    ///
    /// # Errors
    /// * `Comparison` - Backend failure; never returned for a mismatch
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, AccountError>;
}

/// Issues opaque access tokens bound to an account.
#[async_trait]
pub trait TokenIssuer: Send + Sync + 'static {
    /// # Errors
    /// * `Token` - Backend failure
    async fn issue(&self, account_id: &AccountId) -> Result<String, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account and assign its identifier.
    ///
    /// # Arguments
    /// * `account` - Record with hashed password
    ///
    /// # Returns
    /// Stored account with its assigned ID and no access token
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn add(&self, account: NewAccount) -> Result<Account, AccountError>;

    /// Retrieve account by email address.
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;

    /// Replace the stored access token of an account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_access_token(
        &self,
        id: &AccountId,
        access_token: &str,
    ) -> Result<(), AccountError>;
}

use std::fmt;

use uuid::Uuid;

/// Account aggregate.
///
/// `password` always holds a hash, never the plaintext. `access_token` is
/// absent until the first successful authentication and is overwritten by
/// every later one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub access_token: Option<String>,
}

/// Account unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    ///
    /// # Returns
    /// AccountId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AddAccountCommand {
    /// Construct a new add account command.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Email address, already format-checked
    /// * `password` - Plain text password (hashed by the use case)
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Record handed to storage when an account is created.
///
/// Built from an [`AddAccountCommand`] with the password replaced by its hash.
/// Storage assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Credentials presented at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationCommand {
    pub email: String,
    pub password: String,
}

impl AuthenticationCommand {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

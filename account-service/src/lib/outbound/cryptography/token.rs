use async_trait::async_trait;
use credentials::TokenSigner;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::AccountId;
use crate::domain::account::ports::TokenIssuer;

/// Issues JWT access tokens whose subject is the account ID.
pub struct JwtAdapter {
    signer: TokenSigner,
}

impl JwtAdapter {
    pub fn new(signer: TokenSigner) -> Self {
        Self { signer }
    }
}

#[async_trait]
impl TokenIssuer for JwtAdapter {
    async fn issue(&self, account_id: &AccountId) -> Result<String, AccountError> {
        self.signer
            .sign(&account_id.to_string())
            .map_err(|e| AccountError::Token(e.to_string()))
    }
}

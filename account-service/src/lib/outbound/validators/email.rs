use email_address::EmailAddress;

use crate::inbound::http::validation::EmailValidator;
use crate::inbound::http::validation::ValidatorError;

/// RFC 5322 address check via the `email_address` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool, ValidatorError> {
        Ok(EmailAddress::is_valid(email))
    }
}

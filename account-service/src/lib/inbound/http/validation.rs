//! Request body validation.
//!
//! Validators inspect the raw JSON body of a request before any use case runs.
//! Each one reports at most one [`ValidationError`]; [`ValidationComposite`]
//! runs a fixed, ordered list of them and stops at the first failure.

use serde_json::Value;
use thiserror::Error;

pub mod compare_fields;
pub mod composite;
pub mod email;
pub mod required_field;

pub use compare_fields::CompareFieldsValidation;
pub use composite::ValidationComposite;
pub use email::EmailValidation;
pub use required_field::RequiredFieldValidation;

/// Rejection of a request body. Carries only the offending field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingParam(field) | ValidationError::InvalidParam(field) => field,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingParam(_) => "missing_param",
            ValidationError::InvalidParam(_) => "invalid_param",
        }
    }
}

/// Failure of a validator's own collaborator, as opposed to a rejected input.
#[derive(Debug, Clone, Error)]
pub enum ValidatorError {
    #[error("Email validator failed: {0}")]
    EmailValidator(String),
}

/// A single rule over a request body.
pub trait Validation: Send + Sync + 'static {
    /// # Returns
    /// `Ok(None)` when the body satisfies the rule, `Ok(Some(error))` when it
    /// does not
    ///
    /// # Errors
    /// A collaborator of the validator failed; the body was not judged
    fn validate(&self, input: &Value) -> Result<Option<ValidationError>, ValidatorError>;
}

/// Checks the format of an email address.
pub trait EmailValidator: Send + Sync + 'static {
    fn is_valid(&self, email: &str) -> Result<bool, ValidatorError>;
}

/// Read a string field from a validated body.
///
/// # Errors
/// * `InvalidParam` - Field is absent or not a JSON string
pub fn text_field(input: &Value, field: &str) -> Result<String, ValidationError> {
    input
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ValidationError::InvalidParam(field.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::MissingParam("email".to_string()).to_string(),
            "Missing param: email"
        );
        assert_eq!(
            ValidationError::InvalidParam("passwordConfirmation".to_string()).to_string(),
            "Invalid param: passwordConfirmation"
        );
    }

    #[test]
    fn test_text_field() {
        let body = json!({ "name": "Diego", "age": 42 });

        assert_eq!(text_field(&body, "name"), Ok("Diego".to_string()));
        assert_eq!(
            text_field(&body, "age"),
            Err(ValidationError::InvalidParam("age".to_string()))
        );
        assert_eq!(
            text_field(&body, "email"),
            Err(ValidationError::InvalidParam("email".to_string()))
        );
    }
}

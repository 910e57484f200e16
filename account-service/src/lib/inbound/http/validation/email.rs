use std::sync::Arc;

use serde_json::Value;

use super::EmailValidator;
use super::Validation;
use super::ValidationError;
use super::ValidatorError;

/// Rejects a body whose field is not a well-formed email address.
///
/// Errors raised by the injected [`EmailValidator`] are propagated, not
/// reported as an invalid field.
pub struct EmailValidation<E: EmailValidator> {
    field: String,
    email_validator: Arc<E>,
}

impl<E: EmailValidator> EmailValidation<E> {
    pub fn new(field: impl Into<String>, email_validator: Arc<E>) -> Self {
        Self {
            field: field.into(),
            email_validator,
        }
    }
}

impl<E: EmailValidator> Validation for EmailValidation<E> {
    fn validate(&self, input: &Value) -> Result<Option<ValidationError>, ValidatorError> {
        let Some(email) = input.get(&self.field).and_then(Value::as_str) else {
            return Ok(Some(ValidationError::InvalidParam(self.field.clone())));
        };

        if self.email_validator.is_valid(email)? {
            Ok(None)
        } else {
            Ok(Some(ValidationError::InvalidParam(self.field.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use serde_json::json;

    use super::*;

    mock! {
        pub TestEmailValidator {}

        impl EmailValidator for TestEmailValidator {
            fn is_valid(&self, email: &str) -> Result<bool, ValidatorError>;
        }
    }

    #[test]
    fn test_invalid_email() {
        let mut email_validator = MockTestEmailValidator::new();
        email_validator
            .expect_is_valid()
            .times(1)
            .returning(|_| Ok(false));

        let validation = EmailValidation::new("email", Arc::new(email_validator));
        let error = validation
            .validate(&json!({ "email": "valid_email@mail.com" }))
            .unwrap();

        assert_eq!(
            error,
            Some(ValidationError::InvalidParam("email".to_string()))
        );
    }

    #[test]
    fn test_calls_email_validator_with_email() {
        let mut email_validator = MockTestEmailValidator::new();
        email_validator
            .expect_is_valid()
            .withf(|email| email == "any_email@mail.com")
            .times(1)
            .returning(|_| Ok(true));

        let validation = EmailValidation::new("email", Arc::new(email_validator));
        let error = validation
            .validate(&json!({ "email": "any_email@mail.com" }))
            .unwrap();

        assert_eq!(error, None);
    }

    #[test]
    fn test_email_validator_failure_propagates() {
        let mut email_validator = MockTestEmailValidator::new();
        email_validator
            .expect_is_valid()
            .times(1)
            .returning(|_| Err(ValidatorError::EmailValidator("boom".to_string())));

        let validation = EmailValidation::new("email", Arc::new(email_validator));
        let result = validation.validate(&json!({ "email": "any_email@mail.com" }));

        assert!(matches!(result, Err(ValidatorError::EmailValidator(_))));
    }

    #[test]
    fn test_non_string_email_skips_validator() {
        let mut email_validator = MockTestEmailValidator::new();
        email_validator.expect_is_valid().times(0);

        let validation = EmailValidation::new("email", Arc::new(email_validator));
        let error = validation.validate(&json!({ "email": 12 })).unwrap();

        assert_eq!(
            error,
            Some(ValidationError::InvalidParam("email".to_string()))
        );
    }
}

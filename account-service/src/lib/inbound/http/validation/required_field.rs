use serde_json::Value;

use super::Validation;
use super::ValidationError;
use super::ValidatorError;

/// Rejects a body whose field is absent, null, empty or otherwise falsy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &Value) -> Result<Option<ValidationError>, ValidatorError> {
        let present = match input.get(&self.field) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(value)) => *value,
            Some(Value::String(value)) => !value.is_empty(),
            Some(Value::Number(value)) => value.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        };

        if present {
            Ok(None)
        } else {
            Ok(Some(ValidationError::MissingParam(self.field.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_field() {
        let validation = RequiredFieldValidation::new("field");

        let error = validation.validate(&json!({ "name": "any_name" })).unwrap();

        assert_eq!(
            error,
            Some(ValidationError::MissingParam("field".to_string()))
        );
    }

    #[test]
    fn test_falsy_values_are_missing() {
        let validation = RequiredFieldValidation::new("field");

        for value in [json!(null), json!(""), json!(false), json!(0)] {
            let error = validation.validate(&json!({ "field": value })).unwrap();
            assert_eq!(
                error,
                Some(ValidationError::MissingParam("field".to_string()))
            );
        }
    }

    #[test]
    fn test_present_field() {
        let validation = RequiredFieldValidation::new("field");

        let error = validation.validate(&json!({ "field": "any_value" })).unwrap();

        assert_eq!(error, None);
    }

    #[test]
    fn test_non_object_body() {
        let validation = RequiredFieldValidation::new("field");

        let error = validation.validate(&json!("just a string")).unwrap();

        assert_eq!(
            error,
            Some(ValidationError::MissingParam("field".to_string()))
        );
    }
}

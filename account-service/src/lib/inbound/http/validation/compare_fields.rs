use serde_json::Value;

use super::Validation;
use super::ValidationError;
use super::ValidatorError;

/// Rejects a body whose two fields hold different values.
///
/// The error names the second field, the one expected to echo the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareFieldsValidation {
    field: String,
    field_to_compare: String,
}

impl CompareFieldsValidation {
    pub fn new(field: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            field_to_compare: field_to_compare.into(),
        }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &Value) -> Result<Option<ValidationError>, ValidatorError> {
        if input.get(&self.field) != input.get(&self.field_to_compare) {
            return Ok(Some(ValidationError::InvalidParam(
                self.field_to_compare.clone(),
            )));
        }

        Ok(None)
    }
}

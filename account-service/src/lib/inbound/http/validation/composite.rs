use serde_json::Value;

use super::Validation;
use super::ValidationError;
use super::ValidatorError;

/// Ordered list of validations evaluated left to right.
///
/// The first rejection wins and later validations are not run.
pub struct ValidationComposite {
    validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }

    pub fn len(&self) -> usize {
        self.validations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validations.is_empty()
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, input: &Value) -> Result<Option<ValidationError>, ValidatorError> {
        for validation in &self.validations {
            if let Some(error) = validation.validate(input)? {
                return Ok(Some(error));
            }
        }

        Ok(None)
    }
}

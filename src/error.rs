//! Error types for the form engine and schema loading

use indexmap::IndexMap;
use thiserror::Error;

/// Field name to error message, in schema order
pub type FieldErrors = IndexMap<String, String>;

/// Errors raised by the form state engine and submission store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The requested form type id is not in the schema registry
    #[error("unknown form type: {0}")]
    UnknownType(String),

    /// One or more required fields are empty at submit time
    #[error("{} field(s) failed validation", .errors.len())]
    ValidationFailed { errors: FieldErrors },

    /// A record position that is no longer (or never was) valid
    #[error("index {index} out of range for {form_type} submissions (len {len})")]
    IndexOutOfRange {
        form_type: String,
        index: usize,
        len: usize,
    },

    /// Submit was requested while no form type is selected
    #[error("no form type selected")]
    NoTypeSelected,
}

impl FormError {
    /// Whether the user can recover from this error by editing the form
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FormError::ValidationFailed { .. })
    }
}

/// Errors raised while building a schema registry from JSON
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("malformed schema document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    #[error("form type `{0}` is defined more than once")]
    DuplicateFormType(String),

    #[error("field `{field}` is defined more than once in form type `{form_type}`")]
    DuplicateField { form_type: String, field: String },

    #[error("dropdown `{field}` in form type `{form_type}` has no options")]
    EmptyDropdown { form_type: String, field: String },

    #[error("schema defines no form types")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_validation_is_recoverable() {
        let validation = FormError::ValidationFailed {
            errors: FieldErrors::new(),
        };
        assert!(validation.is_recoverable());
        assert!(!FormError::UnknownType("x".into()).is_recoverable());
        assert!(!FormError::NoTypeSelected.is_recoverable());
        assert!(!FormError::IndexOutOfRange {
            form_type: "address".into(),
            index: 3,
            len: 1,
        }
        .is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = FormError::IndexOutOfRange {
            form_type: "address".into(),
            index: 3,
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "index 3 out of range for address submissions (len 1)"
        );
        assert_eq!(
            FormError::UnknownType("shipping".into()).to_string(),
            "unknown form type: shipping"
        );

        let mut errors = FieldErrors::new();
        errors.insert("street".into(), "Street is required".into());
        let err = FormError::ValidationFailed { errors };
        assert_eq!(err.to_string(), "1 field(s) failed validation");
    }
}

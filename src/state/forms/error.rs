//! Errors raised by the form engine
//!
//! Every variant is a caller-input problem reported by the call that
//! triggered it. Failing a validation rule is not an error; see
//! [`SubmissionResult`](super::SubmissionResult).

use super::field::FieldKindTag;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("schema error: {0}")]
    Schema(String),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{field}` expects a {expected} value, got {found}")]
    TypeMismatch {
        field: String,
        expected: FieldKindTag,
        found: FieldKindTag,
    },

    #[error("`{value}` is not an option of field `{field}`")]
    InvalidOption { field: String, value: String },

    #[error("field `{0}` only accepts finite numbers")]
    NonFiniteNumber(String),
}

impl FormError {
    /// Name of the field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            FormError::Schema(_) => None,
            FormError::UnknownField(f) | FormError::NonFiniteNumber(f) => Some(f.as_str()),
            FormError::TypeMismatch { field, .. } | FormError::InvalidOption { field, .. } => {
                Some(field.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = FormError::TypeMismatch {
            field: "age".to_string(),
            expected: FieldKindTag::Number,
            found: FieldKindTag::Text,
        };
        assert_eq!(
            err.to_string(),
            "field `age` expects a number value, got text"
        );

        let err = FormError::InvalidOption {
            field: "gender".to_string(),
            value: "C".to_string(),
        };
        assert_eq!(err.to_string(), "`C` is not an option of field `gender`");
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(FormError::Schema("x".into()).field(), None);
        assert_eq!(
            FormError::UnknownField("nope".into()).field(),
            Some("nope")
        );
    }
}

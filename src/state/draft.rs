//! Raw keyboard input buffers, one per form field
//!
//! Drafts sit between key events and the form engine. They hold what the
//! user typed and turn it into a [`FieldValue`] only when asked, so a
//! half-typed number like `-` never reaches the engine.

use crate::state::forms::{FieldKind, FieldSpec, FieldValue, FormError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field}: `{input}` is not a number")]
    NotANumber { field: String, input: String },

    #[error(transparent)]
    Form(#[from] FormError),
}

impl InputError {
    /// Field the bad input belongs to
    pub fn field(&self) -> Option<&str> {
        match self {
            InputError::NotANumber { field, .. } => Some(field.as_str()),
            InputError::Form(err) => err.field(),
        }
    }
}

/// Edit buffer for a single field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDraft {
    Text(String),
    Number(String),
    Select { options: Vec<String>, index: usize },
}

impl FieldDraft {
    /// Seed a draft from the field's current value. A number at its default
    /// of 0 starts empty so typing does not append to a placeholder.
    pub fn for_field(spec: &FieldSpec, value: Option<&FieldValue>) -> Self {
        match &spec.kind {
            FieldKind::Text => FieldDraft::Text(
                value
                    .and_then(FieldValue::as_text)
                    .unwrap_or_default()
                    .to_string(),
            ),
            FieldKind::Number => FieldDraft::Number(
                value
                    .and_then(FieldValue::as_number)
                    .filter(|n| *n != 0.0)
                    .map(|n| FieldValue::Number(n).to_string())
                    .unwrap_or_default(),
            ),
            FieldKind::Select(options) => {
                let index = value
                    .and_then(FieldValue::as_text)
                    .and_then(|current| options.iter().position(|o| o == current))
                    .unwrap_or(0);
                FieldDraft::Select {
                    options: options.clone(),
                    index,
                }
            }
        }
    }

    /// Append a typed character. Returns false when the draft ignores it.
    pub fn push_char(&mut self, c: char) -> bool {
        match self {
            FieldDraft::Text(s) => {
                s.push(c);
                true
            }
            FieldDraft::Number(s) => {
                let accepted = c.is_ascii_digit()
                    || (c == '.' && !s.contains('.'))
                    || (c == '-' && s.is_empty());
                if accepted {
                    s.push(c);
                }
                accepted
            }
            FieldDraft::Select { .. } => false,
        }
    }

    /// Remove the last character
    pub fn pop_char(&mut self) {
        match self {
            FieldDraft::Text(s) | FieldDraft::Number(s) => {
                s.pop();
            }
            FieldDraft::Select { .. } => {}
        }
    }

    /// Move a select to the next or previous option, wrapping around
    pub fn cycle(&mut self, forward: bool) {
        if let FieldDraft::Select { options, index } = self {
            let count = options.len();
            if count == 0 {
                return;
            }
            *index = if forward {
                (*index + 1) % count
            } else {
                (*index + count - 1) % count
            };
        }
    }

    /// Parse the buffer. An empty number draft means 0.
    pub fn to_value(&self, field: &str) -> Result<FieldValue, InputError> {
        match self {
            FieldDraft::Text(s) => Ok(FieldValue::Text(s.clone())),
            FieldDraft::Number(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(FieldValue::Number(0.0));
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(FieldValue::Number)
                    .ok_or_else(|| InputError::NotANumber {
                        field: field.to_string(),
                        input: s.clone(),
                    })
            }
            FieldDraft::Select { options, index } => Ok(FieldValue::Text(
                options.get(*index).cloned().unwrap_or_default(),
            )),
        }
    }

    /// Text as the user sees it
    pub fn display(&self) -> &str {
        match self {
            FieldDraft::Text(s) | FieldDraft::Number(s) => s,
            FieldDraft::Select { options, index } => {
                options.get(*index).map(String::as_str).unwrap_or_default()
            }
        }
    }
}

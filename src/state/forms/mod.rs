//! Form domain layer
//!
//! A small data-driven form engine: a [`FormSchema`] describes the fields,
//! a [`FormState`] holds their values, and a [`RuleSet`] decides whether a
//! submission is accepted. Rendering and raw input parsing live elsewhere.

mod error;
mod field;
mod form;
mod form_state;
pub mod rules;
mod schema;

pub use error::FormError;
pub use field::{FieldKind, FieldKindTag, FieldSpec, FieldValue};
pub use form::Form;
pub use form_state::FormState;
pub use rules::{FieldError, RuleSet, SubmissionResult};
pub use schema::FormSchema;

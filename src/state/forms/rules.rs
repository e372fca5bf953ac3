//! Validation rules and submission results
//!
//! Rules are plain predicates over a [`FieldValue`] paired with a message.
//! Validation visits fields in schema order and each field's rules in
//! registration order, and never stops early: the caller sees every
//! violation at once. A rule naming a field the state does not have is
//! reported as a violation too.

use super::error::FormError;
use super::field::FieldValue;
use super::form_state::FormState;
use super::schema::FormSchema;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub type Predicate = Box<dyn Fn(&FieldValue) -> bool>;

/// A predicate and the message reported when it fails
pub struct ValidationRule {
    pub field: String,
    pub message: String,
    predicate: Predicate,
}

impl ValidationRule {
    pub fn check(&self, value: &FieldValue) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Rules of one form, grouped by field
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, Vec<ValidationRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to `field`'s list
    pub fn register<P>(
        &mut self,
        schema: &FormSchema,
        field: &str,
        predicate: P,
        message: impl Into<String>,
    ) -> Result<(), FormError>
    where
        P: Fn(&FieldValue) -> bool + 'static,
    {
        if !schema.contains(field) {
            return Err(FormError::UnknownField(field.to_string()));
        }
        self.rules
            .entry(field.to_string())
            .or_default()
            .push(ValidationRule {
                field: field.to_string(),
                message: message.into(),
                predicate: Box::new(predicate),
            });
        Ok(())
    }

    pub fn for_field(&self, field: &str) -> &[ValidationRule] {
        self.rules.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Names of fields that have at least one rule, sorted
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

/// One failing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of validating a state against its rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub accepted: bool,
    pub errors: Vec<FieldError>,
}

impl SubmissionResult {
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.errors.iter().filter(move |e| e.field == field)
    }
}

/// Evaluate every rule of every field against the current values. Rules
/// for fields outside the state's schema are reported after the rest.
pub fn validate(state: &FormState, rules: &RuleSet) -> SubmissionResult {
    let mut errors = Vec::new();
    for spec in state.schema().fields() {
        let Some(value) = state.get(&spec.name) else {
            errors.push(FieldError {
                field: spec.name.clone(),
                message: "field has no value".to_string(),
            });
            continue;
        };
        for rule in rules.for_field(&spec.name) {
            if !rule.check(value) {
                errors.push(FieldError {
                    field: spec.name.clone(),
                    message: rule.message.clone(),
                });
            }
        }
    }
    for field in rules.fields() {
        if !state.schema().contains(field) {
            errors.push(FieldError {
                field: field.to_string(),
                message: FormError::UnknownField(field.to_string()).to_string(),
            });
        }
    }
    SubmissionResult {
        accepted: errors.is_empty(),
        errors,
    }
}

/// Same as [`validate`]; what an accepted submission means is up to the caller
pub fn submit(state: &FormState, rules: &RuleSet) -> SubmissionResult {
    validate(state, rules)
}

// Predicate builders

/// Lift a text predicate; number values fail
pub fn text(check: impl Fn(&str) -> bool + 'static) -> impl Fn(&FieldValue) -> bool {
    move |value: &FieldValue| value.as_text().is_some_and(&check)
}

/// Lift a number predicate; text values fail
pub fn number(check: impl Fn(f64) -> bool + 'static) -> impl Fn(&FieldValue) -> bool {
    move |value: &FieldValue| value.as_number().is_some_and(&check)
}

/// Non-blank text. Numbers always count as present.
pub fn required() -> impl Fn(&FieldValue) -> bool {
    |value: &FieldValue| match value {
        FieldValue::Text(s) => !s.trim().is_empty(),
        FieldValue::Number(_) => true,
    }
}

#[allow(dead_code)] // Not used by the built-in forms
pub fn length_between(min: usize, max: usize) -> impl Fn(&FieldValue) -> bool {
    text(move |s| (min..=max).contains(&s.chars().count()))
}

pub fn number_between(min: f64, max: f64) -> impl Fn(&FieldValue) -> bool {
    number(move |n| min <= n && n <= max)
}

pub fn matches(pattern: Regex) -> impl Fn(&FieldValue) -> bool {
    text(move |s| pattern.is_match(s))
}

//! A form instance: live values (bound to their schema) and rules

use super::error::FormError;
use super::field::FieldValue;
use super::form_state::FormState;
use super::rules::{self, RuleSet, SubmissionResult};
use super::schema::FormSchema;

#[derive(Debug)]
pub struct Form {
    state: FormState,
    rules: RuleSet,
}

impl Form {
    pub fn new(schema: FormSchema) -> Result<Self, FormError> {
        Ok(Self {
            state: FormState::new(schema)?,
            rules: RuleSet::new(),
        })
    }

    pub fn schema(&self) -> &FormSchema {
        self.state.schema()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.state.get(name)
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        self.state = self.state.with_field(name, value.into())?;
        Ok(())
    }

    pub fn add_validation<P>(
        &mut self,
        field: &str,
        predicate: P,
        message: impl Into<String>,
    ) -> Result<(), FormError>
    where
        P: Fn(&FieldValue) -> bool + 'static,
    {
        self.rules.register(self.state.schema(), field, predicate, message)
    }

    /// Builder form of [`add_validation`](Self::add_validation)
    pub fn with_validation<P>(
        mut self,
        field: &str,
        predicate: P,
        message: impl Into<String>,
    ) -> Result<Self, FormError>
    where
        P: Fn(&FieldValue) -> bool + 'static,
    {
        self.add_validation(field, predicate, message)?;
        Ok(self)
    }

    pub fn validate(&self) -> SubmissionResult {
        rules::validate(&self.state, &self.rules)
    }

    pub fn submit(&self) -> SubmissionResult {
        let result = rules::submit(&self.state, &self.rules);
        tracing::debug!(
            accepted = result.accepted,
            errors = result.errors.len(),
            "form submitted"
        );
        result
    }

    /// Restore every field to its default
    pub fn reset(&mut self) -> Result<(), FormError> {
        self.state = FormState::new(self.schema().clone())?;
        Ok(())
    }
}

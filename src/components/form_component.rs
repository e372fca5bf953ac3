//! A form plus everything needed to edit and present it

use crate::state::forms::{FieldSpec, Form, FormError, SubmissionResult};
use crate::state::{FieldDraft, Focus, InputError};

/// How a form wants to be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Plain,
    /// Has a description or per-field help text
    Described,
}

#[derive(Debug)]
pub struct FormComponent {
    form: Form,
    description: Option<String>,
    /// Edit buffers in schema order
    drafts: Vec<FieldDraft>,
    active_field_index: usize,
    last_result: Option<SubmissionResult>,
}

impl FormComponent {
    pub fn new(form: Form) -> Self {
        let drafts = drafts_for(&form);
        Self {
            form,
            description: None,
            drafts,
            active_field_index: 0,
            last_result: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn last_result(&self) -> Option<&SubmissionResult> {
        self.last_result.as_ref()
    }

    pub fn presentation(&self) -> Presentation {
        if self.description.is_some() || self.form.schema().has_help_text() {
            Presentation::Described
        } else {
            Presentation::Plain
        }
    }

    /// Fields paired with their edit buffers, in display order
    pub fn fields(&self) -> impl Iterator<Item = (&FieldSpec, &FieldDraft)> {
        self.form.schema().fields().iter().zip(&self.drafts)
    }

    pub fn active_spec(&self) -> Option<&FieldSpec> {
        self.form.schema().fields().get(self.active_field_index)
    }

    /// Type into the focused field
    pub fn push_char(&mut self, c: char) {
        if let Some(draft) = self.drafts.get_mut(self.active_field_index) {
            if draft.push_char(c) {
                self.sync_active();
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(draft) = self.drafts.get_mut(self.active_field_index) {
            draft.pop_char();
            self.sync_active();
        }
    }

    /// Step the focused select field
    pub fn cycle_option(&mut self, forward: bool) {
        if let Some(draft) = self.drafts.get_mut(self.active_field_index) {
            draft.cycle(forward);
            self.sync_active();
        }
    }

    /// Push every draft into the form. Stops at the first unparsable one.
    pub fn commit_drafts(&mut self) -> Result<(), InputError> {
        let names: Vec<String> = self
            .form
            .schema()
            .fields()
            .iter()
            .map(|f| f.name.clone())
            .collect();
        for (name, draft) in names.iter().zip(&self.drafts) {
            let value = draft.to_value(name)?;
            self.form.set_field(name, value)?;
        }
        Ok(())
    }

    /// Commit drafts and evaluate the rules against the result. Bad input
    /// moves focus to the field it came from.
    pub fn submit(&mut self) -> Result<&SubmissionResult, InputError> {
        if let Err(err) = self.commit_drafts() {
            if let Some(index) = err.field().and_then(|f| self.form.schema().position(f)) {
                self.active_field_index = index;
            }
            return Err(err);
        }
        let result = self.form.submit();
        if result.accepted {
            let masked = self.form.schema().fields().iter().any(|f| f.masked);
            match self.form.state().to_json() {
                Ok(values) if !masked => tracing::info!("Form accepted: {values}"),
                _ => tracing::info!("Form accepted"),
            }
        } else {
            tracing::info!("Form rejected with {} error(s)", result.errors.len());
        }
        Ok(&*self.last_result.insert(result))
    }

    /// Clear values, buffers, focus and the last result
    pub fn reset(&mut self) -> Result<(), FormError> {
        self.form.reset()?;
        self.drafts = drafts_for(&self.form);
        self.active_field_index = 0;
        self.last_result = None;
        Ok(())
    }

    /// Keep the form in step with the focused draft while typing. A draft
    /// that does not parse yet is left for `commit_drafts` to report. After
    /// a rejected submission the result is re-checked so fixed fields clear.
    fn sync_active(&mut self) {
        let Some(name) = self.active_spec().map(|s| s.name.clone()) else {
            return;
        };
        if let Some(Ok(value)) = self
            .drafts
            .get(self.active_field_index)
            .map(|d| d.to_value(&name))
        {
            if let Err(err) = self.form.set_field(&name, value) {
                tracing::debug!("Draft for {name} not applied: {err}");
            }
        }
        if self.last_result.as_ref().is_some_and(|r| !r.accepted) {
            self.last_result = Some(self.form.validate());
        }
    }
}

fn drafts_for(form: &Form) -> Vec<FieldDraft> {
    form.schema()
        .fields()
        .iter()
        .map(|spec| FieldDraft::for_field(spec, form.value(&spec.name)))
        .collect()
}

impl Focus for FormComponent {
    fn field_count(&self) -> usize {
        self.drafts.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.drafts.len().saturating_sub(1));
    }
}

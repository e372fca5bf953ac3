//! Ordered form schemas

use super::error::FormError;
use super::field::FieldSpec;
use std::collections::HashSet;

/// Ordered list of field specs; order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Build a schema, rejecting duplicate field names
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, FormError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::Schema(format!(
                    "duplicate field name `{}`",
                    field.name
                )));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Whether any field carries help text
    pub fn has_help_text(&self) -> bool {
        self.fields.iter().any(|f| f.help_text.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_names() {
        let result = FormSchema::new(vec![
            FieldSpec::text("email", "Email"),
            FieldSpec::number("email", "Email again"),
        ]);
        assert!(matches!(result, Err(FormError::Schema(_))));
    }

    #[test]
    fn test_lookup_and_order() {
        let schema = FormSchema::new(vec![
            FieldSpec::text("username", "Username"),
            FieldSpec::number("age", "Age"),
        ])
        .unwrap();
        assert_eq!(schema.fields().len(), 2);
        assert_eq!(schema.position("age"), Some(1));
        assert!(schema.contains("username"));
        assert!(schema.field("missing").is_none());
        assert!(!schema.has_help_text());
    }

    #[test]
    fn test_empty_schema() {
        let schema = FormSchema::new(vec![]).unwrap();
        assert!(schema.fields().is_empty());
    }
}

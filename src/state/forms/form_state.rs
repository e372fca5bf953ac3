//! Form state: current field values of one form instance

use super::error::FormError;
use super::field::{FieldKind, FieldSpec, FieldValue};
use super::schema::FormSchema;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Mapping from field name to value, bound to the schema it was created
/// from. Its keyset always equals that schema's field names.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: FormSchema,
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    /// Initialize every field of `schema` to its kind's default
    pub fn new(schema: FormSchema) -> Result<Self, FormError> {
        let mut values = BTreeMap::new();
        for spec in schema.fields() {
            let value = spec.default_value().ok_or_else(|| {
                FormError::Schema(format!("select field `{}` has no options", spec.name))
            })?;
            values.insert(spec.name.clone(), value);
        }
        Ok(Self { schema, values })
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Field names, sorted
    #[allow(dead_code)] // Inspection helper; the UI walks the schema instead
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Update a single field in place. Nothing changes when the call fails.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let spec = self
            .schema
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        check_value(spec, &value)?;
        self.values.insert(spec.name.clone(), value);
        Ok(())
    }

    /// Pure variant of [`set_field`](Self::set_field)
    pub fn with_field(&self, name: &str, value: FieldValue) -> Result<Self, FormError> {
        let mut next = self.clone();
        next.set_field(name, value)?;
        Ok(next)
    }

    /// JSON object of the values in schema order
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for FormState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for spec in self.schema.fields() {
            if let Some(value) = self.values.get(&spec.name) {
                map.serialize_entry(&spec.name, value)?;
            }
        }
        map.end()
    }
}

fn check_value(spec: &FieldSpec, value: &FieldValue) -> Result<(), FormError> {
    let expected = spec.kind.tag();
    if value.tag() != expected {
        return Err(FormError::TypeMismatch {
            field: spec.name.clone(),
            expected,
            found: value.tag(),
        });
    }
    match (&spec.kind, value) {
        (FieldKind::Number, FieldValue::Number(n)) if !n.is_finite() => {
            Err(FormError::NonFiniteNumber(spec.name.clone()))
        }
        (FieldKind::Select(options), FieldValue::Text(s)) if !options.contains(s) => {
            Err(FormError::InvalidOption {
                field: spec.name.clone(),
                value: s.clone(),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::FieldKindTag;
    use pretty_assertions::assert_eq;

    fn registration_schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSpec::text("username", "Username"),
            FieldSpec::text("email", "Email"),
            FieldSpec::number("age", "Age"),
            FieldSpec::select("gender", "Gender", ["Male", "Female", "Other"]),
        ])
        .unwrap()
    }

    fn registration_state() -> FormState {
        FormState::new(registration_schema()).unwrap()
    }

    mod create {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_keyset_matches_schema() {
            let state = registration_state();
            let names: Vec<&str> = state.names().collect();
            let mut expected: Vec<&str> = state
                .schema()
                .fields()
                .iter()
                .map(|f| f.name.as_str())
                .collect();
            expected.sort_unstable();
            assert_eq!(names, expected);
        }

        #[test]
        fn test_defaults() {
            let state = registration_state();
            assert_eq!(state.get("username"), Some(&FieldValue::from("")));
            assert_eq!(state.get("age"), Some(&FieldValue::Number(0.0)));
            assert_eq!(state.get("gender"), Some(&FieldValue::from("Male")));
        }

        #[test]
        fn test_select_defaults_to_first_option() {
            let schema = FormSchema::new(vec![FieldSpec::select("s", "S", ["A", "B"])]).unwrap();
            let state = FormState::new(schema).unwrap();
            assert_eq!(state.get("s"), Some(&FieldValue::from("A")));
        }

        #[test]
        fn test_empty_options_is_schema_error() {
            let schema =
                FormSchema::new(vec![FieldSpec::select("s", "S", Vec::<String>::new())]).unwrap();
            assert!(matches!(FormState::new(schema), Err(FormError::Schema(_))));
        }

        #[test]
        fn test_empty_schema_gives_empty_state() {
            let state = FormState::new(FormSchema::default()).unwrap();
            assert_eq!(state.names().count(), 0);
        }
    }

    mod set_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_changes_only_that_key() {
            let before = registration_state();
            let after = before
                .with_field("email", FieldValue::from("a@b.io"))
                .unwrap();

            assert_eq!(after.get("email"), Some(&FieldValue::from("a@b.io")));
            for name in ["username", "age", "gender"] {
                assert_eq!(after.get(name), before.get(name));
            }
        }

        #[test]
        fn test_unknown_field_never_mutates() {
            let mut state = registration_state();
            let snapshot = state.clone();
            let err = state
                .set_field("nickname", FieldValue::from("x"))
                .unwrap_err();
            assert_eq!(err, FormError::UnknownField("nickname".to_string()));
            assert_eq!(state, snapshot);
        }

        #[test]
        fn test_fields_of_another_schema_are_unknown() {
            let mut state =
                FormState::new(FormSchema::new(vec![FieldSpec::text("username", "U")]).unwrap())
                    .unwrap();
            let err = state.set_field("role", FieldValue::from("x")).unwrap_err();
            assert_eq!(err, FormError::UnknownField("role".to_string()));
            assert_eq!(state.names().collect::<Vec<_>>(), ["username"]);
        }

        #[test]
        fn test_type_mismatch() {
            let mut state = registration_state();
            let err = state
                .set_field("age", FieldValue::from("thirty"))
                .unwrap_err();
            assert_eq!(
                err,
                FormError::TypeMismatch {
                    field: "age".to_string(),
                    expected: FieldKindTag::Number,
                    found: FieldKindTag::Text,
                }
            );

            let err = state
                .set_field("gender", FieldValue::Number(1.0))
                .unwrap_err();
            assert!(matches!(err, FormError::TypeMismatch { .. }));
        }

        #[test]
        fn test_invalid_option() {
            let schema = FormSchema::new(vec![FieldSpec::select("s", "S", ["A", "B"])]).unwrap();
            let mut state = FormState::new(schema).unwrap();
            let err = state.set_field("s", FieldValue::from("C")).unwrap_err();
            assert!(matches!(err, FormError::InvalidOption { .. }));
            assert_eq!(state.get("s"), Some(&FieldValue::from("A")));

            state.set_field("s", FieldValue::from("B")).unwrap();
            assert_eq!(state.get("s"), Some(&FieldValue::from("B")));
        }

        #[test]
        fn test_rejects_nan() {
            let mut state = registration_state();
            let err = state
                .set_field("age", FieldValue::Number(f64::NAN))
                .unwrap_err();
            assert_eq!(err, FormError::NonFiniteNumber("age".to_string()));
        }
    }

    #[test]
    fn test_to_json_keeps_schema_order() {
        let mut state = registration_state();
        state.set_field("username", FieldValue::from("ada")).unwrap();
        state.set_field("age", FieldValue::from(36)).unwrap();

        let json = serde_json::to_string(&state.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"username":"ada","email":"","age":36,"gender":"Male"}"#
        );
    }

    #[test]
    fn test_to_json_keeps_fractions() {
        let mut state = registration_state();
        state.set_field("age", FieldValue::Number(36.5)).unwrap();
        assert_eq!(state.to_json().unwrap()["age"], serde_json::json!(36.5));
    }
}

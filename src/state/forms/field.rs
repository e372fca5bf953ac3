//! Field value objects and field descriptions

use serde::{Serialize, Serializer};
use std::fmt;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn tag(&self) -> FieldKindTag {
        match self {
            FieldValue::Text(_) => FieldKindTag::Text,
            FieldValue::Number(_) => FieldKindTag::Number,
        }
    }

    /// Get the text value (None for number values)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    /// Get the number value (None for text values)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

/// The integer a whole number stands for, if it fits exactly
fn whole(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() < 1e15).then_some(n as i64)
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => match whole(*n) {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{n}"),
            },
        }
    }
}

/// Untagged: text as a string, whole numbers as integers
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => match whole(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
        }
    }
}

/// The value tag a field kind stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKindTag {
    Text,
    Number,
}

impl fmt::Display for FieldKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKindTag::Text => f.write_str("text"),
            FieldKindTag::Number => f.write_str("number"),
        }
    }
}

/// What kind of input a field is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// Choice from a fixed, ordered option list. Stores a text value.
    Select(Vec<String>),
}

impl FieldKind {
    pub fn tag(&self) -> FieldKindTag {
        match self {
            FieldKind::Text | FieldKind::Select(_) => FieldKindTag::Text,
            FieldKind::Number => FieldKindTag::Number,
        }
    }
}

/// Declarative description of one form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub help_text: Option<String>,
    /// Hide the value when rendering (passwords)
    pub masked: bool,
}

impl FieldSpec {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            help_text: None,
            masked: false,
        }
    }

    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a new number field
    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    /// Create a new select field
    pub fn select<I, S>(name: &str, label: &str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn with_help(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Default value for a fresh form, None for a select without options
    pub fn default_value(&self) -> Option<FieldValue> {
        match &self.kind {
            FieldKind::Text => Some(FieldValue::Text(String::new())),
            FieldKind::Number => Some(FieldValue::Number(0.0)),
            FieldKind::Select(options) => options.first().cloned().map(FieldValue::Text),
        }
    }
}

//! Field descriptors for form schemas

use serde::{Deserialize, Serialize};

/// The kind of control a field renders as.
///
/// Serialized under the `type` key so a field reads like
/// `{"name": "state", "type": "dropdown", "options": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    Dropdown { options: Vec<String> },
}

impl FieldKind {
    /// The literal type name, matching the schema's `type` value
    pub fn native_kind(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Password => "password",
            FieldKind::Dropdown { .. } => "dropdown",
        }
    }

    /// Options of a dropdown, `None` for every other kind
    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldKind::Dropdown { options } => Some(options),
            _ => None,
        }
    }

    /// Whether typing `c` into a control of this kind is accepted.
    ///
    /// Mirrors what a native input of the same kind lets through; this is
    /// not validation and never looks at the field's meaning.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            FieldKind::Number => c.is_ascii_digit() || c == '.' || c == '-',
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            FieldKind::Text | FieldKind::Password => !c.is_control(),
            FieldKind::Dropdown { .. } => false,
        }
    }
}

/// A single field of a form type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind,
            label: label.to_string(),
            required,
        }
    }

    /// Create a plain text field
    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required)
    }

    /// Create a number field
    pub fn number(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Number, required)
    }

    /// Create a date field
    pub fn date(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Date, required)
    }

    /// Create a masked password field
    pub fn password(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Password, required)
    }

    /// Create a dropdown field with the given options, in display order
    pub fn dropdown(name: &str, label: &str, options: &[&str], required: bool) -> Self {
        let options = options.iter().map(|o| o.to_string()).collect();
        Self::new(name, label, FieldKind::Dropdown { options }, required)
    }

    /// Message recorded when this field is required but left empty
    pub fn required_message(&self) -> String {
        format!("{} is required", self.label)
    }
}

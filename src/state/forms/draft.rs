//! In-progress form values

use crate::error::FieldErrors;
use indexmap::IndexMap;

/// Unsubmitted values and errors for the selected form type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub selected_type_id: Option<String>,
    /// Raw field values as typed, in entry order
    pub values: IndexMap<String, String>,
    pub errors: FieldErrors,
}

impl FormDraft {
    /// Switch to another form type, dropping all values and errors
    pub fn reset_to(&mut self, type_id: Option<String>) {
        self.selected_type_id = type_id;
        self.clear_entries();
    }

    /// Drop values and errors, keeping the selected type
    pub fn clear_entries(&mut self) {
        self.values.clear();
        self.errors.clear();
    }

    /// Current value of a field; a field never typed into reads as empty
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Whether the trimmed value of a field is empty
    pub fn is_blank(&self, name: &str) -> bool {
        self.value(name).trim().is_empty()
    }

    /// Current error of a field, if any
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors
            .get(name)
            .map(String::as_str)
            .filter(|e| !e.is_empty())
    }
}

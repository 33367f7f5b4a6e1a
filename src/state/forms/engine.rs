//! Form state engine: type selection, field updates, validation and submit

use super::draft::FormDraft;
use crate::error::{FieldErrors, FormError};
use crate::schema::{FormTypeDescriptor, SchemaRegistry};
use crate::state::SubmissionRecord;
use indexmap::IndexMap;
use std::sync::Arc;

/// Owns the draft for the selected form type and its derived progress
#[derive(Debug, Clone)]
pub struct FormEngine {
    schema: Arc<SchemaRegistry>,
    draft: FormDraft,
    progress: f64,
}

impl FormEngine {
    pub fn new(schema: Arc<SchemaRegistry>) -> Self {
        Self {
            schema,
            draft: FormDraft::default(),
            progress: 0.0,
        }
    }

    pub fn selected_type_id(&self) -> Option<&str> {
        self.draft.selected_type_id.as_deref()
    }

    /// Descriptor of the selected form type
    pub fn selected_form(&self) -> Option<&FormTypeDescriptor> {
        self.selected_type_id()
            .and_then(|id| self.schema.form_type(id).ok())
    }

    pub fn value(&self, name: &str) -> &str {
        self.draft.value(name)
    }

    pub fn values(&self) -> &IndexMap<String, String> {
        &self.draft.values
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.draft.error(name)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.draft.errors
    }

    /// Percentage of required fields filled, as of the last state change
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Select a form type, discarding the current draft
    pub fn select_type(&mut self, type_id: &str) -> Result<(), FormError> {
        if !self.schema.contains(type_id) {
            tracing::warn!("Rejected selection of unknown form type {type_id}");
            return Err(FormError::UnknownType(type_id.to_string()));
        }
        self.draft.reset_to(Some(type_id.to_string()));
        self.refresh_progress();
        tracing::debug!("Selected form type {type_id}");
        Ok(())
    }

    /// Store a raw value and clear the field's error. No trimming happens here.
    pub fn update_field(&mut self, name: &str, raw_value: &str) {
        self.draft
            .values
            .insert(name.to_string(), raw_value.to_string());
        self.draft.errors.shift_remove(name);
        self.refresh_progress();
    }

    /// 100 × filled required / required, or 0 with no required fields
    pub fn compute_progress(&self) -> f64 {
        let Some(form) = self.selected_form() else {
            return 0.0;
        };

        let mut required = 0usize;
        let mut filled = 0usize;
        for field in form.required_fields() {
            required += 1;
            if !self.draft.is_blank(&field.name) {
                filled += 1;
            }
        }

        if required == 0 {
            0.0
        } else {
            100.0 * filled as f64 / required as f64
        }
    }

    fn refresh_progress(&mut self) {
        self.progress = self.compute_progress();
    }

    /// Required fields whose trimmed value is empty, in schema order
    pub fn validate(&self) -> FieldErrors {
        let Some(form) = self.selected_form() else {
            return FieldErrors::new();
        };

        form.required_fields()
            .filter(|field| self.draft.is_blank(&field.name))
            .map(|field| (field.name.clone(), field.required_message()))
            .collect()
    }

    /// Validate and, on success, turn the draft into a trimmed record.
    ///
    /// On failure the errors are kept on the draft and `values` is left as is.
    /// On success the draft is emptied but the form type stays selected.
    pub fn submit(&mut self) -> Result<SubmissionRecord, FormError> {
        let Some(type_id) = self.draft.selected_type_id.clone() else {
            return Err(FormError::NoTypeSelected);
        };

        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!("Submit of {type_id} rejected: {} missing", errors.len());
            self.draft.errors = errors.clone();
            return Err(FormError::ValidationFailed { errors });
        }

        let fields = self
            .values()
            .iter()
            .map(|(name, value)| (name.clone(), value.trim().to_string()))
            .collect();
        self.draft.clear_entries();
        self.refresh_progress();

        tracing::debug!("Submitted {type_id} form");
        Ok(SubmissionRecord::new(&type_id, fields))
    }

    /// Repopulate the draft from a stored record for editing
    pub fn load_for_edit(&mut self, type_id: &str, record: SubmissionRecord) -> Result<(), FormError> {
        if !self.schema.contains(type_id) {
            return Err(FormError::UnknownType(type_id.to_string()));
        }
        self.draft.reset_to(Some(type_id.to_string()));
        self.draft.values = record.fields;
        self.refresh_progress();
        tracing::debug!("Loaded {type_id} record for editing");
        Ok(())
    }
}

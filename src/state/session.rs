//! A single user session: form engine, submission store and notifications
//!
//! The session composes the submit, edit and delete flows so that neither the
//! engine nor the store needs to know about the other.

use super::forms::FormEngine;
use super::notifications::{NotificationKind, Notifier};
use super::submissions::{SubmissionRecord, SubmissionStore};
use crate::error::FormError;
use crate::schema::SchemaRegistry;
use std::sync::Arc;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const SUBMIT_FAILED_MESSAGE: &str = "Please correct the errors in the form";
pub const EDIT_READY_MESSAGE: &str = "Entry ready for editing";
pub const DELETE_SUCCESS_MESSAGE: &str = "Entry deleted successfully";

/// Exclusive owner of one draft and one submission store
#[derive(Debug)]
pub struct Session<N: Notifier> {
    schema: Arc<SchemaRegistry>,
    engine: FormEngine,
    store: SubmissionStore,
    notifier: N,
}

impl<N: Notifier> Session<N> {
    pub fn new(schema: Arc<SchemaRegistry>, notifier: N) -> Self {
        Self {
            engine: FormEngine::new(Arc::clone(&schema)),
            store: SubmissionStore::new(&schema),
            schema,
            notifier,
        }
    }

    pub fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    pub fn engine(&self) -> &FormEngine {
        &self.engine
    }

    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn select_type(&mut self, type_id: &str) -> Result<(), FormError> {
        self.engine.select_type(type_id)
    }

    pub fn update_field(&mut self, name: &str, raw_value: &str) {
        self.engine.update_field(name, raw_value);
    }

    /// Submit the draft and store the record.
    ///
    /// A `ValidationFailed` error has already been reported to the user
    /// when it is returned; the field errors are on the engine.
    pub fn submit(&mut self) -> Result<(), FormError> {
        match self.engine.submit() {
            Ok(record) => {
                let type_id = record.form_type.clone();
                self.store.append(&type_id, record)?;
                self.notifier
                    .notify(NotificationKind::Success, SUBMIT_SUCCESS_MESSAGE);
                Ok(())
            }
            Err(err @ FormError::ValidationFailed { .. }) => {
                self.notifier
                    .notify(NotificationKind::Error, SUBMIT_FAILED_MESSAGE);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Move a stored record back into the draft for editing
    pub fn edit(&mut self, type_id: &str, index: usize) -> Result<(), FormError> {
        let record = self.store.remove_at(type_id, index)?;
        self.engine.load_for_edit(type_id, record)?;
        self.notifier.notify(NotificationKind::Info, EDIT_READY_MESSAGE);
        Ok(())
    }

    /// Remove a stored record
    pub fn delete(&mut self, type_id: &str, index: usize) -> Result<SubmissionRecord, FormError> {
        let record = self.store.remove_at(type_id, index)?;
        self.notifier
            .notify(NotificationKind::Success, DELETE_SUCCESS_MESSAGE);
        Ok(record)
    }
}

//! Registry of form types

use super::field::{FieldDescriptor, FieldKind};
use crate::error::{FormError, SchemaError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A named form type and its ordered field list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTypeDescriptor {
    pub id: String,
    pub label: String,
    pub fields: Vec<FieldDescriptor>,
}

impl FormTypeDescriptor {
    pub fn new(id: &str, label: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            fields,
        }
    }

    /// Fields that must be filled before submit
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// Id and label of a form type, as listed in the type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTypeSummary<'a> {
    pub id: &'a str,
    pub label: &'a str,
}

/// On-disk shape of a schema file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaDocument {
    form_types: Vec<FormTypeDescriptor>,
}

/// All registered form types, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRegistry {
    types: Vec<FormTypeDescriptor>,
}

impl SchemaRegistry {
    /// The built-in user info, address and payment forms
    pub fn builtin() -> Self {
        Self {
            types: vec![
                FormTypeDescriptor::new(
                    "userInfo",
                    "User Information",
                    vec![
                        FieldDescriptor::text("firstName", "First Name", true),
                        FieldDescriptor::text("lastName", "Last Name", true),
                        FieldDescriptor::number("age", "Age", false),
                    ],
                ),
                FormTypeDescriptor::new(
                    "address",
                    "Address Information",
                    vec![
                        FieldDescriptor::text("street", "Street", true),
                        FieldDescriptor::text("city", "City", true),
                        FieldDescriptor::dropdown(
                            "state",
                            "State",
                            &["California", "Texas", "New York"],
                            true,
                        ),
                        FieldDescriptor::text("zipCode", "Zip Code", false),
                    ],
                ),
                FormTypeDescriptor::new(
                    "payment",
                    "Payment Information",
                    vec![
                        FieldDescriptor::text("cardNumber", "Card Number", true),
                        FieldDescriptor::date("expiryDate", "Expiry Date", true),
                        FieldDescriptor::password("cvv", "CVV", true),
                        FieldDescriptor::text("cardholderName", "Cardholder Name", true),
                    ],
                ),
            ],
        }
    }

    /// Build a registry, checking id and field-name uniqueness
    pub fn from_types(types: Vec<FormTypeDescriptor>) -> Result<Self, SchemaError> {
        if types.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut ids = HashSet::new();
        for form_type in &types {
            if !ids.insert(form_type.id.as_str()) {
                return Err(SchemaError::DuplicateFormType(form_type.id.clone()));
            }

            let mut names = HashSet::new();
            for field in &form_type.fields {
                if !names.insert(field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        form_type: form_type.id.clone(),
                        field: field.name.clone(),
                    });
                }
                if let FieldKind::Dropdown { options } = &field.kind {
                    if options.is_empty() {
                        return Err(SchemaError::EmptyDropdown {
                            form_type: form_type.id.clone(),
                            field: field.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { types })
    }

    /// Parse a schema document of the form `{"formTypes": [...]}`
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let document: SchemaDocument = serde_json::from_str(json)?;
        Self::from_types(document.form_types)
    }

    /// Load a schema document from disk
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        let registry = Self::from_json(&content)?;
        tracing::info!(
            "Loaded {} form types from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Ordered id/label pairs of every registered form type
    pub fn form_types(&self) -> Vec<FormTypeSummary<'_>> {
        self.types
            .iter()
            .map(|t| FormTypeSummary {
                id: &t.id,
                label: &t.label,
            })
            .collect()
    }

    /// Full descriptor of a registered form type
    pub fn form_type(&self, type_id: &str) -> Result<&FormTypeDescriptor, FormError> {
        self.types
            .iter()
            .find(|t| t.id == type_id)
            .ok_or_else(|| FormError::UnknownType(type_id.to_string()))
    }

    /// Ordered fields of a registered form type
    pub fn fields(&self, type_id: &str) -> Result<&[FieldDescriptor], FormError> {
        self.form_type(type_id).map(|t| t.fields.as_slice())
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.types.iter().any(|t| t.id == type_id)
    }

    /// Position of a form type in display order
    pub fn position(&self, type_id: &str) -> Option<usize> {
        self.types.iter().position(|t| t.id == type_id)
    }

    /// Form type at a display position
    pub fn get(&self, index: usize) -> Option<&FormTypeDescriptor> {
        self.types.get(index)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

//! Accepted submissions, grouped by form type

use crate::error::FormError;
use crate::schema::SchemaRegistry;
use indexmap::IndexMap;
use serde::Serialize;

/// A validated, trimmed submission of one form type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    /// Field name to trimmed value, in entry order
    #[serde(flatten)]
    pub fields: IndexMap<String, String>,
    #[serde(rename = "formType")]
    pub form_type: String,
}

impl SubmissionRecord {
    pub fn new(form_type: &str, fields: IndexMap<String, String>) -> Self {
        Self {
            fields,
            form_type: form_type.to_string(),
        }
    }

    /// Value of a field, if the record has it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Field names in column order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Ordered submission lists, one per registered form type.
///
/// Positions are only meaningful until the next mutation of the same
/// type's list.
#[derive(Debug, Clone, Default)]
pub struct SubmissionStore {
    tables: IndexMap<String, Vec<SubmissionRecord>>,
}

impl SubmissionStore {
    /// Create a store with an empty list for every registered form type
    pub fn new(schema: &SchemaRegistry) -> Self {
        let tables = schema.ids().map(|id| (id.to_string(), Vec::new())).collect();
        Self { tables }
    }

    /// Push a record to the end of its type's list
    pub fn append(&mut self, type_id: &str, record: SubmissionRecord) -> Result<(), FormError> {
        let records = self
            .tables
            .get_mut(type_id)
            .ok_or_else(|| FormError::UnknownType(type_id.to_string()))?;
        records.push(record);
        tracing::debug!("Stored {type_id} submission #{}", records.len());
        Ok(())
    }

    /// Remove and return the record at `index`; later records shift down
    pub fn remove_at(&mut self, type_id: &str, index: usize) -> Result<SubmissionRecord, FormError> {
        let records = self
            .tables
            .get_mut(type_id)
            .ok_or_else(|| FormError::UnknownType(type_id.to_string()))?;
        if index >= records.len() {
            tracing::warn!("Stale index {index} for {type_id} ({} records)", records.len());
            return Err(FormError::IndexOutOfRange {
                form_type: type_id.to_string(),
                index,
                len: records.len(),
            });
        }
        let record = records.remove(index);
        tracing::debug!("Removed {type_id} submission at {index}");
        Ok(record)
    }

    /// Records of one form type in submission order
    pub fn list_by_type(&self, type_id: &str) -> &[SubmissionRecord] {
        self.tables
            .get(type_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every type's records, in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SubmissionRecord])> {
        self.tables
            .iter()
            .map(|(id, records)| (id.as_str(), records.as_slice()))
    }

    /// Total number of stored records across all types
    pub fn total(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(form_type: &str, pairs: &[(&str, &str)]) -> SubmissionRecord {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SubmissionRecord::new(form_type, fields)
    }

    fn store_with_addresses(cities: &[&str]) -> SubmissionStore {
        let mut store = SubmissionStore::new(&SchemaRegistry::builtin());
        for city in cities {
            store
                .append("address", record("address", &[("city", *city)]))
                .unwrap();
        }
        store
    }

    fn cities(store: &SubmissionStore) -> Vec<&str> {
        store
            .list_by_type("address")
            .iter()
            .map(|r| r.get("city").unwrap())
            .collect()
    }

    mod submission_record {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_serializes_with_form_type_tag() {
            let r = record(
                "userInfo",
                &[("firstName", "Ann"), ("lastName", "Lee"), ("age", "")],
            );
            let json = serde_json::to_string(&r).unwrap();
            assert_eq!(
                json,
                r#"{"firstName":"Ann","lastName":"Lee","age":"","formType":"userInfo"}"#
            );
        }

        #[test]
        fn test_field_names_keep_entry_order() {
            let r = record("address", &[("city", "NYC"), ("street", "Main")]);
            let names: Vec<_> = r.field_names().collect();
            assert_eq!(names, vec!["city", "street"]);
        }
    }

    mod store {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_entry_per_type() {
            let store = SubmissionStore::new(&SchemaRegistry::builtin());
            let ids: Vec<_> = store.iter().map(|(id, _)| id).collect();
            assert_eq!(ids, vec!["userInfo", "address", "payment"]);
            assert!(store.iter().all(|(_, records)| records.is_empty()));
            assert!(store.is_empty());
        }

        #[test]
        fn test_append_keeps_submission_order() {
            let store = store_with_addresses(&["NYC", "LA", "SF"]);
            assert_eq!(cities(&store), vec!["NYC", "LA", "SF"]);
            assert_eq!(store.total(), 3);
            assert!(store.list_by_type("payment").is_empty());
        }

        #[test]
        fn test_append_unknown_type_fails() {
            let mut store = SubmissionStore::new(&SchemaRegistry::builtin());
            let result = store.append("shipping", record("shipping", &[]));
            assert_eq!(result, Err(FormError::UnknownType("shipping".into())));
        }

        #[test]
        fn test_remove_at_shifts_later_records() {
            let mut store = store_with_addresses(&["NYC", "LA", "SF"]);
            let removed = store.remove_at("address", 1).unwrap();
            assert_eq!(removed.get("city"), Some("LA"));
            assert_eq!(cities(&store), vec!["NYC", "SF"]);
        }

        #[test]
        fn test_remove_at_out_of_range() {
            let mut store = store_with_addresses(&["NYC"]);
            let result = store.remove_at("address", 1);
            assert_eq!(
                result,
                Err(FormError::IndexOutOfRange {
                    form_type: "address".into(),
                    index: 1,
                    len: 1,
                })
            );
            assert_eq!(cities(&store), vec!["NYC"]);
        }

        #[test]
        fn test_stale_index_after_removal() {
            let mut store = store_with_addresses(&["NYC", "LA"]);
            store.remove_at("address", 0).unwrap();
            assert!(store.remove_at("address", 1).is_err());
        }

        #[test]
        fn test_remove_only_touches_own_type() {
            let mut store = store_with_addresses(&["NYC"]);
            store
                .append("userInfo", record("userInfo", &[("firstName", "Ann")]))
                .unwrap();
            store.remove_at("address", 0).unwrap();
            assert_eq!(store.list_by_type("userInfo").len(), 1);
        }

        #[test]
        fn test_list_unknown_type_is_empty() {
            let store = store_with_addresses(&["NYC"]);
            assert!(store.list_by_type("shipping").is_empty());
        }

        #[test]
        fn test_delete_keeps_relative_order() {
            let names = ["a", "b", "c", "d", "e"];
            for i in 0..names.len() {
                let mut store = store_with_addresses(&names);
                store.remove_at("address", i).unwrap();
                let expected: Vec<_> = names
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, n)| *n)
                    .collect();
                assert_eq!(cities(&store), expected);
            }
        }
    }
}

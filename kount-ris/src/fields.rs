//! The flat wire-field store backing every outbound request.
//!
//! RIS requests are transmitted as `application/x-www-form-urlencoded`
//! key/value pairs. [`FieldStore`] is the single container those pairs
//! accumulate in before transmission; request builders translate their typed
//! setters into writes against it.

use std::collections::BTreeMap;

use serde::Serialize;

/// An owned mapping from wire-field name to wire-field value.
///
/// Later writes to the same key silently replace earlier ones. No key or
/// value content is validated; the empty string is a legal value, and the
/// wire protocol distinguishes it from an absent field, which is why
/// [`FieldStore::remove`] exists.
///
/// Iteration order is the sorted key order of the underlying map, so a given
/// set of fields always produces the same request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldStore {
    fields: BTreeMap<String, String>,
}

impl FieldStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a wire field, unconditionally overwriting any prior value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Removes a wire field entirely, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }

    /// Returns the value for `key`, if the field is present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns `true` if the field is present, even with an empty value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the number of fields in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the store holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, value)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_prior_value() {
        let mut store = FieldStore::new();
        store.set("MODE", "Q");
        store.set("MODE", "P");
        assert_eq!(store.get("MODE"), Some("P"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_value_is_present_not_absent() {
        let mut store = FieldStore::new();
        store.set("ORDR", "");
        assert!(store.contains("ORDR"));
        assert_eq!(store.get("ORDR"), Some(""));
    }

    #[test]
    fn test_remove_deletes_key_entirely() {
        let mut store = FieldStore::new();
        store.set("PTOK", "4111111111111111");
        assert_eq!(store.remove("PTOK"), Some("4111111111111111".to_owned()));
        assert!(!store.contains("PTOK"));
        assert_eq!(store.get("PTOK"), None);
    }

    #[test]
    fn test_iteration_is_key_sorted() {
        let mut store = FieldStore::new();
        store.set("SESS", "abc");
        store.set("MERC", "123456");
        store.set("MODE", "Q");
        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["MERC", "MODE", "SESS"]);
    }

    #[test]
    fn test_serializes_as_transparent_map() {
        let mut store = FieldStore::new();
        store.set("MERC", "123456");
        store.set("MODE", "Q");
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"MERC":"123456","MODE":"Q"}"#);
    }
}

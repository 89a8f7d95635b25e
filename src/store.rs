//! In-memory key-value store accumulated during a run

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from placeholder key to replacement value
///
/// Keys are unique and never removed. The map is ordered so persisted
/// output is deterministic run over run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueStore {
    values: BTreeMap<String, String>,
}

impl ValueStore {
    /// Current value for a key, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a value only when the key has none yet
    pub fn set_if_absent(&mut self, key: &str, value: &str) {
        self.values
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    /// Set a value unconditionally, overwriting any previous one
    pub fn force_set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the underlying mapping
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

impl From<BTreeMap<String, String>> for ValueStore {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

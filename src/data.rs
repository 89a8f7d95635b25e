//! Load and save of the persisted value store
//!
//! The on-disk format is YAML by default, JSON when the file name ends in
//! `.json`. Loaded documents must be flat key-value mappings.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::FillinError;
use crate::store::ValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn format_for(path: &Path) -> Format {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Format::Json,
        _ => Format::Yaml,
    }
}

/// Load a value store from a structured file
///
/// Scalar values (numbers, booleans) are coerced to their string form;
/// nested mappings, sequences, and nulls fail with a shape error.
pub fn load_store(path: &Path) -> Result<ValueStore, FillinError> {
    let content = fs::read_to_string(path)?;

    let values = match format_for(path) {
        Format::Yaml => {
            let raw: BTreeMap<String, serde_yaml::Value> =
                serde_yaml::from_str(&content).map_err(|_| FillinError::data_shape(path))?;
            coerce(raw, path, |value| match value {
                serde_yaml::Value::String(s) => Some(s),
                serde_yaml::Value::Number(n) => Some(n.to_string()),
                serde_yaml::Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })?
        }
        Format::Json => {
            let raw: BTreeMap<String, serde_json::Value> =
                serde_json::from_str(&content).map_err(|_| FillinError::data_shape(path))?;
            coerce(raw, path, |value| match value {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                serde_json::Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })?
        }
    };

    info!("loaded {} value(s) from {}", values.len(), path.display());
    Ok(ValueStore::from(values))
}

fn coerce<V>(
    raw: BTreeMap<String, V>,
    path: &Path,
    scalar: impl Fn(V) -> Option<String>,
) -> Result<BTreeMap<String, String>, FillinError> {
    let mut values = BTreeMap::new();
    for (key, value) in raw {
        match scalar(value) {
            Some(value) => {
                values.insert(key, value);
            }
            None => return Err(FillinError::data_shape(path)),
        }
    }
    Ok(values)
}

/// Persist a value store, keys in sorted order
pub fn save_store(path: &Path, store: &ValueStore) -> Result<(), FillinError> {
    let content = match format_for(path) {
        Format::Yaml => serde_yaml::to_string(store.as_map()).map_err(|e| {
            FillinError::Io(std::io::Error::other(format!(
                "failed to serialize {}: {}",
                path.display(),
                e
            )))
        })?,
        Format::Json => {
            let mut json = serde_json::to_string_pretty(store.as_map()).map_err(|e| {
                FillinError::Io(std::io::Error::other(format!(
                    "failed to serialize {}: {}",
                    path.display(),
                    e
                )))
            })?;
            json.push('\n');
            json
        }
    };

    fs::write(path, content)?;
    debug!("saved {} value(s) to {}", store.len(), path.display());
    Ok(())
}

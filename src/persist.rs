//! JSON snapshot persistence.
//!
//! A snapshot is a top-level JSON object whose property names are dictionary
//! keys and whose values are arrays of member strings. No versioning, no
//! metadata envelope. Order is significant in both directions: reads hand
//! back entries in file order, writes emit keys in store order (serde_json's
//! `preserve_order` feature keeps the object map insertion-ordered).
//!
//! Error classification is deliberately asymmetric. A missing file (import)
//! or missing target directory (export) raises to the caller; every other
//! failure in here lands in the recovered tier ([`StoreError::recovered`])
//! and is absorbed at the store layer.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, StoreError};

/// Read a snapshot into `(key, members)` entries, in file order.
pub fn read_snapshot(path: &Path) -> Result<Vec<(String, Vec<String>)>> {
    let text = fs::read_to_string(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => StoreError::FileNotFound,
        _ => StoreError::ImportFailed {
            detail: error.to_string(),
        },
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|error| StoreError::InvalidJson {
        detail: error.to_string(),
    })?;
    // Valid JSON of the wrong shape is not a syntax problem; it fails as a
    // generic import failure instead.
    let object = value.as_object().ok_or_else(|| StoreError::ImportFailed {
        detail: "the top level must be a JSON object".to_owned(),
    })?;
    let mut entries = Vec::with_capacity(object.len());
    for (key, members) in object {
        let members = members.as_array().ok_or_else(|| StoreError::ImportFailed {
            detail: format!("the value of '{key}' must be an array of strings"),
        })?;
        let mut sequence = Vec::with_capacity(members.len());
        for member in members {
            let member = member.as_str().ok_or_else(|| StoreError::ImportFailed {
                detail: format!("the value of '{key}' must be an array of strings"),
            })?;
            sequence.push(member.to_owned());
        }
        entries.push((key.clone(), sequence));
    }
    Ok(entries)
}

/// Write `(key, members)` entries to `path` as a pretty-printed snapshot.
pub fn write_snapshot<'a, I>(path: &Path, entries: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a String, &'a Vec<String>)>,
{
    let mut object = Map::new();
    for (key, members) in entries {
        let members = members.iter().cloned().map(Value::String).collect();
        object.insert(key.clone(), Value::Array(members));
    }
    let text = serde_json::to_string_pretty(&Value::Object(object)).map_err(|error| {
        StoreError::ExportFailed {
            detail: error.to_string(),
        }
    })?;
    fs::write(path, text).map_err(|error| match error.kind() {
        ErrorKind::NotFound => StoreError::DirectoryNotFound,
        _ => StoreError::ExportFailed {
            detail: error.to_string(),
        },
    })
}

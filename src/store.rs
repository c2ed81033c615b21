//! The in-memory dictionary store.
//!
//! A [`Dictionary`] maps keys to ordered, duplicate-free sequences of string
//! members. Keys with zero members do not exist: removing the last member of
//! a key removes the key itself. Insertion order is observable for both keys
//! and members, so the store keeps a separate key order next to the map.
//!
//! All command semantics live here; parsing and rendering live in
//! [`command`](crate::command) and [`output`](crate::output).

use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::path::Path;

use seahash::SeaHasher;
use tracing::warn;

use crate::error::{Result, StoreError};
use crate::persist;

pub type KeyHasher = BuildHasherDefault<SeaHasher>;

// ------------- Dictionary -------------
#[derive(Debug, Default)]
pub struct Dictionary {
    kept: HashMap<String, Vec<String>, KeyHasher>,
    // key insertion order, maintained in lockstep with the map
    order: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            kept: HashMap::default(),
            order: Vec::new(),
        }
    }

    /// Number of keys currently in the store.
    pub fn len(&self) -> usize {
        self.kept.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    // ------------- Queries -------------
    /// All keys, in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.order.clone()
    }

    /// The members of `key`, in insertion order.
    pub fn members(&self, key: &str) -> Result<Vec<String>> {
        if key.is_empty() {
            return Err(StoreError::missing("MEMBERS", "a key"));
        }
        match self.kept.get(key) {
            Some(members) => Ok(members.clone()),
            None => Err(StoreError::UnknownKey),
        }
    }

    pub fn key_exists(&self, key: &str) -> Result<bool> {
        if key.is_empty() {
            return Err(StoreError::missing("KEYEXISTS", "a key"));
        }
        Ok(self.kept.contains_key(key))
    }

    pub fn member_exists(&self, key: &str, member: &str) -> Result<bool> {
        if key.is_empty() || member.is_empty() {
            return Err(StoreError::missing("MEMBEREXISTS", "a key and a member"));
        }
        Ok(self
            .kept
            .get(key)
            .is_some_and(|members| members.iter().any(|m| m == member)))
    }

    /// Every member across every key, flattened in key-then-insertion order.
    pub fn all_members(&self) -> Vec<String> {
        self.order
            .iter()
            .flat_map(|key| self.kept[key].iter().cloned())
            .collect()
    }

    /// Every `key: member` pair, in the same order as [`all_members`](Self::all_members).
    pub fn items(&self) -> Vec<String> {
        self.order
            .iter()
            .flat_map(|key| {
                self.kept[key]
                    .iter()
                    .map(move |member| format!("{key}: {member}"))
            })
            .collect()
    }

    // ------------- Mutations -------------
    /// Append `member` to `key`, creating the key if it does not exist yet.
    pub fn add(&mut self, key: &str, member: &str) -> Result<&'static str> {
        if key.is_empty() || member.is_empty() {
            return Err(StoreError::missing("ADD", "a key and a member"));
        }
        if !self.kept.contains_key(key) {
            self.order.push(key.to_owned());
        }
        let members = self.kept.entry(key.to_owned()).or_default();
        if members.iter().any(|m| m == member) {
            return Err(StoreError::DuplicateMember);
        }
        members.push(member.to_owned());
        Ok("Added")
    }

    /// Remove `member` from `key`. Removing the sole member removes the key;
    /// the remaining members keep their relative order.
    pub fn remove(&mut self, key: &str, member: &str) -> Result<&'static str> {
        if key.is_empty() || member.is_empty() {
            return Err(StoreError::missing("REMOVE", "a key and a member"));
        }
        let members = self.kept.get_mut(key).ok_or(StoreError::UnknownKey)?;
        let position = members
            .iter()
            .position(|m| m == member)
            .ok_or(StoreError::UnknownMember)?;
        members.remove(position);
        if members.is_empty() {
            self.drop_key(key);
        }
        Ok("Removed")
    }

    /// Remove `key` along with all of its members.
    pub fn remove_all(&mut self, key: &str) -> Result<&'static str> {
        if key.is_empty() {
            return Err(StoreError::missing("REMOVEALL", "a key"));
        }
        if !self.kept.contains_key(key) {
            return Err(StoreError::UnknownKey);
        }
        self.drop_key(key);
        Ok("Removed")
    }

    pub fn clear(&mut self) -> &'static str {
        self.kept.clear();
        self.order.clear();
        "Cleared"
    }

    fn drop_key(&mut self, key: &str) {
        self.kept.remove(key);
        self.order.retain(|kept| kept != key);
    }

    /// Replace the whole member sequence of `key`. Used by IMPORT: a key
    /// already present keeps its position in key order, a new key appends,
    /// and an empty replacement sequence removes the key. Duplicate values
    /// in the incoming sequence collapse to their first occurrence.
    fn replace(&mut self, key: &str, members: Vec<String>) {
        let mut sequence: Vec<String> = Vec::with_capacity(members.len());
        for member in members {
            if !sequence.contains(&member) {
                sequence.push(member);
            }
        }
        if sequence.is_empty() {
            if self.kept.contains_key(key) {
                self.drop_key(key);
            }
            return;
        }
        if self.kept.insert(key.to_owned(), sequence).is_none() {
            self.order.push(key.to_owned());
        }
    }

    // ------------- Snapshots -------------
    /// Load a JSON snapshot from `path`, replacing the member sequence of
    /// every key named in the file. Keys absent from the file are untouched.
    ///
    /// A missing file raises; a syntax or shape problem in the file is
    /// recovered at this layer (logged, error surfaced, nothing replaced).
    pub fn import(&mut self, path: &str) -> Result<&'static str> {
        if path.is_empty() {
            return Err(StoreError::missing("IMPORT", "a file path"));
        }
        if !has_json_extension(path) {
            return Err(StoreError::UnsupportedImportPath);
        }
        let entries = persist::read_snapshot(Path::new(path)).map_err(|error| {
            if error.recovered() {
                warn!(path, %error, detail = error.detail().unwrap_or(""), "import recovered");
            }
            error
        })?;
        for (key, members) in entries {
            self.replace(&key, members);
        }
        Ok("Dictionary imported!")
    }

    /// Write the whole store to `path` as a pretty-printed JSON snapshot,
    /// keys and members in insertion order. An empty store has nothing to
    /// export and raises. A missing target directory raises; any other
    /// write failure is recovered at this layer.
    pub fn export(&self, path: &str) -> Result<&'static str> {
        if path.is_empty() {
            return Err(StoreError::missing("EXPORT", "a file path"));
        }
        if !has_json_extension(path) {
            return Err(StoreError::UnsupportedExportPath);
        }
        if self.kept.is_empty() {
            return Err(StoreError::NothingToExport);
        }
        let entries = self.order.iter().map(|key| (key, &self.kept[key]));
        persist::write_snapshot(Path::new(path), entries)
            .map_err(|error| {
                if error.recovered() {
                    warn!(path, %error, detail = error.detail().unwrap_or(""), "export recovered");
                }
                error
            })?;
        Ok("Dictionary exported!")
    }
}

fn has_json_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
}

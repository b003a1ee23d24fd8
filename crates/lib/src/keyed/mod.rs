//! Keyed lists.
//!
//! This module provides the keyed-list value type: an ordered sequence of
//! `{key value}` entries with unique keys per level, whose values may be
//! nested keyed lists addressed by dotted paths.
//!
//! # Core Types
//!
//! - [`KeyedList`] - The entry storage of one level
//! - [`Value`] - A shared value that may be viewed as text or as a keyed list
//! - [`KeyPath`] - A validated dotted path
//! - [`KeyedListError`] - Errors of the path operations
//!
//! # Usage
//!
//! ```
//! use keylist::{KeyedList, Value, delete, get, list_keys, set};
//!
//! let mut root = Value::empty_list();
//! set(&mut root, "a.b.c", Value::from("1")).unwrap();
//! assert_eq!(root.as_str(), "{a {{b {{c 1}}}}}");
//!
//! assert_eq!(get(&root, "a.b.c").unwrap(), "1");
//! assert!(get(&root, "a.x").unwrap_err().is_not_found());
//!
//! delete(&mut root, "a.b.c").unwrap();
//! assert!(list_keys(&root, None).unwrap().is_empty());
//! ```

mod codec;
pub mod errors;
pub mod ops;
pub mod path;
pub mod value;

pub use errors::KeyedListError;

use crate::constants::PATH_SEPARATOR;
pub use path::KeyPath;
pub use value::Value;

/// One `{key value}` pair of a keyed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: Value,
}

impl Entry {
    /// Returns the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An ordered list of entries with pairwise distinct keys.
///
/// Entries keep insertion order, which is the order used for serialization
/// and enumeration. Cloning copies the entry vector and keys but shares every
/// value with the original.
///
/// # Examples
///
/// ```
/// use keylist::KeyedList;
///
/// let mut list = KeyedList::new();
/// list.insert("name", "John").unwrap();
/// list.insert("age", "30").unwrap();
/// list.insert("name", "Jane").unwrap();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.keys().collect::<Vec<_>>(), vec!["name", "age"]);
/// assert_eq!(list.get("name").unwrap(), "Jane");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedList {
    entries: Vec<Entry>,
}

impl KeyedList {
    /// Creates a new keyed list with no entries.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty keyed list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if an entry with `key` exists at this level.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Returns the value stored under `key` at this level.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Stores `value` under `key` at this level, returning the old value if present.
    ///
    /// An existing key keeps its position; a new key is appended.
    ///
    /// # Errors
    /// - [`KeyedListError::EmptyKey`] if `key` is empty
    /// - [`KeyedListError::SeparatorInKey`] if `key` contains the path separator
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, KeyedListError> {
        let key = key.into();
        if key.is_empty() {
            return Err(KeyedListError::EmptyKey { path: key });
        }
        if key.contains(PATH_SEPARATOR) {
            return Err(KeyedListError::SeparatorInKey { key });
        }
        Ok(self.upsert(key, value.into()))
    }

    /// Removes the entry for `key` at this level, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).value)
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    /// Overwrites or appends; the caller has checked the key.
    pub(crate) fn upsert(
        &mut self,
        key: impl Into<String> + AsRef<str>,
        value: Value,
    ) -> Option<Value> {
        match self.position(key.as_ref()) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].value, value)),
            None => {
                self.entries.push(Entry {
                    key: key.into(),
                    value,
                });
                None
            }
        }
    }

    pub(crate) fn value_at_mut(&mut self, index: usize) -> Result<&mut Value, KeyedListError> {
        self.entries
            .get_mut(index)
            .map(|entry| &mut entry.value)
            .ok_or_else(|| KeyedListError::Invariant {
                reason: format!("entry index {index} out of range"),
            })
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Result<Entry, KeyedListError> {
        if index >= self.entries.len() {
            return Err(KeyedListError::Invariant {
                reason: format!("entry index {index} out of range"),
            });
        }
        Ok(self.entries.remove(index))
    }
}

impl<'a> IntoIterator for &'a KeyedList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::fmt::Display for KeyedList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::traits::Representation;
        f.write_str(&self.to_text())
    }
}

//! Shared values with lazily converted representations.
//!
//! A [`Value`] is a cheap-to-clone handle to a reference-counted cell. The cell
//! caches up to two representations of the same content:
//!
//! - the **text** form, which every value has or can produce, and
//! - the **keyed-list** form, parsed from the text the first time somebody
//!   addresses into the value by path.
//!
//! A value that was only ever used as data never gets parsed. A value built
//! by the path operations only gets its text produced when somebody asks for
//! it. At least one of the two caches is always filled.
//!
//! # Sharing
//!
//! Cloning a `Value` shares the cell. A cell may only be written while its
//! reference count is exactly one; [`Value::list_mut`] duplicates the cell
//! first when it is shared, so no other owner ever observes the write.
//!
//! ```
//! use keylist::{Value, get, set};
//!
//! let original = Value::from("{color red}");
//! let mut copy = original.clone();
//! assert!(original.is_shared());
//!
//! set(&mut copy, "color", Value::from("blue")).unwrap();
//! assert_eq!(get(&original, "color").unwrap(), "red");
//! assert_eq!(get(&copy, "color").unwrap(), "blue");
//! assert!(!original.is_shared());
//! ```

use std::{cell::OnceCell, fmt, rc::Rc};

use super::{KeyedList, errors::KeyedListError};
use crate::traits::Representation;

/// A reference-counted, shareable value.
///
/// Equality compares the text form.
#[derive(Clone)]
pub struct Value {
    cell: Rc<Repr>,
}

#[derive(Clone)]
struct Repr {
    text: OnceCell<String>,
    list: OnceCell<KeyedList>,
}

impl Value {
    /// Creates a value from its text form.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            cell: Rc::new(Repr {
                text: OnceCell::from(text.into()),
                list: OnceCell::new(),
            }),
        }
    }

    /// Creates a value holding a keyed list; its text is produced on demand.
    pub fn from_list(list: KeyedList) -> Self {
        Self {
            cell: Rc::new(Repr {
                text: OnceCell::new(),
                list: OnceCell::from(list),
            }),
        }
    }

    /// Creates a value holding a keyed list with no entries.
    pub fn empty_list() -> Self {
        Self::from_list(KeyedList::new())
    }

    /// Returns the text form, serializing the keyed list if no text is cached.
    pub fn as_str(&self) -> &str {
        if !self.has_text() {
            self.render_text();
        }
        self.cell
            .text
            .get()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Fills the text cache of this value and of every nested list below it
    /// that lacks one, deepest first.
    ///
    /// Each level is serialized only after all of its children have text, so
    /// serializing one level never descends into the next and nesting depth
    /// does not grow the call stack.
    fn render_text(&self) {
        let mut stack: Vec<(&Value, bool)> = vec![(self, false)];
        while let Some((value, children_done)) = stack.pop() {
            if value.has_text() {
                continue;
            }
            let Some(list) = value.cell.list.get() else {
                let _ = value.cell.text.set(String::new());
                continue;
            };
            if children_done {
                let _ = value.cell.text.set(list.to_text());
            } else {
                stack.push((value, true));
                stack.extend(
                    list.iter()
                        .filter(|entry| !entry.value.has_text())
                        .map(|entry| (&entry.value, false)),
                );
            }
        }
    }

    /// Returns the keyed-list form, parsing the text if no list is cached.
    ///
    /// The parsed list is cached in the cell, shared or not; that changes the
    /// representation but not the content.
    ///
    /// # Errors
    /// [`KeyedListError::Parse`] when the text is not a valid keyed list.
    pub fn coerce_list(&self) -> Result<&KeyedList, KeyedListError> {
        if let Some(list) = self.cell.list.get() {
            return Ok(list);
        }
        let parsed = KeyedList::from_text(self.as_str())?;
        tracing::trace!(entries = parsed.len(), "converted value to keyed list");
        Ok(self.cell.list.get_or_init(|| parsed))
    }

    /// Returns the keyed list for writing, duplicating the cell if it is shared.
    ///
    /// The text cache is left alone; call [`Value::invalidate_text`] once the
    /// write has succeeded.
    pub(crate) fn list_mut(&mut self) -> Result<&mut KeyedList, KeyedListError> {
        self.coerce_list()?;
        if Rc::strong_count(&self.cell) > 1 {
            tracing::trace!(
                owners = Rc::strong_count(&self.cell),
                "duplicating shared value before write"
            );
        }
        Rc::make_mut(&mut self.cell)
            .list
            .get_mut()
            .ok_or_else(|| KeyedListError::Invariant {
                reason: "keyed list cache empty after conversion".to_string(),
            })
    }

    /// Drops the cached text after a structural change.
    pub(crate) fn invalidate_text(&mut self) {
        Rc::make_mut(&mut self.cell).text.take();
    }

    /// Returns the number of owners of the underlying cell.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.cell)
    }

    /// Returns true if another owner shares the underlying cell.
    pub fn is_shared(&self) -> bool {
        self.ref_count() > 1
    }

    /// Returns true if both values share one cell.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }

    /// Returns true if the text form is currently cached.
    pub fn has_text(&self) -> bool {
        self.cell.text.get().is_some()
    }

    /// Returns true if the keyed-list form is currently cached.
    pub fn has_list(&self) -> bool {
        self.cell.list.get().is_some()
    }

    /// Sets `path` to `value` and returns the updated root.
    ///
    /// Convenience form of [`ops::set`](super::ops::set) for building values in one expression.
    pub fn with_set(
        mut self,
        path: &str,
        value: impl Into<Value>,
    ) -> Result<Value, KeyedListError> {
        super::ops::set(&mut self, path, value.into())?;
        Ok(self)
    }

    /// Deletes `path` and returns the updated root.
    pub fn with_deleted(mut self, path: &str) -> Result<Value, KeyedListError> {
        super::ops::delete(&mut self, path)?;
        Ok(self)
    }
}

// Unlinks uniquely owned nested lists one level at a time, so dropping a
// deeply nested value does not recurse once per level.
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = match Rc::get_mut(&mut self.cell).and_then(|repr| repr.list.get_mut()) {
            Some(list) if !list.is_empty() => detach_values(list),
            _ => return,
        };
        while let Some(mut value) = pending.pop() {
            if let Some(list) = Rc::get_mut(&mut value.cell).and_then(|repr| repr.list.get_mut()) {
                pending.extend(detach_values(list));
            }
        }
    }
}

fn detach_values(list: &mut KeyedList) -> Vec<Value> {
    std::mem::take(&mut list.entries)
        .into_iter()
        .map(|entry| entry.value)
        .collect()
}

impl Default for Value {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self::new(text.as_str())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::new(n.to_string())
    }
}

impl From<KeyedList> for Value {
    fn from(list: KeyedList) -> Self {
        Self::from_list(list)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.as_str() == other.as_str()
    }
}

impl Eq for Value {}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        *self == other.as_str()
    }
}

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Value::new)
    }
}

//! Dotted key paths.
//!
//! A [`KeyPath`] borrows a path string such as `"address.city"` after
//! checking that it is usable: non-empty, without empty segments, and not
//! deeper than [`MAX_PATH_DEPTH`]. Operations then walk it one segment at a
//! time with [`KeyPath::split_first`].
//!
//! ```
//! use keylist::KeyPath;
//!
//! let path = KeyPath::parse("address.city").unwrap();
//! let (head, rest) = path.split_first();
//! assert_eq!(head, "address");
//! assert_eq!(rest.map(|p| p.as_str()), Some("city"));
//!
//! assert!(KeyPath::parse("").is_err());
//! assert!(KeyPath::parse("a..b").is_err());
//! ```

use std::fmt;

use super::errors::KeyedListError;
use crate::constants::{MAX_PATH_DEPTH, PATH_SEPARATOR};

/// A validated, borrowed key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPath<'a> {
    inner: &'a str,
}

impl<'a> KeyPath<'a> {
    /// Checks `path` and borrows it as a key path.
    ///
    /// # Errors
    /// [`KeyedListError::EmptyKey`] when the path or any segment is empty,
    /// [`KeyedListError::TooDeep`] when it has more than [`MAX_PATH_DEPTH`] segments.
    pub fn parse(path: &'a str) -> Result<Self, KeyedListError> {
        let mut depth = 0;
        for segment in path.split(PATH_SEPARATOR) {
            if segment.is_empty() {
                return Err(KeyedListError::EmptyKey {
                    path: path.to_string(),
                });
            }
            depth += 1;
        }
        if depth > MAX_PATH_DEPTH {
            return Err(KeyedListError::TooDeep {
                depth,
                max: MAX_PATH_DEPTH,
            });
        }
        Ok(Self { inner: path })
    }

    /// Splits off the first segment, returning the remaining path if any.
    pub fn split_first(&self) -> (&'a str, Option<KeyPath<'a>>) {
        match self.inner.split_once(PATH_SEPARATOR) {
            Some((head, rest)) => (head, Some(KeyPath { inner: rest })),
            None => (self.inner, None),
        }
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.inner.split(PATH_SEPARATOR)
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Always false; a parsed path has at least one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &'a str {
        self.inner
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner)
    }
}

impl AsRef<str> for KeyPath<'_> {
    fn as_ref(&self) -> &str {
        self.inner
    }
}

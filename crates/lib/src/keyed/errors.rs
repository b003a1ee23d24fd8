//! Error types for keyed-list operations.
//!
//! Path operations separate three kinds of outcome besides success:
//! usage errors (an empty key), parse errors (a value on the path is not a
//! valid keyed list) and [`KeyedListError::NotFound`], which callers are expected
//! to handle as an ordinary result rather than a failure.

use thiserror::Error;

/// Structured error types for keyed-list operations.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyedListError {
    /// The key path, or one of its segments, is empty
    #[error("empty key")]
    EmptyKey { path: String },

    /// A value could not be parsed as a keyed list
    #[error("{reason}: \"{source_text}\"")]
    Parse { reason: String, source_text: String },

    /// A key contains the path separator and could never be addressed
    #[error("key may not contain a \".\": \"{key}\"")]
    SeparatorInKey { key: String },

    /// A path segment does not exist
    #[error("key not found: \"{key}\"")]
    NotFound { key: String },

    /// The key path has more segments than the engine accepts
    #[error("key path has {depth} levels, more than the maximum of {max}")]
    TooDeep { depth: usize, max: usize },

    /// Internal bookkeeping went wrong; indicates a bug
    #[error("keyed list invariant violated: {reason}")]
    Invariant { reason: String },
}

impl KeyedListError {
    /// Check if this error means the path is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, KeyedListError::NotFound { .. })
    }

    /// Check if this error comes from text that is not a keyed list
    pub fn is_parse_error(&self) -> bool {
        matches!(self, KeyedListError::Parse { .. })
    }

    /// Check if this error comes from a bad key argument
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            KeyedListError::EmptyKey { .. }
                | KeyedListError::SeparatorInKey { .. }
                | KeyedListError::TooDeep { .. }
        )
    }

    /// Get the key if this is a not-found error
    pub fn key(&self) -> Option<&str> {
        match self {
            KeyedListError::NotFound { key } => Some(key),
            _ => None,
        }
    }

    /// Get the offending text if this is a parse error
    pub fn source_text(&self) -> Option<&str> {
        match self {
            KeyedListError::Parse { source_text, .. } => Some(source_text),
            _ => None,
        }
    }

    pub(crate) fn parse(reason: impl Into<String>, source_text: impl Into<String>) -> Self {
        KeyedListError::Parse {
            reason: reason.into(),
            source_text: source_text.into(),
        }
    }
}

// Conversion from KeyedListError to the main Error type
impl From<KeyedListError> for crate::Error {
    fn from(err: KeyedListError) -> Self {
        crate::Error::KeyedList(err)
    }
}

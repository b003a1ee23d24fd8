//!
//! keylist: copy-on-write keyed lists addressed by dotted paths.
//!
//! A keyed list is an ordered set of `{key value}` entries whose values may
//! themselves be keyed lists. Values are shared by reference counting and are
//! duplicated only at the moment a shared node is about to be written.
//!
//! ## Core Concepts
//!
//! * **Values (`keyed::Value`)**: Reference-counted, shareable values carrying a cached
//!   textual form and, once somebody addresses into them by path, a cached keyed-list form.
//! * **Keyed lists (`keyed::KeyedList`)**: The ordered entry storage. Keys are unique per level.
//! * **Paths (`keyed::KeyPath`)**: Dotted strings such as `"address.city"` naming a nested entry.
//! * **Path operations (`keyed::ops`)**: `get`, `set`, `delete` and `list_keys`.
//! * **List syntax (`list_syntax`)**: The brace-grouped textual list format that keyed lists
//!   are serialized to and parsed from.
//! * **Commands (`commands::Bindings`)**: Named variable bindings with the four
//!   keyed-list commands operating on them.
//!
//! ```
//! use keylist::{Value, get, list_keys, set};
//!
//! let mut person = Value::from("{name John} {age 30}");
//! set(&mut person, "address.city", Value::from("Springfield"))?;
//!
//! assert_eq!(get(&person, "address.city")?, "Springfield");
//! assert_eq!(list_keys(&person, None)?, vec!["name", "age", "address"]);
//! # Ok::<(), keylist::Error>(())
//! ```

pub mod commands;
pub mod constants;
pub mod keyed;
pub mod list_syntax;
pub mod traits;

pub use commands::Bindings;
pub use keyed::{
    KeyPath, KeyedList, KeyedListError, Value,
    ops::{delete, get, list_keys, set},
};
pub use traits::Representation;

/// Result type used throughout the keylist library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the keylist library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured tokenizer errors from the list_syntax module
    #[error(transparent)]
    ListSyntax(list_syntax::ListSyntaxError),

    /// Structured keyed-list errors from the keyed module
    #[error(transparent)]
    KeyedList(keyed::KeyedListError),

    /// Structured command errors from the commands module
    #[error(transparent)]
    Command(commands::CommandError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::ListSyntax(_) => "list_syntax",
            Error::KeyedList(_) => "keyed",
            Error::Command(_) => "commands",
        }
    }

    /// Check if this error indicates a path or variable was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::KeyedList(err) => err.is_not_found(),
            Error::Command(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error comes from text that is not valid list syntax
    /// or not a valid keyed list.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Error::ListSyntax(_) => true,
            Error::KeyedList(err) => err.is_parse_error(),
            Error::Command(commands::CommandError::KeyedList(err)) => err.is_parse_error(),
            _ => false,
        }
    }

    /// Check if this error is a usage error such as an empty key or bad arguments.
    pub fn is_usage_error(&self) -> bool {
        match self {
            Error::KeyedList(err) => err.is_usage_error(),
            Error::Command(err) => err.is_usage_error(),
            _ => false,
        }
    }
}

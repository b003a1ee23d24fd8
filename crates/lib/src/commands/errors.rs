//! Error types for the keyed-list commands.

use thiserror::Error;

use crate::keyed::KeyedListError;

/// Structured error types for command adapters.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The named variable does not exist
    #[error("can't read \"{name}\": no such variable")]
    NoSuchVariable { name: String },

    /// Arguments do not match the command's usage
    #[error("wrong # args: should be \"{usage}\"")]
    WrongArgs { usage: String },

    /// A key path is absent from the keyed list
    #[error("key \"{key}\" not found in keyed list")]
    KeyNotFound { key: String },

    /// Any other failure of a keyed-list operation
    #[error(transparent)]
    KeyedList(#[from] KeyedListError),
}

impl CommandError {
    /// Check if this error is a missing variable or key
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CommandError::NoSuchVariable { .. } | CommandError::KeyNotFound { .. }
        )
    }

    /// Check if this error is caused by the arguments of the command
    pub fn is_usage_error(&self) -> bool {
        match self {
            CommandError::WrongArgs { .. } => true,
            CommandError::KeyedList(err) => err.is_usage_error(),
            _ => false,
        }
    }

    /// Maps an engine not-found outcome to a command error naming `key`.
    pub(crate) fn from_lookup(err: KeyedListError, key: &str) -> Self {
        if err.is_not_found() {
            CommandError::KeyNotFound {
                key: key.to_string(),
            }
        } else {
            CommandError::KeyedList(err)
        }
    }
}

// Conversion from CommandError to the main Error type
impl From<CommandError> for crate::Error {
    fn from(err: CommandError) -> Self {
        crate::Error::Command(err)
    }
}

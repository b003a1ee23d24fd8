//! Variable bindings and the keyed-list commands.
//!
//! [`Bindings`] maps variable names to [`Value`]s and offers the four
//! keyed-list commands on top of the path operations:
//!
//! - [`Bindings::get_path`] reads a path, optionally into another variable
//! - [`Bindings::set_paths`] binds one or more paths
//! - [`Bindings::delete_paths`] removes one or more paths
//! - [`Bindings::get_keys`] lists the keys at a path
//!
//! Mutating commands write the new root back to the variable. When a
//! command fails the variable keeps the value it had before the call.
//!
//! ```
//! use keylist::Bindings;
//!
//! let mut vars = Bindings::new();
//! vars.set_paths_args("person", &["name", "John", "address.city", "Springfield"])?;
//!
//! assert_eq!(vars.get_path("person", Some("address.city"), None)?, "Springfield");
//! assert_eq!(vars.get_path("person", Some("age"), Some(""))?, "0");
//! assert_eq!(vars.get_keys("person", None)?, "name address");
//! # Ok::<(), keylist::Error>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

mod errors;

pub use errors::CommandError;

use crate::{
    keyed::{Value, ops},
    list_syntax,
};

const GET_USAGE: &str = "get_path var ?key? ?ret_var?";
const SET_USAGE: &str = "set_paths var key value ?key value ...?";
const DELETE_USAGE: &str = "delete_paths var key ?key ...?";

/// Named variables holding values.
///
/// Serializes as a map from variable name to the text form of its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings {
    vars: BTreeMap<String, Value>,
}

impl Bindings {
    /// Creates an empty set of bindings.
    pub fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Loads bindings from a JSON object of name to text.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the bindings as a pretty-printed JSON object of name to text.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Binds `name` to `value`, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.vars.insert(name.into(), value.into())
    }

    /// Removes the binding for `name`.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.vars.remove(name)
    }

    /// Returns the bound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Returns the number of bindings.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn read(&self, var: &str) -> Result<&Value, CommandError> {
        self.vars
            .get(var)
            .ok_or_else(|| CommandError::NoSuchVariable {
                name: var.to_string(),
            })
    }

    /// Reads `key` from the keyed list in `var`.
    ///
    /// - Without `key`, returns the top-level keys as a list. Passing `ret_var`
    ///   without `key` is a [`CommandError::WrongArgs`] error.
    /// - Without `ret_var`, returns the value and fails with
    ///   [`CommandError::KeyNotFound`] if the key is absent.
    /// - With `ret_var`, returns `1` or `0` for found or absent. A found value is
    ///   stored in the variable named by `ret_var`; an empty name stores nothing
    ///   and only tests for the key.
    pub fn get_path(
        &mut self,
        var: &str,
        key: Option<&str>,
        ret_var: Option<&str>,
    ) -> Result<Value, CommandError> {
        debug!(var, key = ?key, ret_var = ?ret_var, "get_path");
        let root = self.read(var)?;
        let Some(key) = key else {
            if ret_var.is_some() {
                return Err(CommandError::WrongArgs {
                    usage: GET_USAGE.to_string(),
                });
            }
            return Ok(keys_value(ops::list_keys(root, None)?));
        };

        let found = match ops::get(root, key) {
            Ok(value) => Some(value),
            Err(err) if err.is_not_found() => None,
            Err(err) => return Err(err.into()),
        };

        match (ret_var, found) {
            (None, Some(value)) => Ok(value),
            (None, None) => Err(CommandError::KeyNotFound {
                key: key.to_string(),
            }),
            (Some(ret_var), Some(value)) => {
                if !ret_var.is_empty() {
                    self.set(ret_var, value);
                }
                Ok(Value::from("1"))
            }
            (Some(_), None) => Ok(Value::from("0")),
        }
    }

    /// Binds each `(path, value)` pair in order in the keyed list held by `var`.
    ///
    /// A missing variable starts out as an empty keyed list.
    pub fn set_paths(&mut self, var: &str, pairs: &[(&str, Value)]) -> Result<(), CommandError> {
        debug!(var, pairs = pairs.len(), "set_paths");
        if pairs.is_empty() {
            return Err(CommandError::WrongArgs {
                usage: SET_USAGE.to_string(),
            });
        }

        let previous = self.vars.remove(var);
        let existed = previous.is_some();
        // Only needed when a later pair can fail after an earlier one was applied.
        let backup = if pairs.len() > 1 {
            previous.clone()
        } else {
            None
        };
        let mut root = previous.unwrap_or_else(Value::empty_list);

        for (path, value) in pairs {
            if let Err(err) = ops::set(&mut root, path, value.clone()) {
                if existed {
                    self.vars.insert(var.to_string(), backup.unwrap_or(root));
                }
                return Err(err.into());
            }
        }

        self.vars.insert(var.to_string(), root);
        Ok(())
    }

    /// Like [`Bindings::set_paths`], taking alternating keys and values.
    pub fn set_paths_args(&mut self, var: &str, args: &[&str]) -> Result<(), CommandError> {
        if args.is_empty() || args.len() % 2 != 0 {
            return Err(CommandError::WrongArgs {
                usage: SET_USAGE.to_string(),
            });
        }
        let pairs: Vec<(&str, Value)> = args
            .chunks_exact(2)
            .map(|pair| (pair[0], Value::from(pair[1])))
            .collect();
        self.set_paths(var, &pairs)
    }

    /// Removes each key path in order from the keyed list held by `var`.
    pub fn delete_paths(&mut self, var: &str, keys: &[&str]) -> Result<(), CommandError> {
        debug!(var, keys = keys.len(), "delete_paths");
        if keys.is_empty() {
            return Err(CommandError::WrongArgs {
                usage: DELETE_USAGE.to_string(),
            });
        }

        let previous = self
            .vars
            .remove(var)
            .ok_or_else(|| CommandError::NoSuchVariable {
                name: var.to_string(),
            })?;
        let backup = if keys.len() > 1 {
            Some(previous.clone())
        } else {
            None
        };
        let mut root = previous;

        for key in keys {
            if let Err(err) = ops::delete(&mut root, key) {
                self.vars.insert(var.to_string(), backup.unwrap_or(root));
                return Err(CommandError::from_lookup(err, key));
            }
        }

        self.vars.insert(var.to_string(), root);
        Ok(())
    }

    /// Returns the keys of the keyed list at `key` in `var`, or its top level.
    pub fn get_keys(&self, var: &str, key: Option<&str>) -> Result<Value, CommandError> {
        debug!(var, key = ?key, "get_keys");
        let root = self.read(var)?;
        let keys = ops::list_keys(root, key)
            .map_err(|err| CommandError::from_lookup(err, key.unwrap_or_default()))?;
        Ok(keys_value(keys))
    }
}

fn keys_value(keys: Vec<String>) -> Value {
    Value::new(list_syntax::merge(keys))
}

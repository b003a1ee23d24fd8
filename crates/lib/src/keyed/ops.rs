//! Path operations on keyed-list values.
//!
//! All four operations take the root [`Value`] of a keyed list and a dotted
//! path. Each non-final segment must name an entry whose value converts to a
//! keyed list; the final segment names the target entry.
//!
//! Reads ([`get`], [`list_keys`]) never write to any cell apart from caching
//! parsed representations. Writes ([`set`], [`delete`]) take every cell on the
//! path for writing first, which duplicates it when it is shared, and drop the
//! cached text of every level they changed.

use tracing::{debug, trace};

use super::{KeyPath, Value, errors::KeyedListError};

/// Returns the value stored at `path`.
///
/// The result shares the stored value; a later write through `root`
/// duplicates it first, so the returned value does not change.
///
/// # Errors
/// - [`KeyedListError::EmptyKey`] if `path` is empty
/// - [`KeyedListError::Parse`] if a level on the path is not a keyed list
/// - [`KeyedListError::NotFound`] if a segment does not exist
pub fn get(root: &Value, path: &str) -> Result<Value, KeyedListError> {
    let path = KeyPath::parse(path)?;
    lookup(root, path).cloned()
}

/// Binds `path` to `value`, creating intermediate keyed lists as needed.
///
/// `root` may end up pointing at a different cell than before when it was
/// shared. On error the content seen through `root`, and through every other
/// owner of any value on the path, is unchanged.
///
/// # Errors
/// - [`KeyedListError::EmptyKey`] if `path` is empty
/// - [`KeyedListError::Parse`] if an existing level on the path is not a keyed list
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<(), KeyedListError> {
    let path = KeyPath::parse(path)?;
    debug!(path = %path, "setting keyed list path");
    set_in(root, path, value)
}

/// Removes the entry at `path`.
///
/// Removing the last entry of a nested list also removes the entry holding
/// that list; each level checks its direct child, so a chain of lists that
/// the removal leaves empty is removed along the path. The root itself stays,
/// empty or not.
///
/// # Errors
/// - [`KeyedListError::EmptyKey`] if `path` is empty
/// - [`KeyedListError::Parse`] if a level on the path is not a keyed list
/// - [`KeyedListError::NotFound`] if a segment does not exist
pub fn delete(root: &mut Value, path: &str) -> Result<(), KeyedListError> {
    let path = KeyPath::parse(path)?;
    debug!(path = %path, "deleting keyed list path");
    // Resolve first so a missing path never duplicates a shared cell.
    lookup(root, path)?;
    delete_in(root, path)
}

/// Returns the keys of the keyed list at `path`, in insertion order.
///
/// `None` or an empty path lists the top level of `root`.
///
/// # Errors
/// - [`KeyedListError::Parse`] if a level on the path, or the list found there,
///   is not a keyed list
/// - [`KeyedListError::NotFound`] if a segment does not exist
pub fn list_keys(root: &Value, path: Option<&str>) -> Result<Vec<String>, KeyedListError> {
    let target = match path.filter(|path| !path.is_empty()) {
        None => root,
        Some(path) => lookup(root, KeyPath::parse(path)?)?,
    };
    Ok(target.coerce_list()?.keys().map(str::to_string).collect())
}

fn lookup<'v>(root: &'v Value, path: KeyPath<'_>) -> Result<&'v Value, KeyedListError> {
    let mut current = root;
    for segment in path.segments() {
        current = current
            .coerce_list()?
            .get(segment)
            .ok_or_else(|| KeyedListError::NotFound {
                key: path.to_string(),
            })?;
    }
    Ok(current)
}

fn set_in(node: &mut Value, path: KeyPath<'_>, value: Value) -> Result<(), KeyedListError> {
    let (key, rest) = path.split_first();
    let list = node.list_mut()?;
    match rest {
        None => {
            list.upsert(key, value);
        }
        Some(rest) => match list.position(key) {
            Some(index) => set_in(list.value_at_mut(index)?, rest, value)?,
            None => {
                // Built aside and attached only once complete.
                let mut child = Value::empty_list();
                set_in(&mut child, rest, value)?;
                list.upsert(key, child);
            }
        },
    }
    node.invalidate_text();
    Ok(())
}

fn delete_in(node: &mut Value, path: KeyPath<'_>) -> Result<(), KeyedListError> {
    let (key, rest) = path.split_first();
    let list = node.list_mut()?;
    let index = list
        .position(key)
        .ok_or_else(|| KeyedListError::NotFound {
            key: key.to_string(),
        })?;
    match rest {
        None => {
            list.remove_at(index)?;
        }
        Some(rest) => {
            let child = list.value_at_mut(index)?;
            delete_in(child, rest)?;
            if child.coerce_list()?.is_empty() {
                trace!(key, "removing emptied keyed list");
                list.remove_at(index)?;
            }
        }
    }
    node.invalidate_text();
    Ok(())
}

//! Constants used throughout the keylist library.

/// Separator between the segments of a key path.
pub const PATH_SEPARATOR: char = '.';

/// Deepest path accepted by the path operations.
///
/// Set and delete recurse once per segment, so this bounds their stack use.
/// Serializing and dropping values do not recurse and take any depth.
pub const MAX_PATH_DEPTH: usize = 256;

/// Name under which keyed lists register as a value representation.
pub const KEYED_LIST_TYPE: &str = "keyedlist";

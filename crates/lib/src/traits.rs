//! Core traits for value representations.
//!
//! A [`Value`](crate::Value) always has a textual form. Structured
//! representations are derived from that text on demand and turned back into
//! text when somebody asks for it. This module defines the hooks such a
//! representation provides:
//! - `from_text`: deserialize from the textual form
//! - `to_text`: serialize to the textual form
//!
//! Duplication is `Clone` and release is `Drop`, so neither needs a hook of its own.

/// A structured representation a value can be converted to and from.
///
/// Implementations must make `from_text(&x.to_text())` reproduce `x` for every
/// `x` that was built through the representation's own operations.
///
/// # Examples
///
/// ```
/// use keylist::{KeyedList, Representation};
///
/// let list = KeyedList::from_text("{name John} {age 30}").unwrap();
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.to_text(), "{name John} {age 30}");
/// assert_eq!(KeyedList::NAME, "keyedlist");
/// ```
pub trait Representation: Clone + Sized {
    /// Registered name of the representation.
    const NAME: &'static str;

    /// Error returned when text cannot be converted.
    type Error: std::error::Error;

    /// Builds the representation from its textual form.
    fn from_text(text: &str) -> Result<Self, Self::Error>;

    /// Produces the textual form of the representation.
    fn to_text(&self) -> String;
}

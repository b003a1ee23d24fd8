//! Text conversion hooks for keyed lists.
//!
//! A keyed list's text form is a list of two-element lists:
//! `{name John} {age 30} {address {city Springfield}}`. Nested lists are not
//! parsed here; an entry's value stays text until a path operation descends
//! into it.

use super::{Entry, KeyedList, Value, errors::KeyedListError};
use crate::{
    constants::{KEYED_LIST_TYPE, PATH_SEPARATOR},
    list_syntax,
    traits::Representation,
};

impl Representation for KeyedList {
    const NAME: &'static str = KEYED_LIST_TYPE;

    type Error = KeyedListError;

    fn from_text(text: &str) -> Result<Self, KeyedListError> {
        let items =
            list_syntax::split(text).map_err(|err| KeyedListError::parse(err.to_string(), text))?;

        let mut list = KeyedList::with_capacity(items.len());
        for item in items {
            let pair = list_syntax::split(&item)
                .map_err(|err| KeyedListError::parse(err.to_string(), item.as_str()))?;
            let Ok([key, value]) = <[String; 2]>::try_from(pair) else {
                return Err(KeyedListError::parse(
                    "keyed list entry must be a two element list",
                    item,
                ));
            };
            if key.is_empty() {
                return Err(KeyedListError::parse(
                    "keyed list entry has an empty key",
                    item,
                ));
            }
            if key.contains(PATH_SEPARATOR) {
                return Err(KeyedListError::parse(
                    "keyed list key may not contain a \".\"",
                    item,
                ));
            }
            if list.contains_key(&key) {
                return Err(KeyedListError::parse(
                    format!("duplicate key \"{key}\" in keyed list"),
                    item,
                ));
            }
            list.entries.push(Entry {
                key,
                value: Value::new(value),
            });
        }

        Ok(list)
    }

    fn to_text(&self) -> String {
        list_syntax::merge(
            self.entries
                .iter()
                .map(|entry| list_syntax::merge([entry.key.as_str(), entry.value.as_str()])),
        )
    }
}

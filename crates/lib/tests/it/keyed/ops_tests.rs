//! Path operation tests: get, set, delete and list_keys.

use keylist::{KeyedListError, Value, delete, get, list_keys, set};

use crate::helpers::*;

// ===== GET =====

#[test]
fn test_get_top_level_and_nested() {
    let root = person();
    assert_paths(
        &root,
        &[
            ("name", "John"),
            ("age", "30"),
            ("address.city", "Springfield"),
            ("address.zip", "12345"),
        ],
    );
}

#[test]
fn test_get_subtree_returns_its_text() {
    let root = person();
    let address = get(&root, "address").unwrap();
    assert_eq!(address.as_str(), "{city Springfield} {zip 12345}");
}

#[test]
fn test_get_missing_reports_full_path() {
    let root = person();
    let err = get(&root, "address.country").unwrap_err();
    assert_eq!(
        err,
        KeyedListError::NotFound {
            key: "address.country".to_string()
        }
    );
    assert_eq!(err.to_string(), "key not found: \"address.country\"");
}

#[test]
fn test_get_through_scalar_is_parse_error() {
    let root = Value::from("{name {John Smith Jr}}");
    let err = get(&root, "name.first").unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(err.source_text(), Some("John"));
}

#[test]
fn test_get_through_two_word_value_resolves() {
    // A two-word value is also a one-entry keyed list.
    let root = Value::from("{name {John Smith}}");
    assert_eq!(get(&root, "name.John").unwrap(), "Smith");
}

#[test]
fn test_get_rejects_malformed_paths() {
    let root = person();
    for path in ["", ".", "a..b", ".name", "name."] {
        let err = get(&root, path).unwrap_err();
        assert!(err.is_usage_error(), "path {path:?} gave {err:?}");
    }
}

#[test]
fn test_get_rejects_overlong_path() {
    let root = Value::empty_list();
    let path = vec!["k"; 300].join(".");
    let err = get(&root, &path).unwrap_err();
    assert!(matches!(err, KeyedListError::TooDeep { depth: 300, .. }));
}

// ===== SET =====

#[test]
fn test_set_overwrites_in_place() {
    let mut root = person();
    set(&mut root, "age", Value::from("31")).unwrap();
    assert_eq!(keys_at(&root, None), vec!["name", "age", "address"]);
    assert_paths(&root, &[("age", "31")]);
}

#[test]
fn test_set_appends_new_keys() {
    let mut root = person();
    set(&mut root, "address.country", Value::from("US")).unwrap();
    assert_eq!(
        keys_at(&root, Some("address")),
        vec!["city", "zip", "country"]
    );
}

#[test]
fn test_set_creates_intermediate_lists() {
    let mut root = Value::empty_list();
    set(&mut root, "a.b.c", Value::from("1")).unwrap();
    set(&mut root, "a.b.d", Value::from("2")).unwrap();
    set(&mut root, "a.e", Value::from("3")).unwrap();

    assert_eq!(root.as_str(), "{a {{b {{c 1} {d 2}}} {e 3}}}");
    assert_paths(&root, &[("a.b.c", "1"), ("a.b.d", "2"), ("a.e", "3")]);
}

#[test]
fn test_set_replaces_scalar_with_list_value() {
    let mut root = build(&[("a", "scalar")]);
    set(&mut root, "a", Value::from("{x 1}")).unwrap();
    assert_paths(&root, &[("a.x", "1")]);
}

#[test]
fn test_set_through_scalar_fails_without_change() {
    let mut root = build(&[("a", "one two three"), ("b", "2")]);
    let before = root.as_str().to_string();

    let err = set(&mut root, "a.x", Value::from("v")).unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(root.as_str(), before);
}

#[test]
fn test_set_empty_key_is_usage_error() {
    let mut root = person();
    let err = set(&mut root, "", Value::from("v")).unwrap_err();
    assert!(err.is_usage_error());
    assert_eq!(err.to_string(), "empty key");
}

#[test]
fn test_set_value_with_special_characters() {
    let mut root = Value::empty_list();
    let tricky = ["", "two words", "brace { open", "back\\slash\\", "\"quotes\""];
    for (i, text) in tricky.iter().enumerate() {
        set(&mut root, &format!("k{i}"), Value::from(*text)).unwrap();
    }

    let reparsed = Value::from(root.as_str());
    for (i, text) in tricky.iter().enumerate() {
        assert_eq!(get(&reparsed, &format!("k{i}")).unwrap(), *text);
    }
}

// ===== DELETE =====

#[test]
fn test_delete_leaf() {
    let mut root = person();
    delete(&mut root, "age").unwrap();
    assert_eq!(keys_at(&root, None), vec!["name", "address"]);
    assert_missing(&root, "age");
}

#[test]
fn test_delete_nested_keeps_siblings() {
    let mut root = person();
    delete(&mut root, "address.city").unwrap();
    assert_eq!(keys_at(&root, Some("address")), vec!["zip"]);
    assert_eq!(root.as_str(), "{name John} {age 30} {address {{zip 12345}}}");
}

#[test]
fn test_delete_prunes_emptied_chain() {
    let mut root = build(&[("keep", "1"), ("a.b.c.d", "x")]);
    delete(&mut root, "a.b.c.d").unwrap();
    assert_eq!(keys_at(&root, None), vec!["keep"]);
}

#[test]
fn test_delete_prunes_only_up_to_non_empty_level() {
    let mut root = build(&[("a.b.c", "1"), ("a.other", "2")]);
    delete(&mut root, "a.b.c").unwrap();
    assert_eq!(keys_at(&root, Some("a")), vec!["other"]);
}

#[test]
fn test_delete_subtree() {
    let mut root = person();
    delete(&mut root, "address").unwrap();
    assert_eq!(root.as_str(), "{name John} {age 30}");
}

#[test]
fn test_delete_last_top_level_keeps_root() {
    let mut root = build(&[("only", "1")]);
    delete(&mut root, "only").unwrap();
    assert!(keys_at(&root, None).is_empty());
    assert_eq!(root.as_str(), "");
}

#[test]
fn test_delete_missing_is_not_found() {
    let mut root = person();
    let before = root.as_str().to_string();
    for path in ["phone", "address.country", "name.first.x"] {
        let err = delete(&mut root, path).unwrap_err();
        assert!(
            err.is_not_found() || err.is_parse_error(),
            "path {path:?} gave {err:?}"
        );
    }
    assert_eq!(root.as_str(), before);
}

// ===== LIST KEYS =====

#[test]
fn test_list_keys_top_level_variants() {
    let root = person();
    let expected = vec!["name", "age", "address"];
    assert_eq!(list_keys(&root, None).unwrap(), expected);
    assert_eq!(list_keys(&root, Some("")).unwrap(), expected);
}

#[test]
fn test_list_keys_of_scalar_is_parse_error() {
    let root = build(&[("a", "x y z")]);
    assert!(list_keys(&root, Some("a")).unwrap_err().is_parse_error());
}

#[test]
fn test_list_keys_missing_path() {
    let root = person();
    let err = list_keys(&root, Some("address.country")).unwrap_err();
    assert!(err.is_not_found());
}

//! Copy-on-write and cache tests.
//!
//! A value handed to more than one owner must look unchanged to every owner
//! except the one writing through it.

use keylist::{Value, delete, get, set};

use crate::helpers::*;

#[test]
fn test_set_on_clone_leaves_original() {
    let original = person();
    let mut copy = original.clone();
    assert!(copy.ptr_eq(&original));

    set(&mut copy, "address.city", Value::from("Shelbyville")).unwrap();

    assert_paths(&original, &[("address.city", "Springfield")]);
    assert_paths(&copy, &[("address.city", "Shelbyville")]);
    assert!(!copy.ptr_eq(&original));
}

#[test]
fn test_delete_on_clone_leaves_original() {
    let original = person();
    let mut copy = original.clone();

    delete(&mut copy, "address.zip").unwrap();

    assert_paths(&original, &[("address.zip", "12345")]);
    assert_missing(&copy, "address.zip");
}

#[test]
fn test_value_read_by_get_survives_later_writes() {
    let mut root = person();
    let address = get(&root, "address").unwrap();
    assert!(address.is_shared());

    set(&mut root, "address.city", Value::from("Capital City")).unwrap();
    delete(&mut root, "address.zip").unwrap();

    assert_paths(&address, &[("city", "Springfield"), ("zip", "12345")]);
    assert_eq!(address.as_str(), "{city Springfield} {zip 12345}");
}

#[test]
fn test_value_stored_twice_is_written_independently() {
    let shared = Value::from("{x 1}");
    let mut root = Value::empty_list()
        .with_set("left", shared.clone())
        .unwrap()
        .with_set("right", shared.clone())
        .unwrap();

    set(&mut root, "left.x", Value::from("2")).unwrap();

    assert_paths(&root, &[("left.x", "2"), ("right.x", "1")]);
    assert_eq!(shared.as_str(), "{x 1}");
}

#[test]
fn test_untouched_siblings_stay_shared() {
    let original = person();
    // Parse the nested list once so both roots share the cell holding it.
    get(&original, "address.city").unwrap();
    let mut copy = original.clone();

    set(&mut copy, "name", Value::from("Jane")).unwrap();

    let a = get(&original, "address").unwrap();
    let b = get(&copy, "address").unwrap();
    assert!(a.ptr_eq(&b));
}

#[test]
fn test_unique_root_is_written_in_place() {
    let mut root = build(&[("a.b", "1")]);
    let child_before = get(&root, "a").unwrap();
    drop(child_before);

    let probe = root.clone();
    drop(probe);
    assert!(!root.is_shared());

    set(&mut root, "a.c", Value::from("2")).unwrap();
    assert_eq!(root.ref_count(), 1);
    assert_paths(&root, &[("a.b", "1"), ("a.c", "2")]);
}

#[test]
fn test_text_cache_dropped_after_write() {
    let mut root = Value::from("{a 1}");
    assert!(root.has_text());

    set(&mut root, "b", Value::from("2")).unwrap();
    assert!(!root.has_text());
    assert!(root.has_list());

    assert_eq!(root.as_str(), "{a 1} {b 2}");
    assert!(root.has_text());
}

#[test]
fn test_reads_cache_parsed_form() {
    let root = person();
    assert!(!root.has_list());

    get(&root, "address.city").unwrap();
    assert!(root.has_list());
    assert!(get(&root, "address").unwrap().has_list());
    assert!(root.has_text());
}

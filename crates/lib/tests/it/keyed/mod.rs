//! Keyed-list integration tests
//!
//! Tests are organized by concern: the path operations, value sharing and
//! copy-on-write, conversion to and from text, and the documented properties.

mod ops_tests;
mod sharing_tests;

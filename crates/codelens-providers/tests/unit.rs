//! Unit test suite for codelens-providers
//!
//! Run with: `cargo test -p codelens-providers`

#[path = "unit/vector_store_tests.rs"]
mod vector_store_tests;

// tests/common/mod.rs
//! Shared helpers for the binary-level tests.

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

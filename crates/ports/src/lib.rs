//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory streams and `stat`
//! - [`identity`]: user and group name lookup
//!
//! The use case only talks to these traits, so tests can swap in
//! in-memory directories.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod identity;

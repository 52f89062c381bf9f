#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod filter;
pub mod model;

pub use config::{Configuration, HiddenPolicy, RenderMode, SortMode};
pub use model::{Listing, ResolvedEntry};

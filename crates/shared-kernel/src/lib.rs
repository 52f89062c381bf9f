// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, InfraResult, InfrastructureError, LsError, PresentationError, PresentationResult,
    Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{EntryName, FileMetadata, FileSize, FileTime, Identity, PermissionBits};

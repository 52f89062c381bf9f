// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod file_meta;
pub mod identity;
pub mod permissions;

pub use file_info::{EntryName, FileSize, FileTime};
pub use file_meta::FileMetadata;
pub use identity::Identity;
pub use permissions::PermissionBits;

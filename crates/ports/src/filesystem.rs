// crates/ports/src/filesystem.rs
use std::path::Path;

use simple_ls_shared_kernel::{EntryName, FileMetadata, InfraResult};

/// Order in which a [`DirectoryReader`] hands back names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerationOrder {
    /// As the directory stream yields them.
    Native,
    /// Byte-wise ascending.
    Alphabetical,
}

/// Port for listing the names inside one directory.
///
/// Implementations report `.` and `..` as well as dot entries; filtering is
/// left to the caller. A failure to open or read the directory is returned as
/// `InfrastructureError::DirectoryAccess` and no names are produced.
pub trait DirectoryReader {
    fn read_entries(&self, directory: &Path, order: EnumerationOrder) -> InfraResult<Vec<EntryName>>;
}

/// Port for the `stat` of one entry.
///
/// A failure is `InfrastructureError::MetadataAccess`; owner and group names
/// that cannot be resolved are not failures.
pub trait MetadataResolver {
    fn resolve(&self, directory: &Path, name: &EntryName) -> InfraResult<FileMetadata>;
}

// crates/shared-kernel/src/value_objects/file_meta.rs
use super::{FileSize, FileTime, Identity, PermissionBits};

/// Snapshot of one `stat` call, taken on demand and never cached across entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub is_directory: bool,
    pub permissions: PermissionBits,
    pub link_count: u64,
    pub owner: Identity,
    pub group: Identity,
    pub size: FileSize,
    pub modified_at: FileTime,
    pub accessed_at: FileTime,
}

impl FileMetadata {
    /// `ls -l` style type-and-permission column, always 10 characters.
    #[must_use]
    pub fn mode_string(&self) -> String {
        let kind = if self.is_directory { 'd' } else { '-' };
        let mut out = String::with_capacity(10);
        out.push(kind);
        out.push_str(&self.permissions.to_symbolic());
        out
    }
}

// crates/infra/src/filesystem.rs
use std::{io, path::Path, time::SystemTime};

use simple_ls_ports::{
    filesystem::{DirectoryReader, EnumerationOrder, MetadataResolver},
    identity::IdentityResolver,
};
use simple_ls_shared_kernel::{
    EntryName, FileMetadata, FileSize, FileTime, Identity, InfraResult, InfrastructureError, PermissionBits,
};

use crate::{identity::SystemIdentityResolver, platform::RawStat};

/// Directory reader backed by `std::fs::read_dir`.
///
/// `read_dir` never yields `.` and `..`; they are reported first, the way a
/// raw `readdir` stream does on common filesystems.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectoryReader;

impl DirectoryReader for StdDirectoryReader {
    fn read_entries(&self, directory: &Path, order: EnumerationOrder) -> InfraResult<Vec<EntryName>> {
        let access_error = |source| InfrastructureError::DirectoryAccess { path: directory.to_path_buf(), source };

        // The handle is closed when the iterator drops, on the error path too.
        let stream = std::fs::read_dir(directory).map_err(access_error)?;

        let mut names = vec![EntryName::current_dir(), EntryName::parent_dir()];
        for entry in stream {
            let entry = entry.map_err(access_error)?;
            names.push(EntryName::from(entry.file_name()));
        }

        if order == EnumerationOrder::Alphabetical {
            names.sort_unstable();
        }

        log::debug!("read {} entries from '{}' ({order:?})", names.len(), directory.display());
        Ok(names)
    }
}

/// Metadata resolver backed by `std::fs::metadata` (symlinks are followed).
pub struct StdMetadataResolver<I = SystemIdentityResolver> {
    identities: I,
}

impl StdMetadataResolver<SystemIdentityResolver> {
    pub fn new() -> Self {
        Self::with_identities(SystemIdentityResolver::new())
    }
}

impl Default for StdMetadataResolver<SystemIdentityResolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdentityResolver> StdMetadataResolver<I> {
    pub fn with_identities(identities: I) -> Self {
        Self { identities }
    }

    fn owner(&self, uid: u32) -> Identity {
        Identity::new(uid, self.identities.user_name(uid))
    }

    fn group(&self, gid: u32) -> Identity {
        Identity::new(gid, self.identities.group_name(gid))
    }
}

impl<I: IdentityResolver> MetadataResolver for StdMetadataResolver<I> {
    fn resolve(&self, directory: &Path, name: &EntryName) -> InfraResult<FileMetadata> {
        let path = name.join_to(directory);
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(source) => return Err(InfrastructureError::MetadataAccess { path, source }),
        };

        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(source) => return Err(InfrastructureError::MetadataAccess { path, source }),
        };
        let accessed = access_time(metadata.accessed(), modified);

        let raw = RawStat::from_metadata(&metadata);
        let size = FileSize::new(metadata.len());
        log::trace!("stat '{}': {size} bytes, mode {:o}", path.display(), raw.mode);
        Ok(FileMetadata {
            is_directory: metadata.is_dir(),
            permissions: PermissionBits::from_mode(raw.mode),
            link_count: raw.link_count,
            owner: self.owner(raw.uid),
            group: self.group(raw.gid),
            size,
            modified_at: FileTime::from(modified),
            accessed_at: FileTime::from(accessed),
        })
    }
}

/// Access time, or the modification time where the filesystem keeps no atime.
fn access_time(accessed: io::Result<SystemTime>, modified: SystemTime) -> SystemTime {
    accessed.unwrap_or_else(|err| {
        log::debug!("no access time ({err}), using modification time");
        modified
    })
}

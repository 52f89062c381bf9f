// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic so the filesystem adapter does
//! not need conditional compilation of its own.

use std::fs::Metadata;

// ============================================================================
// Raw stat fields
// ============================================================================

/// The `st_mode`/`st_nlink`/`st_uid`/`st_gid` part of a `stat` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawStat {
    pub mode: u32,
    pub link_count: u64,
    pub uid: u32,
    pub gid: u32,
}

#[cfg(unix)]
impl RawStat {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;
        Self {
            mode: metadata.mode(),
            link_count: metadata.nlink(),
            uid: metadata.uid(),
            gid: metadata.gid(),
        }
    }
}

/// Non-unix platforms have no owner ids or mode bits; synthesize the closest
/// equivalent from the read-only flag.
#[cfg(not(unix))]
impl RawStat {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        let base = if metadata.is_dir() { 0o755 } else { 0o644 };
        let mode = if metadata.permissions().readonly() { base & !0o222 } else { base };
        Self { mode, link_count: 1, uid: 0, gid: 0 }
    }
}

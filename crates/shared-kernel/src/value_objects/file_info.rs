// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::Cow,
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

/// One name as reported by the directory stream. Ordering is byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EntryName(OsString);

impl EntryName {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self(name.into())
    }

    /// The `.` entry.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// The `..` entry.
    pub fn parent_dir() -> Self {
        Self::new("..")
    }

    /// Hidden entries start with a dot; this includes `.` and `..`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.0.as_encoded_bytes().first() == Some(&b'.')
    }

    /// True only for `.` and `..`.
    #[must_use]
    pub fn is_dot_or_dotdot(&self) -> bool {
        matches!(self.0.as_encoded_bytes(), b"." | b"..")
    }

    /// Full path of this entry inside `parent`.
    pub fn join_to(&self, parent: &Path) -> PathBuf {
        parent.join(&self.0)
    }

    /// Returns a UTF-8 view suitable for output; non UTF-8 bytes are lossy converted.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }
}

impl From<&str> for EntryName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<OsString> for EntryName {
    fn from(name: OsString) -> Self {
        Self(name)
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
#[repr(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A modification or access timestamp in local time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
#[repr(transparent)]
pub struct FileTime(DateTime<Local>);

impl FileTime {
    /// Layout of the long listing column, e.g. `Jan 05 13:47`.
    pub const LISTING_FORMAT: &'static str = "%b %d %H:%M";

    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }
}

impl From<std::time::SystemTime> for FileTime {
    fn from(time: std::time::SystemTime) -> Self {
        Self::new(DateTime::<Local>::from(time))
    }
}

impl fmt::Display for FileTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::LISTING_FORMAT))
    }
}

use std::path::PathBuf;

/// Which dot-prefixed entries make it into the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HiddenPolicy {
    /// Drop every entry whose name starts with `.`.
    #[default]
    Exclude,
    /// Keep dot entries except `.` and `..` (`-A`).
    AlmostAll,
    /// Keep everything, including `.` and `..` (`-a`).
    All,
}

impl HiddenPolicy {
    /// `-a` takes precedence over `-A`.
    pub fn from_flags(all: bool, almost_all: bool) -> Self {
        match (all, almost_all) {
            (true, _) => Self::All,
            (false, true) => Self::AlmostAll,
            (false, false) => Self::Exclude,
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Whatever order the directory stream yields.
    #[default]
    Directory,
    /// Largest first (`-S`).
    Size,
    /// Newest modification first (`-t`).
    Modified,
    /// Newest access first (`-u`).
    Accessed,
}

impl SortMode {
    /// `-S` wins over the time sorts; `-u` wins over `-t`.
    pub fn from_flags(by_size: bool, by_mtime: bool, by_atime: bool) -> Self {
        if by_size {
            Self::Size
        } else if by_atime {
            Self::Accessed
        } else if by_mtime {
            Self::Modified
        } else {
            Self::Directory
        }
    }

    /// Every sorted mode breaks ties on name, so it needs the enumerator to
    /// hand entries over in alphabetical order first.
    pub fn requires_alphabetical_enumeration(self) -> bool {
        !matches!(self, Self::Directory)
    }
}

/// Output layout chosen for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// ` name`
    Short,
    /// `perm links owner group size mtime name`
    Long,
    /// `name size`
    SizeTable,
}

/// Immutable settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub hidden: HiddenPolicy,
    pub long_format: bool,
    pub sort: SortMode,
    pub directory: PathBuf,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            hidden: HiddenPolicy::default(),
            long_format: false,
            sort: SortMode::default(),
            directory: PathBuf::from("."),
        }
    }
}

impl Configuration {
    /// Size sorting always prints `name size` lines, even with `-l`.
    pub fn render_mode(&self) -> RenderMode {
        match (self.sort, self.long_format) {
            (SortMode::Size, _) => RenderMode::SizeTable,
            (_, true) => RenderMode::Long,
            (_, false) => RenderMode::Short,
        }
    }

    /// Whether any entry needs a `stat` call.
    pub fn needs_metadata(&self) -> bool {
        self.long_format || self.sort != SortMode::Directory
    }
}

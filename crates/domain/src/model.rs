use simple_ls_shared_kernel::{EntryName, FileMetadata};

/// An entry whose `stat` succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub name: EntryName,
    pub metadata: FileMetadata,
}

impl ResolvedEntry {
    pub fn new(name: EntryName, metadata: FileMetadata) -> Self {
        Self { name, metadata }
    }
}

/// Ordered, filtered entries ready for rendering. The variant fixes the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Short(Vec<EntryName>),
    Long(Vec<ResolvedEntry>),
    SizeTable(Vec<ResolvedEntry>),
}

impl Listing {
    pub fn len(&self) -> usize {
        match self {
            Self::Short(names) => names.len(),
            Self::Long(entries) | Self::SizeTable(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry names in output order, whatever the layout.
    pub fn names(&self) -> Vec<&EntryName> {
        match self {
            Self::Short(names) => names.iter().collect(),
            Self::Long(entries) | Self::SizeTable(entries) => entries.iter().map(|e| &e.name).collect(),
        }
    }
}

// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::{config::SortMode, model::ResolvedEntry};

/// Direction applied on top of a key comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Metadata field an entry list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Size,
    Modified,
    Accessed,
}

impl SortKey {
    /// Three-way comparison on the key; never derived from a subtraction.
    #[inline]
    pub fn compare(self, a: &ResolvedEntry, b: &ResolvedEntry) -> Ordering {
        match self {
            Self::Size => a.metadata.size.cmp(&b.metadata.size),
            Self::Modified => a.metadata.modified_at.cmp(&b.metadata.modified_at),
            Self::Accessed => a.metadata.accessed_at.cmp(&b.metadata.accessed_at),
        }
    }
}

/// A sort key together with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    key: SortKey,
    order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }

    /// Spec for a configured mode; `None` keeps directory order.
    pub fn for_mode(mode: SortMode) -> Option<Self> {
        match mode {
            SortMode::Directory => None,
            SortMode::Size => Some(Self::descending(SortKey::Size)),
            SortMode::Modified => Some(Self::descending(SortKey::Modified)),
            SortMode::Accessed => Some(Self::descending(SortKey::Accessed)),
        }
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Stable in-place sort: entries with equal keys keep their incoming order.
    pub fn apply(&self, entries: &mut [ResolvedEntry]) {
        entries.sort_by(|a, b| self.order.apply(self.key.compare(a, b)));
    }
}

// ============================================================================
// Tests
// ============================================================================

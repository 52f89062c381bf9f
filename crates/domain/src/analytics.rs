// domain analytics: ordering rules for listings
pub mod sort;

pub use sort::{SortKey, SortOrder, SortSpec};

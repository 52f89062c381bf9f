use simple_ls_shared_kernel::EntryName;

use crate::config::HiddenPolicy;

impl HiddenPolicy {
    #[inline]
    pub fn admits(self, name: &EntryName) -> bool {
        match self {
            Self::All => true,
            Self::AlmostAll => !name.is_dot_or_dotdot(),
            Self::Exclude => !name.is_hidden(),
        }
    }
}

/// Keeps the entries `policy` admits, preserving their order.
pub fn visible_entries(names: Vec<EntryName>, policy: HiddenPolicy) -> Vec<EntryName> {
    names.into_iter().filter(|name| policy.admits(name)).collect()
}

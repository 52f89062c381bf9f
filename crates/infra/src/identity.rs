// crates/infra/src/identity.rs
use simple_ls_ports::identity::IdentityResolver;

/// Looks ids up in the system user and group databases.
///
/// Lookups are cached for the lifetime of the resolver, so a directory full of
/// files owned by the same account costs one database query.
#[cfg(unix)]
pub struct SystemIdentityResolver {
    cache: uzers::UsersCache,
}

#[cfg(unix)]
impl SystemIdentityResolver {
    pub fn new() -> Self {
        Self { cache: uzers::UsersCache::new() }
    }
}

#[cfg(unix)]
impl IdentityResolver for SystemIdentityResolver {
    fn user_name(&self, uid: u32) -> Option<String> {
        use uzers::Users;
        self.cache
            .get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().into_owned())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        use uzers::Groups;
        self.cache
            .get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().into_owned())
    }
}

/// No account database: every id renders as its number.
#[cfg(not(unix))]
pub struct SystemIdentityResolver;

#[cfg(not(unix))]
impl SystemIdentityResolver {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(unix))]
impl IdentityResolver for SystemIdentityResolver {
    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}

impl Default for SystemIdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}

// crates/ports/src/identity.rs

/// Port for mapping numeric ids to account names. `None` means "print the number".
pub trait IdentityResolver {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

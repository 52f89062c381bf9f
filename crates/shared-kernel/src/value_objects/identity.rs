// crates/shared-kernel/src/value_objects/identity.rs
use std::fmt;

/// Numeric owner or group id with the name it resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    id: u32,
    name: Option<String>,
}

impl Identity {
    pub fn new(id: u32, name: Option<String>) -> Self {
        Self { id, name }
    }

    /// Identity whose name lookup failed or was never attempted.
    pub fn unresolved(id: u32) -> Self {
        Self { id, name: None }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Prints the resolved name, falling back to the numeric id.
impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}

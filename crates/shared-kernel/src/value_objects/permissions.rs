// crates/shared-kernel/src/value_objects/permissions.rs
/// The nine owner/group/other read-write-execute bits of a file mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PermissionBits(u16);

impl PermissionBits {
    pub const OWNER_READ: u16 = 0o400;
    pub const OWNER_WRITE: u16 = 0o200;
    pub const OWNER_EXEC: u16 = 0o100;
    pub const GROUP_READ: u16 = 0o040;
    pub const GROUP_WRITE: u16 = 0o020;
    pub const GROUP_EXEC: u16 = 0o010;
    pub const OTHER_READ: u16 = 0o004;
    pub const OTHER_WRITE: u16 = 0o002;
    pub const OTHER_EXEC: u16 = 0o001;

    // Order matters: this is the column order of the symbolic form.
    const LAYOUT: [(u16, char); 9] = [
        (Self::OWNER_READ, 'r'),
        (Self::OWNER_WRITE, 'w'),
        (Self::OWNER_EXEC, 'x'),
        (Self::GROUP_READ, 'r'),
        (Self::GROUP_WRITE, 'w'),
        (Self::GROUP_EXEC, 'x'),
        (Self::OTHER_READ, 'r'),
        (Self::OTHER_WRITE, 'w'),
        (Self::OTHER_EXEC, 'x'),
    ];

    /// Keeps only the low nine bits of a raw `st_mode`.
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self((mode & 0o777) as u16)
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, bit: u16) -> bool {
        self.0 & bit == bit
    }

    /// Nine characters, `r`/`w`/`x` where the bit is set and `-` otherwise.
    #[must_use]
    pub fn to_symbolic(self) -> String {
        Self::LAYOUT
            .iter()
            .map(|&(bit, ch)| if self.contains(bit) { ch } else { '-' })
            .collect()
    }
}

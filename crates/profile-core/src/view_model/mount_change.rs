use std::fmt;

/// Generation number of a mount. Bumped every time the view-model adopts a
/// different identity (or none).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MountId(u64);

impl MountId {
    pub fn next(self) -> Self {
        MountId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountChange {
    /// Same principal as before; nothing reset, nothing to fetch
    Unchanged(MountId),
    /// New principal (or signed out); fields were re-initialized
    Remounted(MountId),
}

impl MountChange {
    pub fn mount_id(&self) -> MountId {
        match self {
            Self::Unchanged(id) | Self::Remounted(id) => *id,
        }
    }
}

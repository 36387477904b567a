//! Identity - the authenticated principal as reported by the auth service.

use serde::{Deserialize, Serialize};

/// Read-only view of the signed-in user. Created at sign-in and dropped at
/// sign-out by the auth service; never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque, stable identifier
    pub uid: String,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(uid: impl Into<String>, email: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            email,
        }
    }

    /// True when both values name the same principal.
    pub fn same_principal(&self, other: &Identity) -> bool {
        self.uid == other.uid
    }
}

use crate::EditTarget;

use serde::Serialize;

/// Result of an edit request.
///
/// Editing has no surface yet, so every request comes back `Deferred`.
/// Consumers can tell "not wired" apart from a deliberate no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
#[non_exhaustive]
pub enum EditOutcome {
    Deferred { target: EditTarget },
}

impl EditOutcome {
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred { .. })
    }
}

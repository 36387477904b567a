use crate::ProfileFields;

/// What a call to [`crate::ProfileViewModel::sync`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Fetch finished for the current mount; holds the fields now displayed
    Synced(ProfileFields),
    /// Fetch failed; fields left as they were
    Failed { message: String },
    /// Mount changed while the fetch was in flight; result dropped
    Stale,
    /// Another sync for this mount is still running
    AlreadyInFlight,
    /// This mount has already been synced
    AlreadySynced,
    /// No identity mounted
    SignedOut,
}

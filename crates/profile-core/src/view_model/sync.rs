use crate::{Identity, ProfileFields, ProfileStore, Result, USERS_COLLECTION};

use log::debug;

/// Merge the remote `users/{uid}` document into `current`.
///
/// A missing document is not an error: `current` comes back unchanged.
/// `email` is never taken from the document.
pub async fn sync_from_remote(
    store: &dyn ProfileStore,
    identity: &Identity,
    current: &ProfileFields,
) -> Result<ProfileFields> {
    match store.get_document(USERS_COLLECTION, &identity.uid).await? {
        Some(document) => {
            debug!("Profile document found for {}", identity.uid);
            Ok(current.merge_document(&document))
        }
        None => {
            debug!("No profile document for {}", identity.uid);
            Ok(current.clone())
        }
    }
}

use crate::{ProfileDocument, Result};

use async_trait::async_trait;

/// Per-user document store holding the supplementary profile attributes.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch `collection/id`. `Ok(None)` when the document does not exist.
    /// Transport and service failures are [`crate::ProfileError::RemoteFetch`].
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<ProfileDocument>>;
}

use crate::ClientResult;

use async_trait::async_trait;

/// Source of the bearer token for document reads.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// A currently valid id token, refreshing it first if needed.
    /// `Ok(None)` when nobody is signed in.
    async fn id_token(&self) -> ClientResult<Option<String>>;
}

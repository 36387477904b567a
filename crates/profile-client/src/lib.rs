//! HTTP adapters for the identity service and the profile document store.
//!
//! Both speak the Firebase REST dialect (Identity Toolkit, Secure Token,
//! Firestore) and can be pointed at the local emulators through config.

pub(crate) mod api;
pub(crate) mod auth_client;
pub(crate) mod endpoints;
pub(crate) mod error;
pub(crate) mod firestore_client;
pub(crate) mod session;
pub(crate) mod token_provider;

#[cfg(test)]
mod tests;

pub use auth_client::AuthClient;
pub use endpoints::{FirebaseEndpoints, build_http_client};
pub use error::{ClientError, Result as ClientResult};
pub use firestore_client::FirestoreClient;
pub use session::{Session, SessionStore};
pub use token_provider::TokenProvider;

/// Refresh the id token this long before it actually expires.
const TOKEN_EXPIRY_SKEW_SECS: i64 = 60;

/// Upper bound on a service-reported token lifetime.
const MAX_TOKEN_LIFETIME_SECS: i64 = 86_400;

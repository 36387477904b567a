//! Boundaries to the services the profile screen consumes.
//!
//! Implementations live outside this crate: HTTP adapters for the auth
//! service and document store, terminal adapters for the rest.

pub mod auth_service;
pub mod navigator;
pub mod notifier;
pub mod profile_store;
pub mod url_opener;

pub use auth_service::AuthService;
pub use navigator::Navigator;
pub use notifier::Notifier;
pub use profile_store::ProfileStore;
pub use url_opener::UrlOpener;

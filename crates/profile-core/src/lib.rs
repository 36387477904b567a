//! Profile screen core: domain models, service ports and the view-model that
//! keeps the displayed profile in step with the signed-in identity.

pub mod error;
pub mod models;
pub mod ports;
pub mod view_model;

pub use error::{ProfileError, Result};
pub use models::edit_outcome::EditOutcome;
pub use models::external_link::{ExternalLink, SupportLinks};
pub use models::field_key::{EditTarget, FieldKey};
pub use models::identity::Identity;
pub use models::notice::{Notice, NoticeKind};
pub use models::profile_document::ProfileDocument;
pub use models::profile_fields::ProfileFields;
pub use models::route::Route;
pub use ports::{AuthService, Navigator, Notifier, ProfileStore, UrlOpener};
pub use view_model::mount_change::{MountChange, MountId};
pub use view_model::profile_view_model::ProfileViewModel;
pub use view_model::services::ProfileServices;
pub use view_model::sync::sync_from_remote;
pub use view_model::sync_outcome::SyncOutcome;

/// Remote collection holding one profile document per uid.
pub const USERS_COLLECTION: &str = "users";

pub const PASSWORD_RESET_SENT_TITLE: &str = "Success";
pub const PASSWORD_RESET_SENT_MESSAGE: &str = "Password reset email sent. Check your inbox.";
pub const PASSWORD_RESET_FAILED_TITLE: &str = "Error";
pub const PASSWORD_RESET_FAILED_MESSAGE: &str =
    "Failed to send password reset email. Please try again.";

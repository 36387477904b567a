use crate::{Identity, Result};

use async_trait::async_trait;
use tokio::sync::watch;

/// External identity service.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Identity signed in right now, if any
    fn current_identity(&self) -> Option<Identity>;

    /// Stream of identity changes. The receiver starts at the current value.
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;

    /// Invalidate the current identity.
    /// Errors are reported as [`crate::ProfileError::SignOut`].
    async fn sign_out(&self) -> Result<()>;

    /// Ask the service to mail a password-reset link.
    /// Errors are reported as [`crate::ProfileError::PasswordReset`].
    async fn send_password_reset_email(&self, email: &str) -> Result<()>;
}

use crate::Notice;

/// Shows user-visible notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

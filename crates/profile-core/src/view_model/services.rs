use crate::{AuthService, Navigator, Notifier, ProfileStore, UrlOpener};

use std::sync::Arc;

/// Services the view-model talks to, bundled so they can be built once and
/// handed over together.
#[derive(Clone)]
pub struct ProfileServices {
    pub auth: Arc<dyn AuthService>,
    pub store: Arc<dyn ProfileStore>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub url_opener: Arc<dyn UrlOpener>,
}

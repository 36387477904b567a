//! View-model behind the profile screen.
//!
//! Owns the mounted identity and the displayed [`ProfileFields`]. A sync is
//! keyed on the mount generation: it snapshots the generation before the
//! fetch and only writes its result back if the generation is unchanged, so
//! a late response for a previous user is dropped.

use crate::{
    EditOutcome, EditTarget, ExternalLink, Identity, MountChange, MountId, Notice,
    PASSWORD_RESET_FAILED_MESSAGE, PASSWORD_RESET_FAILED_TITLE, PASSWORD_RESET_SENT_MESSAGE,
    PASSWORD_RESET_SENT_TITLE, ProfileError, ProfileFields, ProfileServices, Result, Route,
    SupportLinks, SyncOutcome, sync_from_remote,
};

use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub struct ProfileViewModel {
    services: ProfileServices,
    links: SupportLinks,
    inner: RwLock<ViewState>,
}

struct ViewState {
    identity: Option<Identity>,
    fields: ProfileFields,
    mount: MountId,
    sync: SyncState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncState {
    Idle,
    InFlight,
    Done,
}

impl ViewState {
    fn remount(&mut self, identity: Option<Identity>) -> MountId {
        self.fields = identity
            .as_ref()
            .map(ProfileFields::initialize)
            .unwrap_or_default();
        self.identity = identity;
        self.mount = self.mount.next();
        self.sync = SyncState::Idle;
        self.mount
    }
}

impl ProfileViewModel {
    /// Create an unmounted view-model. Call [`Self::mount`] or
    /// [`Self::watch_identity`] to adopt an identity.
    pub fn new(services: ProfileServices, links: SupportLinks) -> Self {
        Self {
            services,
            links,
            inner: RwLock::new(ViewState {
                identity: None,
                fields: ProfileFields::default(),
                mount: MountId::default(),
                sync: SyncState::Idle,
            }),
        }
    }

    pub async fn identity(&self) -> Option<Identity> {
        self.inner.read().await.identity.clone()
    }

    pub async fn fields(&self) -> ProfileFields {
        self.inner.read().await.fields.clone()
    }

    pub async fn mount_id(&self) -> MountId {
        self.inner.read().await.mount
    }

    // =========================================================================
    // Mounting and sync
    // =========================================================================

    /// Adopt `identity`. A different uid (or a sign-in/sign-out transition)
    /// starts a new mount with freshly initialized fields; the same uid keeps
    /// the current mount and its fields, taking over a changed email.
    pub async fn mount(&self, identity: Option<Identity>) -> MountChange {
        let mut state = self.inner.write().await;

        let same_principal = match (&state.identity, &identity) {
            (Some(current), Some(next)) => current.same_principal(next),
            (None, None) => true,
            _ => false,
        };

        if same_principal {
            // Same principal: keep the synced attributes, follow the email.
            if let Some(next) = identity.as_ref() {
                state.fields.email = next.email.clone().unwrap_or_default();
            }
            state.identity = identity;
            return MountChange::Unchanged(state.mount);
        }

        let uid = identity.as_ref().map(|i| i.uid.clone());
        let mount = state.remount(identity);
        match uid {
            Some(uid) => info!("Mounted profile for {uid} ({mount})"),
            None => info!("Mounted signed-out profile ({mount})"),
        }
        MountChange::Remounted(mount)
    }

    /// Fetch the remote profile for the current mount and merge it in.
    ///
    /// Runs at most once per mount. The lock is released while the fetch is
    /// in flight; the result is applied only if the mount is still current.
    pub async fn sync(&self) -> SyncOutcome {
        let (mount, identity, fields) = {
            let mut state = self.inner.write().await;

            let Some(identity) = state.identity.clone() else {
                return SyncOutcome::SignedOut;
            };

            match state.sync {
                SyncState::InFlight => {
                    debug!("Sync already in flight for {} ({})", identity.uid, state.mount);
                    return SyncOutcome::AlreadyInFlight;
                }
                SyncState::Done => return SyncOutcome::AlreadySynced,
                SyncState::Idle => {}
            }

            state.sync = SyncState::InFlight;
            (state.mount, identity, state.fields.clone())
        };

        let result = sync_from_remote(self.services.store.as_ref(), &identity, &fields).await;

        let mut state = self.inner.write().await;
        if state.mount != mount {
            info!(
                "Discarding profile fetched for {} ({mount}); current mount is {}",
                identity.uid, state.mount
            );
            return SyncOutcome::Stale;
        }

        state.sync = SyncState::Done;
        match result {
            Ok(synced) => {
                state.fields = synced.clone();
                SyncOutcome::Synced(synced)
            }
            Err(e) => {
                error!("Error fetching profile for {}: {e}", identity.uid);
                SyncOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Mount `identity` and, if that started a signed-in mount, spawn its sync.
    pub async fn identity_changed(
        self: &Arc<Self>,
        identity: Option<Identity>,
    ) -> Option<JoinHandle<SyncOutcome>> {
        let signed_in = identity.is_some();

        match self.mount(identity).await {
            MountChange::Remounted(_) if signed_in => {
                let view_model = Arc::clone(self);
                Some(tokio::spawn(async move { view_model.sync().await }))
            }
            _ => None,
        }
    }

    /// Follow the auth service's identity stream for as long as it is open.
    /// The current identity is handled immediately.
    pub fn watch_identity(self: Arc<Self>) -> JoinHandle<()> {
        let mut identities = self.services.auth.subscribe();

        tokio::spawn(async move {
            loop {
                let identity = identities.borrow_and_update().clone();
                self.identity_changed(identity).await;

                if identities.changed().await.is_err() {
                    debug!("Identity stream closed");
                    break;
                }
            }
        })
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Sign out through the auth service, then clear the mount and go to login.
    /// On failure the identity stays mounted and no navigation happens.
    pub async fn sign_out(&self) -> Result<()> {
        if let Err(e) = self.services.auth.sign_out().await {
            error!("Failed to log out: {e}");
            return Err(e);
        }

        {
            let mut state = self.inner.write().await;
            if state.identity.is_some() {
                state.remount(None);
            }
        }

        info!("Signed out");
        self.services.navigator.navigate(Route::Login);
        Ok(())
    }

    /// Ask the auth service to mail a reset link to the mounted identity.
    /// Exactly one notice is raised either way.
    pub async fn request_password_reset(&self) -> Result<()> {
        let identity = self.identity().await;

        let result = match identity.as_ref() {
            None => Err(ProfileError::password_reset("nobody is signed in")),
            Some(identity) => match identity.email.as_deref().filter(|e| !e.is_empty()) {
                None => Err(ProfileError::password_reset(format!(
                    "no email address on account {}",
                    identity.uid
                ))),
                Some(email) => self.services.auth.send_password_reset_email(email).await,
            },
        };

        match &result {
            Ok(()) => {
                info!("Password reset email requested");
                self.services.notifier.notify(Notice::success(
                    PASSWORD_RESET_SENT_TITLE,
                    PASSWORD_RESET_SENT_MESSAGE,
                ));
            }
            Err(e) => {
                error!("Failed to send password reset email: {e}");
                self.services.notifier.notify(Notice::error(
                    PASSWORD_RESET_FAILED_TITLE,
                    PASSWORD_RESET_FAILED_MESSAGE,
                ));
            }
        }

        result
    }

    /// Editing is not wired to any surface yet.
    pub fn begin_edit_field(&self, target: EditTarget) -> EditOutcome {
        info!("Edit {target} requested; editing is deferred");
        EditOutcome::Deferred { target }
    }

    pub fn open_external_link(&self, link: ExternalLink) {
        let url = self.links.url_for(link);
        debug!("Opening {link} link: {url}");
        self.services.url_opener.open(url);
    }
}

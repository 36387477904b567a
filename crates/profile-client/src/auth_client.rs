//! Identity service client: email/password sign-in, password reset and id
//! token refresh against the Identity Toolkit / Secure Token REST API.

use crate::api::execute;
use crate::{ClientResult, FirebaseEndpoints, Session, SessionStore, TokenProvider};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use profile_core::{AuthService, Identity, ProfileError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::{RwLock, watch};

const PASSWORD_RESET_REQUEST: &str = "PASSWORD_RESET";
const REFRESH_GRANT: &str = "refresh_token";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: Option<String>,
    id_token: String,
    refresh_token: String,
    expires_in: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'a str,
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: Value,
    user_id: Option<String>,
}

pub struct AuthClient {
    http: reqwest::Client,
    endpoints: FirebaseEndpoints,
    sessions: SessionStore,
    session: RwLock<Option<Session>>,
    identity_tx: watch::Sender<Option<Identity>>,
}

impl AuthClient {
    /// Create a client, restoring any session saved by a previous run.
    pub fn new(
        http: reqwest::Client,
        endpoints: FirebaseEndpoints,
        sessions: SessionStore,
    ) -> ClientResult<Self> {
        let session = sessions.load()?;
        let (identity_tx, _) = watch::channel(session.as_ref().map(Session::identity));

        Ok(Self {
            http,
            endpoints,
            sessions,
            session: RwLock::new(session),
            identity_tx,
        })
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> ClientResult<Identity> {
        let body = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };
        let url = self.endpoints.accounts_url("signInWithPassword");
        let response: SignInResponse = execute(self.http.post(url).json(&body)).await?;

        let email = response
            .email
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| email.to_string());
        let session = Session {
            uid: response.local_id,
            email: Some(email),
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            expires_at: Session::expiry_from(Utc::now(), lifetime_secs(&response.expires_in)),
        };

        let identity = session.identity();
        let mut guard = self.session.write().await;
        self.sessions.save(&session)?;
        *guard = Some(session);
        self.identity_tx.send_replace(Some(identity.clone()));
        drop(guard);

        info!("Signed in as {}", identity.uid);
        Ok(identity)
    }

    pub async fn request_password_reset(&self, email: &str) -> ClientResult<()> {
        let body = OobCodeRequest {
            request_type: PASSWORD_RESET_REQUEST,
            email,
        };
        let url = self.endpoints.accounts_url("sendOobCode");
        let _: Value = execute(self.http.post(url).json(&body)).await?;

        info!("Password reset email sent");
        Ok(())
    }

    /// Forget the session locally and publish the signed-out identity.
    ///
    /// Waits for an in-flight token refresh, so the refreshed session cannot
    /// be written back after the file is removed.
    pub async fn sign_out_local(&self) -> ClientResult<()> {
        let mut guard = self.session.write().await;
        self.sessions.clear()?;
        let previous = guard.take();
        self.identity_tx.send_replace(None);
        drop(guard);

        match previous {
            Some(session) => info!("Signed out {}", session.uid),
            None => debug!("Sign-out with no active session"),
        }
        Ok(())
    }

    async fn refresh(&self, session: &Session) -> ClientResult<Session> {
        let body = RefreshRequest {
            grant_type: REFRESH_GRANT,
            refresh_token: &session.refresh_token,
        };
        let response: RefreshResponse =
            execute(self.http.post(self.endpoints.token_refresh_url()).json(&body)).await?;

        Ok(Session {
            uid: response.user_id.unwrap_or_else(|| session.uid.clone()),
            email: session.email.clone(),
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            expires_at: Session::expiry_from(Utc::now(), lifetime_secs(&response.expires_in)),
        })
    }
}

/// Token lifetimes arrive as decimal strings (`"3600"`); the emulators
/// sometimes send plain numbers.
pub(crate) fn lifetime_secs(value: &Value) -> i64 {
    match value {
        Value::String(s) => s.trim().parse().unwrap_or(0),
        Value::Number(n) => n.as_i64().unwrap_or(0),
        _ => 0,
    }
}

#[async_trait]
impl TokenProvider for AuthClient {
    async fn id_token(&self) -> ClientResult<Option<String>> {
        // Held across the refresh so concurrent callers share one request.
        let mut guard = self.session.write().await;

        let Some(session) = guard.as_ref() else {
            return Ok(None);
        };

        if !session.needs_refresh(Utc::now()) {
            return Ok(Some(session.id_token.clone()));
        }

        debug!("Refreshing id token for {}", session.uid);
        let refreshed = self.refresh(session).await?;
        self.sessions.save(&refreshed)?;

        let token = refreshed.id_token.clone();
        *guard = Some(refreshed);
        Ok(Some(token))
    }
}

#[async_trait]
impl AuthService for AuthClient {
    fn current_identity(&self) -> Option<Identity> {
        self.identity_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity_tx.subscribe()
    }

    async fn sign_out(&self) -> profile_core::Result<()> {
        self.sign_out_local()
            .await
            .map_err(|e| ProfileError::sign_out(e.to_string()))
    }

    async fn send_password_reset_email(&self, email: &str) -> profile_core::Result<()> {
        self.request_password_reset(email)
            .await
            .map_err(|e| ProfileError::password_reset(e.to_string()))
    }
}

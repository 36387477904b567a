//! Persisted sign-in session.

use crate::{ClientError, ClientResult, MAX_TOKEN_LIFETIME_SECS, TOKEN_EXPIRY_SKEW_SECS};

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use profile_core::Identity;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub email: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

// Tokens stay out of logs and panics.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .field("id_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl Session {
    pub fn identity(&self) -> Identity {
        Identity::new(self.uid.clone(), self.email.clone())
    }

    /// True when the id token expires within the refresh skew of `now`.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(TOKEN_EXPIRY_SKEW_SECS) >= self.expires_at
    }

    /// Expiry for a token issued at `now`. The service-reported lifetime is
    /// clamped to `0..=MAX_TOKEN_LIFETIME_SECS`.
    pub(crate) fn expiry_from(now: DateTime<Utc>, lifetime_secs: i64) -> DateTime<Utc> {
        let secs = lifetime_secs.clamp(0, MAX_TOKEN_LIFETIME_SECS);
        now.checked_add_signed(Duration::seconds(secs)).unwrap_or(now)
    }
}

/// JSON session file with atomic replacement.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved session.
    ///
    /// A missing file is `Ok(None)`. A file that does not parse is moved aside
    /// to `{name}.corrupted.{timestamp}` and also reported as `Ok(None)`.
    pub fn load(&self) -> ClientResult<Option<Session>> {
        if !self.path.exists() {
            info!("No session file at {:?}", self.path);
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| ClientError::session_io(self.path.clone(), e))?;

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => {
                info!("Loaded session for {}", session.uid);
                Ok(Some(session))
            }
            Err(e) => {
                warn!("Session file corrupted at {:?}: {e}", self.path);
                self.backup_corrupted()?;
                Ok(None)
            }
        }
    }

    /// Write via temp file, fsync and rename.
    pub fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| ClientError::session_io(dir.to_path_buf(), e))?;
        }

        let temp_path = self.temp_path();
        let json = serde_json::to_string_pretty(session)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| ClientError::session_io(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| ClientError::session_io(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| ClientError::session_io(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ClientError::session_io(self.path.clone(), e)
        })?;

        info!("Saved session for {}", session.uid);
        Ok(())
    }

    /// Delete the session file. Missing is fine.
    pub fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed session file {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::session_io(self.path.clone(), e)),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }

    fn backup_corrupted(&self) -> ClientResult<PathBuf> {
        let timestamp = Utc::now().format(DATE_FORMAT);
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".corrupted.{timestamp}"));
        let backup = self.path.with_file_name(name);

        fs::rename(&self.path, &backup)
            .map_err(|e| ClientError::session_io(self.path.clone(), e))?;

        warn!("Backed up corrupted session file to {backup:?}");
        Ok(backup)
    }
}

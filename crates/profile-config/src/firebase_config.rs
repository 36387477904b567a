use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_URL, DEFAULT_FIRESTORE_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TOKEN_URL, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Endpoints and credentials of the identity service and document store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    /// Web API key of the project
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    /// Identity Toolkit base URL (sign-in, password reset)
    pub auth_url: String,
    /// Secure Token base URL (id token refresh)
    pub token_url: String,
    /// Firestore REST base URL
    pub firestore_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

/// Credentials that must be present before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseCredentials {
    pub api_key: String,
    pub project_id: String,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            project_id: None,
            auth_url: String::from(DEFAULT_AUTH_URL),
            token_url: String::from(DEFAULT_TOKEN_URL),
            firestore_url: String::from(DEFAULT_FIRESTORE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FirebaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_base_url("firebase.auth_url", &self.auth_url)?;
        Self::validate_base_url("firebase.token_url", &self.token_url)?;
        Self::validate_base_url("firebase.firestore_url", &self.firestore_url)?;

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::firebase(format!(
                "firebase.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Returns the api key and project id, or an error naming the first missing one.
    pub fn require_credentials(&self) -> ConfigErrorResult<FirebaseCredentials> {
        let api_key = Self::non_blank(&self.api_key)
            .ok_or_else(|| ConfigError::firebase("firebase.api_key is not set"))?;
        let project_id = Self::non_blank(&self.project_id)
            .ok_or_else(|| ConfigError::firebase("firebase.project_id is not set"))?;

        Ok(FirebaseCredentials {
            api_key,
            project_id,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn non_blank(value: &Option<String>) -> Option<String> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
    }

    fn validate_base_url(name: &str, url: &str) -> ConfigErrorResult<()> {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::firebase(format!(
                "{name} must start with http:// or https://, got '{url}'"
            )));
        }
        Ok(())
    }
}

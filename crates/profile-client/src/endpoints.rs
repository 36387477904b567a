use crate::{ClientError, ClientResult};

use std::time::Duration;

use profile_config::{ConfigErrorResult, FirebaseConfig};
use reqwest::Url;

/// Resolved base URLs and credentials for the remote services.
#[derive(Debug, Clone)]
pub struct FirebaseEndpoints {
    pub auth_url: String,
    pub token_url: String,
    pub firestore_url: String,
    pub api_key: String,
    pub project_id: String,
}

impl FirebaseEndpoints {
    /// Fails when the api key or project id is not configured.
    pub fn from_config(config: &FirebaseConfig) -> ConfigErrorResult<Self> {
        let credentials = config.require_credentials()?;

        Ok(Self {
            auth_url: trim_base(&config.auth_url),
            token_url: trim_base(&config.token_url),
            firestore_url: trim_base(&config.firestore_url),
            api_key: credentials.api_key,
            project_id: credentials.project_id,
        })
    }

    /// `{auth_url}/v1/accounts:{method}?key={api_key}`
    pub(crate) fn accounts_url(&self, method: &str) -> String {
        format!("{}/v1/accounts:{}?key={}", self.auth_url, method, self.api_key)
    }

    /// `{token_url}/v1/token?key={api_key}`
    pub(crate) fn token_refresh_url(&self) -> String {
        format!("{}/v1/token?key={}", self.token_url, self.api_key)
    }

    /// `{firestore_url}/v1/projects/{project}/databases/(default)/documents/{collection}/{id}`
    ///
    /// `collection` and `id` are percent-encoded as single path segments.
    pub(crate) fn document_url(&self, collection: &str, id: &str) -> ClientResult<Url> {
        for segment in [collection, id] {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(ClientError::invalid_url(format!(
                    "'{segment}' is not a document path segment"
                )));
            }
        }

        let base = format!(
            "{}/v1/projects/{}/databases/(default)/documents",
            self.firestore_url, self.project_id
        );
        let mut url = Url::parse(&base).map_err(|e| ClientError::invalid_url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(format!("'{base}' cannot be a base URL")))?
            .push(collection)
            .push(id);

        Ok(url)
    }
}

/// HTTP client shared by the auth and document clients.
pub fn build_http_client(timeout: Duration) -> ClientResult<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

pub(crate) fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

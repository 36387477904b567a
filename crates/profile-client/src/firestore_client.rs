//! Document store client for the Firestore REST API.

use crate::api::execute;
use crate::{ClientError, ClientResult, FirebaseEndpoints, TokenProvider};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use profile_core::{ProfileDocument, ProfileError, ProfileStore};
use serde::Deserialize;
use serde_json::Value;

/// Firestore document body: `{"name": "...", "fields": {"name": {"stringValue": "Jane"}}}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FirestoreDocument {
    #[serde(default)]
    pub(crate) fields: HashMap<String, Value>,
}

impl FirestoreDocument {
    /// Text of a field. String and integer values qualify; other kinds are ignored.
    pub(crate) fn text(&self, name: &str) -> Option<String> {
        let value = self.fields.get(name)?;

        if let Some(s) = value.get("stringValue").and_then(Value::as_str) {
            return Some(s.to_string());
        }

        // integerValue is an int64 encoded as a JSON string
        match value.get("integerValue")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub(crate) fn into_profile_document(self) -> ProfileDocument {
        ProfileDocument {
            name: self.text("name"),
            phone: self.text("phone"),
            account_number: self.text("accountNumber"),
        }
    }
}

pub struct FirestoreClient {
    http: reqwest::Client,
    endpoints: FirebaseEndpoints,
    tokens: Arc<dyn TokenProvider>,
}

impl FirestoreClient {
    pub fn new(
        http: reqwest::Client,
        endpoints: FirebaseEndpoints,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            http,
            endpoints,
            tokens,
        }
    }

    /// Read `collection/id`. A 404 means the document does not exist.
    pub async fn fetch_document(
        &self,
        collection: &str,
        id: &str,
    ) -> ClientResult<Option<ProfileDocument>> {
        let Some(token) = self.tokens.id_token().await? else {
            return Err(ClientError::not_signed_in());
        };

        let url = self.endpoints.document_url(collection, id)?;
        debug!("GET {collection}/{id}");

        match execute::<FirestoreDocument>(self.http.get(url).bearer_auth(token)).await {
            Ok(document) => Ok(Some(document.into_profile_document())),
            Err(ClientError::Api { status: 404, .. }) => {
                debug!("No document at {collection}/{id}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ProfileStore for FirestoreClient {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> profile_core::Result<Option<ProfileDocument>> {
        self.fetch_document(collection, id)
            .await
            .map_err(|e| ProfileError::remote_fetch(e.to_string()))
    }
}

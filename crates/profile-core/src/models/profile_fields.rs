//! ProfileFields - the locally held display record of the profile screen.

use crate::{FieldKey, Identity, ProfileDocument};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub full_name: String,
    /// Seeded from the identity; remote documents never overwrite it
    pub email: String,
    pub mobile_number: String,
    pub account_number: String,
}

impl ProfileFields {
    /// Fresh record for a mount: email from the identity, everything else empty.
    pub fn initialize(identity: &Identity) -> Self {
        Self {
            email: identity.email.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Copy of `self` with the remote attributes applied. Absent attributes
    /// become empty strings; `email` is left as is.
    pub fn merge_document(&self, document: &ProfileDocument) -> Self {
        Self {
            full_name: document.name.clone().unwrap_or_default(),
            email: self.email.clone(),
            mobile_number: document.phone.clone().unwrap_or_default(),
            account_number: document.account_number.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::FullName => &self.full_name,
            FieldKey::MobileNumber => &self.mobile_number,
            FieldKey::AccountNumber => &self.account_number,
        }
    }
}

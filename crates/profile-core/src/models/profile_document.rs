use serde::{Deserialize, Serialize};

/// Attributes of a `users/{uid}` document. Every attribute is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub account_number: Option<String>,
}

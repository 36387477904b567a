use crate::{ProfileError, Result};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Editable profile fields. `email` is owned by the auth service and is not editable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    FullName,
    MobileNumber,
    AccountNumber,
}

impl FieldKey {
    pub const ALL: [FieldKey; 3] = [
        FieldKey::FullName,
        FieldKey::MobileNumber,
        FieldKey::AccountNumber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::MobileNumber => "mobileNumber",
            Self::AccountNumber => "accountNumber",
        }
    }

    /// Label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::MobileNumber => "Mobile Number",
            Self::AccountNumber => "Account Number",
        }
    }

    /// Shown instead of an empty value
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Add Full Name",
            Self::MobileNumber => "Add Mobile Number",
            Self::AccountNumber => "Add Account Number",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = ProfileError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fullName" | "full-name" => Ok(Self::FullName),
            "mobileNumber" | "mobile-number" => Ok(Self::MobileNumber),
            "accountNumber" | "account-number" => Ok(Self::AccountNumber),
            _ => Err(ProfileError::invalid_field(s)),
        }
    }
}

/// What an edit action is aimed at: one field, or the whole profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "field")]
pub enum EditTarget {
    Field(FieldKey),
    Profile,
}

impl fmt::Display for EditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(key) => write!(f, "{key}"),
            Self::Profile => f.write_str("profile"),
        }
    }
}

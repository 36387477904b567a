use crate::{ProfileError, Result};

use std::fmt;
use std::str::FromStr;

/// Fixed support/contact targets offered on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalLink {
    /// Messaging chat with prefilled text
    Messaging,
    Instagram,
    Twitter,
    /// Phone dial
    Phone,
}

impl ExternalLink {
    pub const ALL: [ExternalLink; 4] = [
        ExternalLink::Messaging,
        ExternalLink::Instagram,
        ExternalLink::Twitter,
        ExternalLink::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Messaging => "messaging",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for ExternalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExternalLink {
    type Err = ProfileError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "messaging" => Ok(Self::Messaging),
            "instagram" => Ok(Self::Instagram),
            "twitter" => Ok(Self::Twitter),
            "phone" => Ok(Self::Phone),
            _ => Err(ProfileError::invalid_link(s)),
        }
    }
}

/// URL for each [`ExternalLink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportLinks {
    pub messaging: String,
    pub instagram: String,
    pub twitter: String,
    pub phone: String,
}

impl SupportLinks {
    pub fn url_for(&self, link: ExternalLink) -> &str {
        match link {
            ExternalLink::Messaging => &self.messaging,
            ExternalLink::Instagram => &self.instagram,
            ExternalLink::Twitter => &self.twitter,
            ExternalLink::Phone => &self.phone,
        }
    }
}

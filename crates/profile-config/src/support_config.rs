use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_INSTAGRAM_URL, DEFAULT_MESSAGING_URL,
    DEFAULT_PHONE_URL, DEFAULT_TWITTER_URL,
};

use serde::Deserialize;

/// Targets of the support/contact links shown on the profile screen.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SupportConfig {
    /// Messaging chat with prefilled text
    pub messaging_url: String,
    pub instagram_url: String,
    pub twitter_url: String,
    /// `tel:` dial link
    pub phone_url: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            messaging_url: String::from(DEFAULT_MESSAGING_URL),
            instagram_url: String::from(DEFAULT_INSTAGRAM_URL),
            twitter_url: String::from(DEFAULT_TWITTER_URL),
            phone_url: String::from(DEFAULT_PHONE_URL),
        }
    }
}

impl SupportConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::require_scheme("support.messaging_url", &self.messaging_url, "https://")?;
        Self::require_scheme("support.instagram_url", &self.instagram_url, "https://")?;
        Self::require_scheme("support.twitter_url", &self.twitter_url, "https://")?;
        Self::require_scheme("support.phone_url", &self.phone_url, "tel:")?;
        Ok(())
    }

    fn require_scheme(name: &str, url: &str, scheme: &str) -> ConfigErrorResult<()> {
        let url = url.trim();
        if url.len() <= scheme.len() || !url.starts_with(scheme) {
            return Err(ConfigError::support(format!(
                "{name} must start with '{scheme}' and name a target, got '{url}'"
            )));
        }
        Ok(())
    }
}

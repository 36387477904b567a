mod config;
mod error;
mod firebase_config;
mod log_level;
mod logging_config;
mod support_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use firebase_config::{FirebaseConfig, FirebaseCredentials};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use support_config::SupportConfig;

const CONFIG_DIR_ENV: &str = "PROFILE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".profile";
const CONFIG_FILE_NAME: &str = "config.toml";
const SESSION_FILE_NAME: &str = "session.json";

const DEFAULT_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_TOKEN_URL: &str = "https://securetoken.googleapis.com";
const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_MESSAGING_URL: &str = "https://wa.me/0716304517?text=Hello%20from%20your%20app";
const DEFAULT_INSTAGRAM_URL: &str = "https://www.instagram.com/your_username/";
const DEFAULT_TWITTER_URL: &str = "https://twitter.com/your_username/";
const DEFAULT_PHONE_URL: &str = "tel:+254716304517";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

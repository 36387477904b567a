use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    FirebaseConfig, LoggingConfig, SESSION_FILE_NAME, SupportConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub firebase: FirebaseConfig,
    pub support: SupportConfig,
    pub logging: LoggingConfig,
    /// Directory the config was loaded from; session and log files live here
    #[serde(skip)]
    pub config_dir: PathBuf,
}

impl Config {
    /// Load config from the default directory.
    ///
    /// Loading order:
    /// 1. Check for PROFILE_CONFIG_DIR env var, else use ./.profile/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PROFILE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from_dir(&config_dir)
    }

    /// Same as `load()` but with an explicit config directory.
    pub fn load_from_dir(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.config_dir = config_dir.to_path_buf();
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PROFILE_CONFIG_DIR env var > ./.profile/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.firebase.validate()?;
        self.support.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Path of the persisted sign-in session.
    pub fn session_path(&self) -> PathBuf {
        self.config_dir.join(SESSION_FILE_NAME)
    }

    /// Path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| self.config_dir.join(&self.logging.dir).join(file))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded from {}", self.config_dir.display());
        info!(
            "  firebase: project={}, api_key={}, timeout={}s",
            self.firebase.project_id.as_deref().unwrap_or("<unset>"),
            if self.firebase.api_key.is_some() {
                "set"
            } else {
                "unset"
            },
            self.firebase.timeout_secs
        );
        info!(
            "  endpoints: auth={}, token={}, firestore={}",
            self.firebase.auth_url, self.firebase.token_url, self.firebase.firestore_url
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Firebase
        Self::apply_env_option_string("PROFILE_FIREBASE_API_KEY", &mut self.firebase.api_key);
        Self::apply_env_option_string(
            "PROFILE_FIREBASE_PROJECT_ID",
            &mut self.firebase.project_id,
        );
        Self::apply_env_string("PROFILE_FIREBASE_AUTH_URL", &mut self.firebase.auth_url);
        Self::apply_env_string("PROFILE_FIREBASE_TOKEN_URL", &mut self.firebase.token_url);
        Self::apply_env_string(
            "PROFILE_FIREBASE_FIRESTORE_URL",
            &mut self.firebase.firestore_url,
        );
        Self::apply_env_parse(
            "PROFILE_FIREBASE_TIMEOUT_SECS",
            &mut self.firebase.timeout_secs,
        );

        // Support links
        Self::apply_env_string(
            "PROFILE_SUPPORT_MESSAGING_URL",
            &mut self.support.messaging_url,
        );
        Self::apply_env_string(
            "PROFILE_SUPPORT_INSTAGRAM_URL",
            &mut self.support.instagram_url,
        );
        Self::apply_env_string("PROFILE_SUPPORT_TWITTER_URL", &mut self.support.twitter_url);
        Self::apply_env_string("PROFILE_SUPPORT_PHONE_URL", &mut self.support.phone_url);

        // Logging
        Self::apply_env_parse("PROFILE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PROFILE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PROFILE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::errors::{Result, TranslatorError};

/// Default service endpoint
pub const DEFAULT_SERVICE_URL: &str =
    "https://gateway.watsonplatform.net/language-translator/api/v2";

/// Prefix of environment variables read by [`TranslatorConfig::load`]
pub const ENV_PREFIX: &str = "LANGUAGE_TRANSLATOR";

/// Configuration for the translator client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub username: String,
    pub password: String,
    pub url: String,
    pub timeout_ms: u64,
    /// Ask the service not to keep request data for its own training
    pub learning_opt_out: bool,
    /// Headers sent with every request
    pub default_headers: HashMap<String, String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            url: DEFAULT_SERVICE_URL.to_string(),
            timeout_ms: 30000,
            learning_opt_out: false,
            default_headers: HashMap::new(),
        }
    }
}

impl TranslatorConfig {
    /// Config with credentials and every other setting at its default
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Point the client at another endpoint
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Load configuration from an optional file, then `LANGUAGE_TRANSLATOR_*`
    /// environment variables, later sources overriding earlier ones.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TranslatorError::FileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(TranslatorError::config("username and password are required"));
        }

        for value in [&self.username, &self.password] {
            if looks_like_placeholder(value) {
                return Err(TranslatorError::config(
                    "username and password must not start or end with curly brackets or quotes",
                ));
            }
        }

        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| TranslatorError::config(format!("invalid service url {}: {}", self.url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TranslatorError::config(format!(
                "service url must be http or https, got {}",
                url.scheme()
            )));
        }
        if url.scheme() == "http" {
            warn!("Service url {} is not using TLS", self.url);
        }

        if self.timeout_ms == 0 {
            return Err(TranslatorError::config("timeout_ms must be greater than 0"));
        }

        Ok(())
    }
}

fn looks_like_placeholder(value: &str) -> bool {
    const MARKERS: [char; 3] = ['{', '}', '"'];
    value.starts_with(MARKERS) || value.ends_with(MARKERS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Serializes tests that read or write LANGUAGE_TRANSLATOR_* variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in ["USERNAME", "PASSWORD", "URL", "TIMEOUT_MS", "LEARNING_OPT_OUT"] {
            std::env::remove_var(format!("{}_{}", ENV_PREFIX, key));
        }
    }

    #[test]
    fn test_config_validation() {
        let config = TranslatorConfig::with_credentials("username", "password");
        assert!(config.validate().is_ok());
        assert_eq!(config.url, DEFAULT_SERVICE_URL);
    }

    #[test]
    fn test_config_validation_missing_credentials() {
        let config = TranslatorConfig {
            password: "password".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_placeholders() {
        let config = TranslatorConfig::with_credentials("{username}", "password");
        assert!(config.validate().is_err());

        let config = TranslatorConfig::with_credentials("username", "\"password\"");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_url() {
        let config = TranslatorConfig::with_credentials("username", "password").with_url("ftp://host");
        assert!(config.validate().is_err());

        let config = TranslatorConfig::with_credentials("username", "password").with_url("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"username": "file-user", "password": "file-pass", "timeout_ms": 5000}}"#
        )
        .unwrap();

        let config = TranslatorConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.username, "file-user");
        assert_eq!(config.password, "file-pass");
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.url, DEFAULT_SERVICE_URL);
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"username": "file-user", "password": "file-pass", "timeout_ms": 5000}}"#
        )
        .unwrap();

        std::env::set_var("LANGUAGE_TRANSLATOR_PASSWORD", "env-pass");
        std::env::set_var("LANGUAGE_TRANSLATOR_TIMEOUT_MS", "750");
        std::env::set_var("LANGUAGE_TRANSLATOR_LEARNING_OPT_OUT", "true");
        let config = TranslatorConfig::load(Some(file.path()));
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.username, "file-user");
        assert_eq!(config.password, "env-pass");
        assert_eq!(config.timeout_ms, 750);
        assert!(config.learning_opt_out);
    }

    #[test]
    fn test_env_numeric_credentials_stay_verbatim() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        std::env::set_var("LANGUAGE_TRANSLATOR_USERNAME", "0042");
        std::env::set_var("LANGUAGE_TRANSLATOR_PASSWORD", "007");
        let leading_zero = TranslatorConfig::load(None);
        std::env::set_var("LANGUAGE_TRANSLATOR_PASSWORD", "1.50");
        let trailing_zero = TranslatorConfig::load(None);
        clear_env();

        let leading_zero = leading_zero.unwrap();
        assert_eq!(leading_zero.username, "0042");
        assert_eq!(leading_zero.password, "007");
        assert_eq!(trailing_zero.unwrap().password, "1.50");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.json");

        let mut config = TranslatorConfig::with_credentials("username", "password");
        config.learning_opt_out = true;
        config.to_file(&path).unwrap();

        assert_eq!(TranslatorConfig::from_file(&path).unwrap(), config);
    }
}

//! Client settings loaded via OrthoConfig.

use std::ffi::OsString;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::http::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT, InvalidBaseUrl};

const DEFAULT_APP_NAME: &str = "旅游助手";
const DEFAULT_STORAGE_DIR: &str = ".travel-assistant";

/// Settings could not be turned into a working client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Sources could not be read or merged.
    #[error("failed to load settings: {message}")]
    Load {
        /// Loader diagnostic.
        message: String,
    },
    /// The configured base URL is unusable.
    #[error(transparent)]
    BaseUrl(#[from] InvalidBaseUrl),
}

/// Connection and storage settings, read from `TRAVEL_*` environment
/// variables and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRAVEL")]
pub struct ClientSettings {
    /// Backend root, e.g. `https://api.example.com/api/v1`.
    pub api_base_url: Option<String>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Display name for front ends.
    pub app_name: Option<String>,
    /// Directory holding the persistent session document.
    pub storage_dir: Option<String>,
}

impl ClientSettings {
    /// Load from environment and configuration files only, ignoring the
    /// process arguments (the CLI parses those itself).
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a source is malformed.
    pub fn from_environment() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from("travel-cli")]).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Configured base URL, falling back to the local development backend.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Configured timeout, falling back to 15 seconds.
    pub fn timeout(&self) -> Duration {
        self.timeout_ms
            .map_or(DEFAULT_TIMEOUT, Duration::from_millis)
    }

    /// Configured display name.
    pub fn app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Configured storage directory.
    pub fn storage_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.storage_dir.as_deref().unwrap_or(DEFAULT_STORAGE_DIR))
    }

    /// Build the HTTP client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BaseUrl`] when the base URL is unusable.
    pub fn client_config(&self) -> Result<ClientConfig, SettingsError> {
        let config = ClientConfig::parse(self.api_base_url())?;
        Ok(config.with_timeout(self.timeout()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "TRAVEL_API_BASE_URL",
        "TRAVEL_TIMEOUT_MS",
        "TRAVEL_APP_NAME",
        "TRAVEL_STORAGE_DIR",
    ];

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = ClientSettings::from_environment().expect("settings load");
        assert_eq!(settings.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(settings.timeout(), Duration::from_millis(15_000));
        assert_eq!(settings.app_name(), DEFAULT_APP_NAME);
        assert_eq!(
            settings.storage_dir(),
            Utf8PathBuf::from(".travel-assistant")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TRAVEL_API_BASE_URL", Some("https://api.example.com/v2".to_owned())),
            ("TRAVEL_TIMEOUT_MS", Some("2500".to_owned())),
            ("TRAVEL_APP_NAME", Some("Trip Desk".to_owned())),
            ("TRAVEL_STORAGE_DIR", Some("/tmp/trip-desk".to_owned())),
        ]);

        let settings = ClientSettings::from_environment().expect("settings load");
        let config = settings.client_config().expect("valid config");
        assert_eq!(config.base_url().as_str(), "https://api.example.com/v2");
        assert_eq!(config.timeout(), Duration::from_millis(2500));
        assert_eq!(settings.app_name(), "Trip Desk");
        assert_eq!(settings.storage_dir(), Utf8PathBuf::from("/tmp/trip-desk"));
    }

    #[rstest]
    fn unusable_base_url_is_reported() {
        let _guard = lock_env([
            ("TRAVEL_API_BASE_URL", Some("ftp://files.example.com".to_owned())),
            ("TRAVEL_TIMEOUT_MS", None),
            ("TRAVEL_APP_NAME", None),
            ("TRAVEL_STORAGE_DIR", None),
        ]);

        let settings = ClientSettings::from_environment().expect("settings load");
        assert!(matches!(
            settings.client_config(),
            Err(SettingsError::BaseUrl(_))
        ));
    }
}

//! Application configuration: an optional RON file plus environment overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use search_engine::ProviderSettings;
use search_logging::LogDestination;
use serde::Deserialize;

pub const CONFIG_FILENAME: &str = "search_app.ron";
pub const API_KEY_ENV: &str = "SEARCH_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub bookmarks_dir: PathBuf,
    pub log_destination: LogTarget,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let provider = ProviderSettings::default();
        Self {
            base_url: provider.base_url,
            api_key: None,
            connect_timeout_secs: provider.connect_timeout.as_secs(),
            request_timeout_secs: provider.request_timeout.as_secs(),
            bookmarks_dir: PathBuf::from("./bookmarks"),
            log_destination: LogTarget::default(),
            log_file: PathBuf::from("./search_app.log"),
        }
    }
}

impl AppConfig {
    /// Read the config file at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading config {}", path.display()))
            }
        };
        Self::parse(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    /// Apply `SEARCH_API_KEY` if it is set and non-blank.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn with_api_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..ProviderSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let config = AppConfig::parse(
            r#"(
                base_url: "http://localhost:8080",
                api_key: Some("from-file"),
                log_destination: Both,
            )"#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.log_destination, LogTarget::Both);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.bookmarks_dir, PathBuf::from("./bookmarks"));
    }

    #[test]
    fn default_config_logs_to_the_log_file() {
        let config = AppConfig::default();

        assert_eq!(config.log_destination, LogTarget::default());
        assert_eq!(
            LogDestination::from(config.log_destination),
            LogDestination::File
        );
        assert_eq!(config.log_file, PathBuf::from("./search_app.log"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join(CONFIG_FILENAME)).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "(base_url: 42").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }

    #[test]
    fn env_key_overrides_file_but_blank_does_not() {
        let config = AppConfig {
            api_key: Some("from-file".to_string()),
            ..AppConfig::default()
        };

        let kept = config.clone().with_api_key(Some("  ".to_string()));
        assert_eq!(kept.api_key.as_deref(), Some("from-file"));

        let replaced = config.with_api_key(Some("from-env".to_string()));
        assert_eq!(replaced.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn provider_settings_use_configured_timeouts() {
        let config = AppConfig {
            connect_timeout_secs: 3,
            request_timeout_secs: 7,
            ..AppConfig::default()
        };

        let settings = config.provider_settings();
        assert_eq!(settings.connect_timeout, Duration::from_secs(3));
        assert_eq!(settings.request_timeout, Duration::from_secs(7));
        assert_eq!(settings.base_url, config.base_url);
    }
}

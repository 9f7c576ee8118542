use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/alertdeck/config.toml
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP endpoint of the alert feed
    pub feed_url: String,
    /// Local feed file; takes precedence over `feed_url` when set
    pub feed_file: Option<PathBuf>,
    /// Timeout for the feed fetch (seconds)
    pub http_timeout_secs: u64,
    /// Language code whose information blocks are dropped
    pub excluded_language: String,
    /// Label at the left of the status bar
    pub title: String,
    /// Theme name (built-in or custom)
    pub theme: String,
    /// Tracing filter directive used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            feed_file: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            excluded_language: DEFAULT_EXCLUDED_LANGUAGE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            theme: "default".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional — missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    feed_url: Option<String>,
    feed_file: Option<PathBuf>,
    http_timeout_secs: Option<u64>,
    excluded_language: Option<String>,
    title: Option<String>,
    theme: Option<String>,
    log_level: Option<String>,
}

impl Config {
    /// Load config from ~/.config/alertdeck/config.toml, falling back to defaults
    /// for any missing fields. If the file doesn't exist, returns pure defaults.
    ///
    /// Runs before logging is set up, so a parse error is handed back to the
    /// caller to report instead of being logged here.
    pub fn load() -> (Self, Option<toml::de::Error>) {
        Self::load_from(&config_file_path())
    }

    /// Load config from an explicit path. An unparsable file yields the
    /// defaults together with the parse error.
    pub fn load_from(path: &Path) -> (Self, Option<toml::de::Error>) {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return (Config::default(), None),
        };
        match Self::from_toml_str(&content) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    /// Parse TOML text and merge it over the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file_config: FileConfig = toml::from_str(content)?;
        let mut config = Config::default();

        if let Some(v) = file_config.feed_url {
            if !v.is_empty() {
                config.feed_url = v;
            }
        }
        if let Some(v) = file_config.feed_file {
            if !v.as_os_str().is_empty() {
                config.feed_file = Some(v);
            }
        }
        if let Some(v) = file_config.http_timeout_secs {
            config.http_timeout_secs = v.max(1);
        }
        if let Some(v) = file_config.excluded_language {
            if !v.trim().is_empty() {
                config.excluded_language = v.trim().to_string();
            }
        }
        if let Some(v) = file_config.title {
            config.title = v; // empty title is allowed
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                config.theme = v;
            }
        }
        if let Some(v) = file_config.log_level {
            if !v.is_empty() {
                config.log_level = v;
            }
        }

        Ok(config)
    }
}

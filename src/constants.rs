//! Application-wide constants.
//!
//! Feed literals, display formats, and configuration defaults live here so
//! the normalizer and renderer agree on them.

use std::path::PathBuf;

// ── Feed ──────────────────────────────────────────────────────────
/// Default alert feed endpoint.
pub const DEFAULT_FEED_URL: &str = "http://alerts.zacharyseguin.ca/api/alerts.json";
/// Default HTTP timeout for the one-shot fetch (seconds).
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
/// Status value of an alert that is real and currently in effect.
pub const STATUS_ACTUAL: &str = "Actual";
/// Language code whose information blocks are dropped.
pub const DEFAULT_EXCLUDED_LANGUAGE: &str = "fr-CA";

// ── Timestamps ────────────────────────────────────────────────────
/// Layout of the feed's timestamp prefix (any trailing offset is ignored).
pub const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Length of the `YYYY-MM-DDThh:mm:ss` prefix.
pub const FEED_TIMESTAMP_PREFIX_LEN: usize = 19;
/// Layout used when showing a timestamp to the user.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Shown in place of a timestamp the feed did not supply in a usable form.
pub const UNSET_TIMESTAMP_LABEL: &str = "unknown";

// ── UI ────────────────────────────────────────────────────────────
/// Default label at the left of the status bar.
pub const DEFAULT_TITLE: &str = "Canada Alert System";
/// Status bar text when the collection is empty.
pub const NO_ALERTS_LABEL: &str = "No active alerts";
/// Horizontal padding inside the alert pane.
pub const ALERT_PANE_PADDING: u16 = 1;
/// Narrowest wrap width handed to textwrap.
pub const MIN_WRAP_WIDTH: usize = 20;

// ── Logging ───────────────────────────────────────────────────────
/// Default tracing filter when neither CLI, RUST_LOG nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Base file name of the rolling log.
pub const LOG_FILE_NAME: &str = "alertdeck.log";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/alertdeck/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("alertdeck")
}

/// Returns `~/.config/alertdeck/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/alertdeck/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    config_dir().join("themes").join(format!("{}.toml", name))
}

/// Returns `~/.local/share/alertdeck/`.
pub fn data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("alertdeck")
}

/// Returns `~/.local/share/alertdeck/logs/`.
pub fn log_dir() -> PathBuf {
    data_dir().join("logs")
}

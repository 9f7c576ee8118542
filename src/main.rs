//! # Alertdeck - Terminal Emergency Alert Reader
//!
//! Fetches a public emergency-alert feed once, normalizes whichever feed
//! generation the provider is serving into one alert model, and lets the
//! user page through the alerts in the terminal.

mod app;
mod config;
pub mod constants;
mod feed;
mod logging;
mod models;
mod navigation;
mod ui;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use config::Config;
use feed::{FeedClient, FeedSource};

/// Alertdeck - Terminal Emergency Alert Reader
#[derive(Parser, Debug)]
#[command(name = "alertdeck", version, about = "Page through public emergency alerts in the terminal")]
struct Cli {
    /// Feed URL to fetch instead of the configured one
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    url: Option<String>,

    /// Read the feed from a local JSON file instead of HTTP
    #[arg(long, short = 'f', value_name = "PATH")]
    file: Option<PathBuf>,

    /// Color theme (default, classic, gruvbox, nord, or a custom theme name)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// Log filter for the log file (e.g. "debug", "alertdeck=trace")
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let (mut config, config_error) = Config::load();
    if let Some(url) = cli.url {
        config.feed_url = url;
        config.feed_file = None;
    }
    if let Some(path) = cli.file {
        config.feed_file = Some(path);
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let _log_guard = logging::init_logging(
        &constants::log_dir(),
        cli.log_level.as_deref(),
        &config.log_level,
    );
    if let Some(e) = config_error {
        warn!(
            path = %constants::config_file_path().display(),
            error = %e,
            "failed to parse config, using defaults"
        );
    }

    // One-shot load; failures degrade to an empty collection.
    let client = FeedClient::new(&config);
    let alerts = client
        .load_or_empty(&FeedSource::from_config(&config))
        .await;

    app::App::new(&config, alerts).run()
}

//! File logging. The terminal belongs to the TUI, so nothing goes to stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::constants::LOG_FILE_NAME;

/// Install a daily rolling file subscriber under `dir`.
///
/// Filter precedence: `cli_level` > `RUST_LOG` > `config_level`.
/// The returned guard flushes buffered lines on drop and must be held for
/// the lifetime of the program. Returns `None` (logging disabled) if the
/// directory cannot be created.
pub fn init_logging(dir: &Path, cli_level: Option<&str>, config_level: &str) -> Option<WorkerGuard> {
    std::fs::create_dir_all(dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(build_env_filter(cli_level, config_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        );

    // An earlier subscriber (tests, embedding) keeps receiving events. The
    // guard is still returned so this writer is flushed on drop.
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        tracing::debug!(error = %e, "global subscriber already installed, file logging skipped");
    }

    Some(guard)
}

fn build_env_filter(cli_level: Option<&str>, config_level: &str) -> EnvFilter {
    if let Some(level) = cli_level {
        if let Ok(filter) = EnvFilter::try_new(level) {
            return filter;
        }
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_level))
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_LEVEL))
}

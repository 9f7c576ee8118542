use std::path::PathBuf;

use thiserror::Error;

/// Structural failures of a feed load.
///
/// Field-level problems never surface here; they degrade to defaults inside
/// the normalizer.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("failed to fetch feed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("feed server returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to read feed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("feed is not valid JSON (line {line}, column {column}): {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("unrecognized feed shape: {0}")]
    InvalidShape(String),
}

impl FeedError {
    /// True for transport / file availability problems, as opposed to bad content.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            FeedError::Fetch(_) | FeedError::Status(_) | FeedError::Io { .. }
        )
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Syntax {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

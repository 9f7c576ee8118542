//! Alert feed loading: raw bytes → JSON tree → [`AlertCollection`].
//!
//! The load happens once, before the UI starts. Any failure is reported to
//! the log and the program carries on with an empty collection.

mod error;
pub mod normalize;
pub mod schema;

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::models::AlertCollection;

pub use error::FeedError;
pub use normalize::Normalizer;

/// Where the raw feed comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl FeedSource {
    /// A configured local file wins over the URL.
    pub fn from_config(config: &Config) -> Self {
        match &config.feed_file {
            Some(path) => FeedSource::File(path.clone()),
            None => FeedSource::Url(config.feed_url.clone()),
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Url(url) => write!(f, "{}", url),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and normalizes the alert feed.
pub struct FeedClient {
    client: reqwest::Client,
    normalizer: Normalizer,
}

impl FeedClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.http_timeout_secs))
                .build()
                .unwrap_or_default(),
            normalizer: Normalizer::new(config.excluded_language.clone()),
        }
    }

    /// Read the full raw body of the feed.
    pub async fn fetch(&self, source: &FeedSource) -> Result<Vec<u8>, FeedError> {
        match source {
            FeedSource::Url(url) => {
                let resp = self.client.get(url).send().await?;
                if !resp.status().is_success() {
                    return Err(FeedError::Status(resp.status()));
                }
                Ok(resp.bytes().await?.to_vec())
            }
            FeedSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| FeedError::Io {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }

    /// Fetch, parse and normalize. No partial collection on failure.
    pub async fn load(&self, source: &FeedSource) -> Result<AlertCollection, FeedError> {
        info!(%source, "loading alert feed");
        let raw = self.fetch(source).await?;
        parse_feed(&raw, &self.normalizer)
    }

    /// Like [`load`](Self::load), but any failure degrades to an empty collection.
    pub async fn load_or_empty(&self, source: &FeedSource) -> AlertCollection {
        match self.load(source).await {
            Ok(alerts) => alerts,
            Err(e) => {
                warn!(%source, error = %e, unavailable = e.is_unavailable(), "feed load failed, showing no alerts");
                AlertCollection::empty()
            }
        }
    }
}

/// Parse raw feed bytes and normalize the resulting tree.
pub fn parse_feed(raw: &[u8], normalizer: &Normalizer) -> Result<AlertCollection, FeedError> {
    let root: serde_json::Value = serde_json::from_slice(raw)?;
    normalizer.normalize(&root)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"[
        {
            "Status": "Actual",
            "Information": [
                {
                    "Language": "en-CA",
                    "Headline": "Freezing rain warning",
                    "SenderName": "Environment Canada",
                    "Effective": "2014-02-26T15:41:00-05:00",
                    "Expires": "2014-02-27T03:41:00-05:00",
                    "Areas": [{ "Description": "Ottawa North - Kanata - Orléans" }]
                },
                { "Language": "fr-CA", "Headline": "Avertissement de pluie verglaçante" }
            ]
        }
    ]"#;

    fn file_config(path: PathBuf) -> Config {
        Config {
            feed_file: Some(path),
            ..Config::default()
        }
    }

    #[test]
    fn source_prefers_file() {
        let config = file_config(PathBuf::from("/tmp/a.json"));
        assert_eq!(
            FeedSource::from_config(&config),
            FeedSource::File(PathBuf::from("/tmp/a.json"))
        );
        assert_eq!(
            FeedSource::from_config(&Config::default()),
            FeedSource::Url(crate::constants::DEFAULT_FEED_URL.to_string())
        );
    }

    #[test]
    fn parse_feed_sample() {
        let c = parse_feed(SAMPLE_FEED.as_bytes(), &Normalizer::default()).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(0).unwrap().headline, "Freezing rain warning");
    }

    #[test]
    fn parse_feed_syntax_error() {
        let err = parse_feed(b"[{\"Status\": ", &Normalizer::default()).unwrap_err();
        assert!(matches!(err, FeedError::Syntax { .. }));
        let err = parse_feed(b"", &Normalizer::default()).unwrap_err();
        assert!(matches!(err, FeedError::Syntax { .. }));
    }

    #[tokio::test]
    async fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alerts.json");
        std::fs::write(&path, SAMPLE_FEED).unwrap();

        let config = file_config(path);
        let client = FeedClient::new(&config);
        let c = client
            .load(&FeedSource::from_config(&config))
            .await
            .unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(0).unwrap().areas[0].name, "Ottawa North - Kanata - Orléans");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(dir.path().join("missing.json"));
        let client = FeedClient::new(&config);
        let err = client
            .load(&FeedSource::from_config(&config))
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::Io { .. }));
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn load_or_empty_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = file_config(path);
        let client = FeedClient::new(&config);
        let c = client.load_or_empty(&FeedSource::from_config(&config)).await;
        assert!(c.is_empty());
    }

    /// Serve a fixed HTTP status with an empty body to every connection.
    async fn serve_status(status_line: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    status_line
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}/alerts.json", addr)
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let url = serve_status("503 Service Unavailable").await;
        let client = FeedClient::new(&Config::default());
        let source = FeedSource::Url(url);

        match client.load(&source).await {
            Err(err @ FeedError::Status(_)) => {
                assert!(matches!(
                    err,
                    FeedError::Status(code) if code == reqwest::StatusCode::SERVICE_UNAVAILABLE
                ));
                assert!(err.is_unavailable());
            }
            other => panic!("expected status error, got {:?}", other),
        }
        assert!(client.load_or_empty(&source).await.is_empty());
    }

    #[tokio::test]
    async fn load_or_empty_on_invalid_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("object.json");
        std::fs::write(&path, r#"{ "feed": [] }"#).unwrap();

        let config = file_config(path);
        let client = FeedClient::new(&config);
        let source = FeedSource::from_config(&config);
        assert!(matches!(
            client.load(&source).await,
            Err(FeedError::InvalidShape(_))
        ));
        assert!(client.load_or_empty(&source).await.is_empty());
    }
}

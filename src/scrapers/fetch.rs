//! Raw article retrieval.
//!
//! The pipeline only needs "URL in, HTML text out", expressed by
//! [`FetchDocument`]. [`HttpFetcher`] is the production implementation;
//! tests substitute canned documents.
//!
//! There is no retry and no timeout beyond reqwest's defaults. A request that
//! never completes stalls the run, which is acceptable for a single-pass
//! batch tool.

use crate::error::FetchError;
use reqwest::Client;
use tracing::{debug, instrument};

/// Retrieve the raw document behind a URL.
pub trait FetchDocument {
    /// Fetch `url` and return its body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP fetcher backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher that identifies itself with `user_agent`.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl FetchDocument for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        debug!(bytes = body.len(), "Fetched article body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new("news_lexicon/test").is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let fetcher = HttpFetcher::new("news_lexicon/test").unwrap();
        // Port 9 on localhost (discard) is closed on any sane test machine.
        let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
        assert_eq!(err.url(), "http://127.0.0.1:9/");
    }
}

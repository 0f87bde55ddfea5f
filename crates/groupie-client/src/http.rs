//! HTTP [`DataSource`] backed by `reqwest`.
//!
//! Issues a plain `GET` per endpoint with the transport's default
//! settings. There are no retries and no timeout override: a failure is
//! returned to the caller as-is.

use tracing::debug;

use crate::endpoint::Endpoint;
use crate::error::{FetchCause, FetchError};
use crate::source::DataSource;

/// Default base URL of the public Groupie Trackers API.
pub const DEFAULT_API_URL: &str = "https://groupietrackers.herokuapp.com/api";

/// Fetches collection bodies from the remote API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source rooted at `base_url` (e.g. [`DEFAULT_API_URL`]).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl DataSource for HttpSource {
    async fn get(&self, endpoint: Endpoint) -> Result<String, FetchError> {
        let url = endpoint.url(&self.base_url);
        debug!(%endpoint, url, "requesting collection");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::new(endpoint, FetchCause::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(endpoint, FetchCause::Status(status.as_u16())));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::new(endpoint, FetchCause::Transport(e.to_string())))
    }
}

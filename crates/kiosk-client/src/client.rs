//! Feed client over HTTP
//!
//! One `reqwest::Client` serves both boards. Endpoint URLs are joined
//! from a configurable base; records decode directly into the core board
//! types, ignoring the extra fields the feed carries.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use kiosk_app::{Board, FeedError, FeedSource, Post, User};

/// Default feed base URL.
pub const DEFAULT_FEED_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP feed source for the kiosk boards.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// Client against the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FeedError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Client with an explicit per-request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The configured feed base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL with a board's endpoint path.
    fn endpoint_url(&self, board: Board) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            board.endpoint_path()
        )
    }

    /// GET a board's list endpoint and decode the JSON array.
    async fn fetch_list<T>(&self, board: Board) -> Result<Vec<T>, FeedError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(board);
        tracing::debug!("Fetching {} from {}", board.label(), url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::transport(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Feed endpoint {} answered with status {}", url, status);
            return Err(FeedError::http(status.as_u16()));
        }

        let items: Vec<T> = response.json().await.map_err(|e| {
            FeedError::decode(format!("failed to parse {} response: {e}", board.label()))
        })?;

        tracing::debug!("Fetched {} {} records", items.len(), board.label());
        Ok(items)
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
        self.fetch_list(Board::Posts).await
    }

    async fn fetch_users(&self) -> Result<Vec<User>, FeedError> {
        self.fetch_list(Board::Users).await
    }
}

//! Nyaa torrent index client, via its RSS endpoint.

use super::{feed, CandidateRelease, SearchError};
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Nyaa's "Anime - English-translated" category.
pub const CATEGORY_ANIME_ENGLISH: &str = "1_2";

pub struct NyaaClient {
    client: Client,
    base_url: String,
}

impl NyaaClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search the index, returning releases in the index's own ranking
    /// order. Empty query terms are dropped; the remaining terms are
    /// space-joined into one query string.
    pub async fn list(
        &self,
        category: &str,
        queries: &[String],
    ) -> Result<Vec<CandidateRelease>, SearchError> {
        let query = queries
            .iter()
            .filter(|term| !term.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("page", "rss"), ("c", category), ("q", &query)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SearchError::Api {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        feed::parse_feed(&body)
    }
}

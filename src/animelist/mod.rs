mod kitsu;
mod types;

pub use kitsu::KitsuClient;
pub use types::{AiringStatus, ListStatus, WatchedEntry};

use async_trait::async_trait;

/// A watch-list provider: yields the shows the user is actively
/// following. Implemented for Kitsu; test suites supply fakes.
#[async_trait]
pub trait AnimeListClient: Send + Sync {
    /// The entries currently marked as "watching".
    async fn currently_watching(&self) -> Result<Vec<WatchedEntry>, AnimeListError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnimeListError {
    #[error("watch-list request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("watch-list provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("watch-list user '{0}' not found")]
    UnknownUser(String),
}

mod feed;
mod nyaa;

pub use nyaa::{NyaaClient, CATEGORY_ANIME_ENGLISH};

/// One discovered release, in the order the index returned it. The link
/// is opaque here; only the download client interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRelease {
    pub title: String,
    pub link: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search index returned {status}")]
    Api { status: u16 },

    #[error("invalid feed: {0}")]
    Feed(String),
}

mod qbittorrent;

pub use qbittorrent::QBittorrentClient;

use serde::Deserialize;

/// Minimal view of a torrent on the download client.
#[derive(Debug, Clone, Deserialize)]
pub struct TorrentInfo {
    pub name: String,
    pub hash: String,
}

/// Parameters for adding one torrent.
#[derive(Debug, Clone, Default)]
pub struct AddTorrent {
    /// Torrent or magnet URLs.
    pub urls: Vec<String>,
    pub save_path: String,
    pub category: String,
    /// Tags attached so later cycles can recognize the download.
    pub tags: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("download client request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("download client rejected the credentials")]
    Unauthorized,

    #[error("download client returned {status}: {message}")]
    Api { status: u16, message: String },
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub animelist: AnimeListConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub downloads: DownloadsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Release groups to accept, OR-ed into the search query.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Quality tokens to accept (e.g. "1080p"), OR-ed into the query.
    #[serde(default)]
    pub qualities: Vec<String>,

    /// Download-client category assigned to added torrents.
    #[serde(default = "default_category")]
    pub category: String,

    /// Base save path on the download client.
    #[serde(default = "default_download_path")]
    pub download_path: String,

    /// Save each show into its own subfolder of `download_path`.
    #[serde(default)]
    pub create_show_folder: bool,

    /// Seconds between discovery passes.
    #[serde(default = "default_poll_frequency")]
    pub poll_frequency_secs: u64,

    /// Namespace marker prepended to every download tag key.
    #[serde(default = "default_tag_namespace")]
    pub tag_namespace: String,
}

impl DiscoveryConfig {
    pub fn poll_frequency(&self) -> Duration {
        Duration::from_secs(self.poll_frequency_secs)
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            qualities: Vec::new(),
            category: default_category(),
            download_path: default_download_path(),
            create_show_folder: false,
            poll_frequency_secs: default_poll_frequency(),
            tag_namespace: default_tag_namespace(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnimeListConfig {
    /// Watch-list provider API root.
    #[serde(default = "default_animelist_url")]
    pub base_url: String,

    /// Account slug whose "currently watching" list drives discovery.
    #[serde(default)]
    pub username: String,
}

impl Default for AnimeListConfig {
    fn default() -> Self {
        Self {
            base_url: default_animelist_url(),
            username: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Torrent index root; queried via its RSS endpoint.
    #[serde(default = "default_search_url")]
    pub base_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadsConfig {
    /// qBittorrent WebUI root.
    #[serde(default = "default_downloads_url")]
    pub url: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl Default for DownloadsConfig {
    fn default() -> Self {
        Self {
            url: default_downloads_url(),
            username: String::new(),
            password: String::new(),
        }
    }
}

fn default_category() -> String {
    "anime".to_string()
}

fn default_download_path() -> String {
    "/downloads/anime".to_string()
}

fn default_poll_frequency() -> u64 {
    15 * 60
}

fn default_tag_namespace() -> String {
    "aniforge".to_string()
}

fn default_animelist_url() -> String {
    "https://kitsu.io/api/edge".to_string()
}

fn default_search_url() -> String {
    "https://nyaa.si".to_string()
}

fn default_downloads_url() -> String {
    "http://localhost:8080".to_string()
}

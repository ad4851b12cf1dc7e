//! qBittorrent WebUI v2 client.
//!
//! Authentication is a SID cookie issued by `/auth/login`; the client
//! keeps it in reqwest's cookie store and re-logs-in once when a request
//! comes back 401/403 (qBittorrent expires sessions server-side).

use super::{AddTorrent, DownloadError, TorrentInfo};
use crate::discovery::{DownloadTagKey, ExistingDownloads};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct QBittorrentClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl QBittorrentClient {
    pub fn new(url: &str, username: &str, password: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .cookie_store(true)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });
        Self {
            client,
            base_url: format!("{}/api/v2", url.trim_end_matches('/')),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Create a client, log in, and verify the connection.
    pub async fn connect(url: &str, username: &str, password: &str) -> Result<Self, DownloadError> {
        let client = Self::new(url, username, password);
        client.login().await?;
        let version = client.version().await?;
        tracing::info!("connected to qBittorrent {version}");
        Ok(client)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in to the WebUI; the SID cookie lands in the cookie store.
    pub async fn login(&self) -> Result<(), DownloadError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .form(&[
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status.is_success() && body == "Ok." {
            tracing::debug!("logged in to qBittorrent");
            Ok(())
        } else if body == "Fails." {
            Err(DownloadError::Unauthorized)
        } else {
            Err(DownloadError::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }

    /// WebUI application version.
    pub async fn version(&self) -> Result<String, DownloadError> {
        let response = self
            .execute(|| self.client.get(self.url("/app/version")))
            .await?;
        Ok(response.text().await?)
    }

    /// Torrents carrying every one of `tags`.
    pub async fn list_tagged(&self, tags: &[&str]) -> Result<Vec<TorrentInfo>, DownloadError> {
        let tag = tags.join(",");
        let response = self
            .execute(|| {
                self.client
                    .get(self.url("/torrents/info"))
                    .query(&[("tag", &tag)])
            })
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Add a torrent by URL with its save path, category, and tags.
    pub async fn add(&self, torrent: &AddTorrent) -> Result<(), DownloadError> {
        let form = [
            ("urls", torrent.urls.join("\n")),
            ("savepath", torrent.save_path.clone()),
            ("category", torrent.category.clone()),
            ("tags", torrent.tags.join(",")),
        ];
        let response = self
            .execute(|| self.client.post(self.url("/torrents/add")).form(&form))
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(())
    }

    /// Send a request, retrying once through a fresh login when the
    /// session has expired. A second rejection is a hard error.
    async fn execute<F>(&self, build: F) -> Result<reqwest::Response, DownloadError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let response = build().send().await?;
        if !session_expired(response.status()) {
            return Ok(response);
        }

        tracing::debug!("qBittorrent session expired; logging in again");
        self.login().await?;
        let response = build().send().await?;
        if session_expired(response.status()) {
            return Err(DownloadError::Unauthorized);
        }
        Ok(response)
    }
}

fn session_expired(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

async fn api_error(response: reqwest::Response) -> DownloadError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    DownloadError::Api { status, message }
}

#[async_trait]
impl ExistingDownloads for QBittorrentClient {
    async fn contains(&self, key: &DownloadTagKey) -> anyhow::Result<bool> {
        let tags = key.tags();
        let torrents = self.list_tagged(&tags).await?;
        Ok(!torrents.is_empty())
    }
}

//! Kitsu watch-list client (JSON:API).

use super::{AiringStatus, AnimeListClient, AnimeListError, ListStatus, WatchedEntry};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("aniforge/", env!("CARGO_PKG_VERSION"));
const JSONAPI_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Client for the Kitsu API. Resolves the account slug to a user id once
/// at connect time; every later call only reads the library.
#[derive(Debug)]
pub struct KitsuClient {
    client: Client,
    base_url: String,
    user_id: String,
}

impl KitsuClient {
    /// Connect to Kitsu and resolve `username` (an account slug) to its
    /// user id.
    pub async fn connect(base_url: &str, username: &str) -> Result<Self, AnimeListError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });
        let base_url = base_url.trim_end_matches('/').to_string();

        let response = client
            .get(format!("{base_url}/users"))
            .query(&[("filter[slug]", username)])
            .header(reqwest::header::ACCEPT, JSONAPI_CONTENT_TYPE)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let users: ResourceList = response.json().await?;
        let user_id = users
            .data
            .into_iter()
            .next()
            .map(|user| user.id)
            .ok_or_else(|| AnimeListError::UnknownUser(username.to_string()))?;
        tracing::debug!(username, user_id, "resolved kitsu user");

        Ok(Self {
            client,
            base_url,
            user_id,
        })
    }
}

#[async_trait]
impl AnimeListClient for KitsuClient {
    async fn currently_watching(&self) -> Result<Vec<WatchedEntry>, AnimeListError> {
        let status = ListStatus::Watching.as_kitsu().unwrap_or("current");
        let response = self
            .client
            .get(format!("{}/library-entries", self.base_url))
            .query(&[
                ("filter[kind]", "anime"),
                ("filter[status]", status),
                ("filter[user_id]", &self.user_id),
                ("include", "anime"),
                ("page[limit]", "20"),
            ])
            .header(reqwest::header::ACCEPT, JSONAPI_CONTENT_TYPE)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let page: LibraryPage = response.json().await?;
        let anime: HashMap<&str, &AnimeResource> = page
            .included
            .iter()
            .filter(|resource| resource.kind == "anime")
            .map(|resource| (resource.id.as_str(), resource))
            .collect();

        let mut entries = Vec::with_capacity(page.data.len());
        for entry in &page.data {
            let Some(resource) = entry
                .relationships
                .anime
                .data
                .as_ref()
                .and_then(|id| anime.get(id.id.as_str()))
            else {
                tracing::warn!("library entry without a resolvable anime; skipping");
                continue;
            };
            entries.push(WatchedEntry {
                title: resource.attributes.canonical_title.clone(),
                airing_status: resource
                    .attributes
                    .status
                    .as_deref()
                    .map(AiringStatus::from_kitsu)
                    .unwrap_or(AiringStatus::Unknown),
            });
        }
        Ok(entries)
    }
}

async fn api_error(response: reqwest::Response) -> AnimeListError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    AnimeListError::Api { status, message }
}

#[derive(Deserialize)]
struct ResourceList {
    data: Vec<ResourceId>,
}

#[derive(Deserialize)]
struct ResourceId {
    id: String,
}

#[derive(Deserialize)]
struct LibraryPage {
    data: Vec<LibraryEntry>,
    #[serde(default)]
    included: Vec<AnimeResource>,
}

#[derive(Deserialize)]
struct LibraryEntry {
    relationships: LibraryRelationships,
}

#[derive(Deserialize)]
struct LibraryRelationships {
    anime: Relationship,
}

#[derive(Deserialize)]
struct Relationship {
    #[serde(default)]
    data: Option<ResourceId>,
}

#[derive(Deserialize)]
struct AnimeResource {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    attributes: AnimeAttributes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnimeAttributes {
    canonical_title: String,
    #[serde(default)]
    status: Option<String>,
}

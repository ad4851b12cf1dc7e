//! The discovery polling loop.

use super::{DedupEngine, DiscoveryOutcome};
use crate::animelist::{AnimeListClient, WatchedEntry};
use crate::config::DiscoveryConfig;
use crate::downloads::{AddTorrent, DownloadError, QBittorrentClient};
use crate::search::{NyaaClient, CATEGORY_ANIME_ENGLISH};
use aniforge_parser::search_key;
use anyhow::{Context, Result};

/// Ties the three collaborators together: watch list in, search in the
/// middle, download client out.
pub struct Controller {
    config: DiscoveryConfig,
    animelist: Box<dyn AnimeListClient>,
    search: NyaaClient,
    downloads: QBittorrentClient,
    engine: DedupEngine,
}

impl Controller {
    pub fn new(
        config: DiscoveryConfig,
        animelist: Box<dyn AnimeListClient>,
        search: NyaaClient,
        downloads: QBittorrentClient,
    ) -> Self {
        let engine = DedupEngine::new(config.tag_namespace.clone());
        Self {
            config,
            animelist,
            search,
            downloads,
            engine,
        }
    }

    /// Run discovery forever: one pass immediately, then one per poll
    /// interval. Failed passes are logged and the loop carries on.
    pub async fn start(&self) -> Result<()> {
        tracing::info!(
            "starting discovery loop with poll frequency {:?}",
            self.config.poll_frequency()
        );
        let mut ticker = tokio::time::interval(self.config.poll_frequency());
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(err) = self.run_once().await {
                tracing::error!("discovery pass failed: {err:#}");
            }
        }
    }

    /// One discovery pass over every watched entry.
    pub async fn run_once(&self) -> Result<()> {
        tracing::info!("discovery started");
        let entries = self
            .animelist
            .currently_watching()
            .await
            .context("fetching watch list")?;
        tracing::info!("processing {} watched entries", entries.len());

        let mut added = 0usize;
        for entry in &entries {
            match self.digest_entry(entry).await {
                Ok(true) => added += 1,
                Ok(false) => {}
                // Bad credentials poison every later entry; stop the pass.
                Err(err) if is_auth_error(&err) => {
                    return Err(err.context(format!("digesting entry '{}'", entry.title)));
                }
                Err(err) => {
                    tracing::warn!(entry = %entry.title, "entry skipped: {err:#}");
                }
            }
        }
        if added > 0 {
            tracing::info!("added {added} torrents");
        }
        Ok(())
    }

    /// Search, decide, and possibly add one torrent for one entry.
    /// Returns whether a torrent was added.
    async fn digest_entry(&self, entry: &WatchedEntry) -> Result<bool> {
        let mut queries = vec![search_key(&entry.title).to_string()];
        if !self.config.sources.is_empty() {
            queries.push(format!("({})", self.config.sources.join("|")));
        }
        if !self.config.qualities.is_empty() {
            queries.push(format!("({})", self.config.qualities.join("|")));
        }

        let candidates = self
            .search
            .list(CATEGORY_ANIME_ENGLISH, &queries)
            .await
            .context("searching releases")?;
        tracing::debug!(entry = %entry.title, "found {} candidate releases", candidates.len());

        match self.engine.decide(entry, &candidates, &self.downloads).await? {
            DiscoveryOutcome::NoCandidates => {
                tracing::debug!(entry = %entry.title, "no suitable release this cycle");
                Ok(false)
            }
            DiscoveryOutcome::AlreadySatisfied => Ok(false),
            DiscoveryOutcome::Selected { release, key } => {
                let save_path = if self.config.create_show_folder {
                    format!("{}/{}", self.config.download_path, entry.title)
                } else {
                    self.config.download_path.clone()
                };
                self.downloads
                    .add(&AddTorrent {
                        urls: vec![release.link.clone()],
                        save_path: save_path.clone(),
                        category: self.config.category.clone(),
                        tags: key.tags().map(str::to_string).to_vec(),
                    })
                    .await
                    .context("adding torrent")?;
                tracing::info!(
                    entry = %entry.title,
                    save_path,
                    "torrent '{}' added",
                    release.title
                );
                Ok(true)
            }
        }
    }
}

fn is_auth_error(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<DownloadError>(),
        Some(DownloadError::Unauthorized)
    )
}

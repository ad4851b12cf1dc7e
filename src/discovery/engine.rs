//! Episode deduplication: decides whether a discovered release is new.

use crate::animelist::{AiringStatus, WatchedEntry};
use crate::search::CandidateRelease;
use aniforge_parser::{Classifier, ClassifierConfig};
use async_trait::async_trait;

/// The identity under which a download is recognized on later passes.
///
/// Two releases are duplicates of the same unit of content exactly when
/// their keys are equal: same namespace marker, same watched-entry
/// title, same `S{season}E{episode}` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DownloadTagKey {
    namespace: String,
    entry_title: String,
    episode_tag: String,
}

impl DownloadTagKey {
    pub fn new(namespace: &str, entry_title: &str, season: &str, episode: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            entry_title: entry_title.to_string(),
            episode_tag: format!("S{season}E{episode}"),
        }
    }

    /// The three tags attached to the download, in order.
    pub fn tags(&self) -> [&str; 3] {
        [&self.namespace, &self.entry_title, &self.episode_tag]
    }

    pub fn episode_tag(&self) -> &str {
        &self.episode_tag
    }
}

impl std::fmt::Display for DownloadTagKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.namespace, self.entry_title, self.episode_tag
        )
    }
}

/// Lookup over downloads that already exist on the download client.
#[async_trait]
pub trait ExistingDownloads: Send + Sync {
    /// Whether a download tagged with `key` already exists. Failures
    /// propagate verbatim; the engine never guesses a decision.
    async fn contains(&self, key: &DownloadTagKey) -> anyhow::Result<bool>;
}

/// Result of one decision pass over one watched entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// No candidate was eligible this cycle.
    NoCandidates,
    /// The best eligible candidate is already downloaded.
    AlreadySatisfied,
    /// Fetch this release and tag it with this key.
    Selected {
        release: CandidateRelease,
        key: DownloadTagKey,
    },
}

/// Selects at most one release to fetch for a watched entry.
///
/// Holds no state across calls; safe to share between entries.
pub struct DedupEngine {
    classifier: Classifier,
    namespace: String,
}

impl DedupEngine {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_parser(namespace, ClassifierConfig::default())
    }

    /// An engine whose tag keys are rendered with the given parser
    /// configuration instead of the defaults.
    pub fn with_parser(namespace: impl Into<String>, parser: ClassifierConfig) -> Self {
        Self {
            classifier: Classifier::new(parser),
            namespace: namespace.into(),
        }
    }

    /// Decide for one entry over candidates in provider-ranking order.
    ///
    /// Multi-episode releases are skipped while the entry is airing: a
    /// batch grabbed mid-season would re-download future episodes. The
    /// first candidate that survives the skip decides the outcome; later
    /// candidates are the same or worse copies under the ranking, so
    /// once the key exists the entry is already satisfied. If every
    /// candidate was skipped there is nothing suitable this cycle — a
    /// skipped candidate is never selected as a fallback.
    pub async fn decide(
        &self,
        entry: &WatchedEntry,
        candidates: &[CandidateRelease],
        existing: &dyn ExistingDownloads,
    ) -> anyhow::Result<DiscoveryOutcome> {
        for release in candidates {
            let parsed = self.classifier.classify(&release.title);
            if parsed.is_multi_episode && entry.airing_status == AiringStatus::Airing {
                tracing::debug!(
                    entry = %entry.title,
                    release = %release.title,
                    "skipping multi-episode release for an airing show"
                );
                continue;
            }

            let key = DownloadTagKey::new(
                &self.namespace,
                &entry.title,
                &parsed.season,
                &parsed.episode,
            );
            return if existing.contains(&key).await? {
                tracing::debug!(
                    entry = %entry.title,
                    tag = key.episode_tag(),
                    "already downloaded"
                );
                Ok(DiscoveryOutcome::AlreadySatisfied)
            } else {
                Ok(DiscoveryOutcome::Selected {
                    release: release.clone(),
                    key,
                })
            };
        }
        Ok(DiscoveryOutcome::NoCandidates)
    }
}

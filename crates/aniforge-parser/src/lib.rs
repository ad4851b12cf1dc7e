//! # aniforge-parser
//!
//! A parser for anime release titles as found on public torrent indexes.
//!
//! Release titles are wildly inconsistent: bracketed group tags, season
//! markers in half a dozen notations, episode numbers glued to codec
//! tokens. This crate decomposes one raw title into a [`ParsedTitle`]
//! with a normalized title, a season, an episode (or episode range) and
//! a multi-episode flag, deterministically and without any I/O.
//!
//! ## Quick Start
//!
//! ```
//! use aniforge_parser::classify;
//!
//! let parsed = classify("[SubsPlease] Frieren S02E15 (1080p)");
//!
//! assert_eq!(parsed.source.as_deref(), Some("SubsPlease"));
//! assert_eq!(parsed.clean_title, "Frieren S02E15");
//! assert_eq!(parsed.season, "02");
//! assert_eq!(parsed.episode, "15");
//! assert!(!parsed.is_multi_episode);
//! ```
//!
//! ## Configurable classification
//!
//! ```
//! use aniforge_parser::{Classifier, ClassifierConfig};
//!
//! let config = ClassifierConfig {
//!     default_number: "00".to_string(),
//!     min_digits: 2,
//! };
//! let classifier = Classifier::new(config);
//! let parsed = classifier.classify("Frieren - 5");
//! assert_eq!(parsed.episode, "05");
//! ```

pub mod config;
pub mod model;
pub mod normalize;
pub mod rules;

pub use config::ClassifierConfig;
pub use model::ParsedTitle;
pub use normalize::search_key;
pub use rules::{extract_episode, extract_season};

/// Classify a release title using default settings.
///
/// This is the simplest way to parse a title. For control over the
/// rendering defaults, use [`Classifier`] with a [`ClassifierConfig`].
pub fn classify(raw: &str) -> ParsedTitle {
    Classifier::default().classify(raw)
}

/// A configurable release-title classifier.
///
/// Composes the title normalizer with the season and episode rule lists
/// and renders the result as a [`ParsedTitle`]. Classification is a pure
/// function of the input string: the same title always produces the same
/// value.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Create a classifier with the given rendering configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Decompose a raw release title into structured metadata.
    ///
    /// Never fails: titles with no recognizable season or episode get the
    /// configured default number and, for a missing episode, the
    /// multi-episode flag (no explicit episode means a batch or season
    /// pack, not episode zero).
    pub fn classify(&self, raw: &str) -> ParsedTitle {
        let (source, tags) = normalize::bracket_groups(raw);
        let clean_title = normalize::clean(raw);
        let (episode, is_multi_episode) = rules::extract_episode(&clean_title);
        let season = rules::extract_season(&clean_title);

        ParsedTitle {
            source,
            season: self.config.render(&season),
            episode: self.config.render(&episode),
            is_multi_episode,
            clean_title,
            tags,
        }
    }
}

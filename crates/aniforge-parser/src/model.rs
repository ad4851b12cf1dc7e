//! Structured decomposition of a release title.

/// Structured metadata extracted from one raw release title.
///
/// Produced by [`Classifier::classify`](crate::Classifier::classify);
/// never mutated afterwards. Season and episode are rendered decimal
/// strings (zero-padded to the configured width, `"00"` when
/// undetermined); an episode range is rendered as `"start~end"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedTitle {
    /// Release group or source token from the first bracketed group.
    pub source: Option<String>,
    /// Title with every bracketed and parenthesized span removed and
    /// whitespace runs collapsed.
    pub clean_title: String,
    /// Season number, or the configured default when undetermined.
    pub season: String,
    /// Episode number, `"start~end"` range, or the configured default.
    pub episode: String,
    /// True for ranges, season packs, and titles with no explicit
    /// episode number.
    pub is_multi_episode: bool,
    /// Bracketed groups after the first, in order of appearance.
    pub tags: Vec<String>,
}

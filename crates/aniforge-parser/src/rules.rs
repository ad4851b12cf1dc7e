//! Ordered pattern rules for season and episode extraction.
//!
//! Real-world release titles overload bare numbers: `15` may be an
//! episode, a season, half of a resolution or part of a codec tag.
//! Each extractor walks an explicit priority-ordered rule list and stops
//! at the first rule that matches anywhere in the title, so the policy
//! for resolving those ambiguities is a reorderable list rather than
//! regex fallthrough.

use regex::Regex;
use std::sync::LazyLock;

/// One pattern rule: a named regular expression with a single numeric
/// capture group.
pub struct PatternRule {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
}

impl PatternRule {
    /// Collect every capture of this rule in `text`, parsed as base-10
    /// integers. Fractional captures like `6.5` floor to their integer
    /// part. Returns `None` when the rule matches nowhere.
    pub fn try_match(&self, text: &str) -> Option<Vec<u64>> {
        let numbers: Vec<u64> = self
            .pattern
            .captures_iter(text)
            .filter_map(|captures| parse_number(&captures[1]))
            .collect();
        if numbers.is_empty() {
            None
        } else {
            Some(numbers)
        }
    }

    /// Rule name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

fn parse_number(capture: &str) -> Option<u64> {
    let integer = capture.split('.').next().unwrap_or(capture);
    integer.parse().ok()
}

// A number capture: `15`, or `6.5` for mid-season specials.
const NUMBER: &str = r"(\d+(?:\.\d+)?)";

static EPISODE_NXM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\d+x{NUMBER}")).expect("episode NxM pattern"));

static EPISODE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)e{NUMBER}")).expect("episode marker pattern"));

// A number standing on its own after whitespace, as in "Frieren - 15".
// The leading class keeps it from firing inside the word "season", and
// the trailing boundary rejects glued tokens like "1080p".
static EPISODE_STANDALONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)[^season]\s{NUMBER}(?:\W|$)")).expect("standalone episode pattern")
});

static SEASON_ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)(?:st|nd|rd|th)\s+season").expect("ordinal season pattern")
});

static SEASON_NXM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)x\d+").expect("season NxM pattern"));

static SEASON_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)s(\d+)e\d+").expect("season marker pattern"));

static SEASON_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)season\s+(\d+)").expect("literal season pattern"));

/// Episode rules in priority order. The explicit `E13`-style marker
/// outranks standalone numbers so that a codec token such as `H 264`
/// never shadows an episode marker found elsewhere in the title.
static EPISODE_RULES: [PatternRule; 3] = [
    PatternRule {
        name: "NxM",
        pattern: &EPISODE_NXM,
    },
    PatternRule {
        name: "episode marker",
        pattern: &EPISODE_MARKER,
    },
    PatternRule {
        name: "standalone number",
        pattern: &EPISODE_STANDALONE,
    },
];

/// Season rules in priority order.
static SEASON_RULES: [PatternRule; 4] = [
    PatternRule {
        name: "ordinal season",
        pattern: &SEASON_ORDINAL,
    },
    PatternRule {
        name: "NxM",
        pattern: &SEASON_NXM,
    },
    PatternRule {
        name: "season marker",
        pattern: &SEASON_MARKER,
    },
    PatternRule {
        name: "literal season",
        pattern: &SEASON_LITERAL,
    },
];

/// Extract an episode number from a cleaned title.
///
/// The first matching rule wins. One capture yields a single episode and
/// `false`; two or more captures yield a `"start~end"` range and `true`.
/// No match yields `("", true)`: a title without an explicit episode is
/// a batch or season release, not episode zero.
pub fn extract_episode(clean_title: &str) -> (String, bool) {
    for rule in &EPISODE_RULES {
        let Some(numbers) = rule.try_match(clean_title) else {
            continue;
        };
        return match numbers.as_slice() {
            [episode] => (episode.to_string(), false),
            [start, end, ..] => (format!("{start}~{end}"), true),
            [] => unreachable!("try_match never returns an empty capture set"),
        };
    }
    (String::new(), true)
}

/// Extract a season number from a cleaned title, or `""` when no rule
/// matches.
pub fn extract_season(clean_title: &str) -> String {
    for rule in &SEASON_RULES {
        if let Some(numbers) = rule.try_match(clean_title) {
            return numbers[0].to_string();
        }
    }
    String::new()
}

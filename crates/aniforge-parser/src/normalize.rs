//! Title normalization: annotation stripping and search keys.

use regex::Regex;
use std::sync::LazyLock;

/// Any `[...]` or `(...)` span, non-greedy, non-nested.
static ANNOTATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]|\(.*?\)").expect("annotation pattern"));

/// Content of a `[...]` group.
static BRACKET_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]").expect("bracket group pattern"));

/// Strip bracketed and parenthesized annotations from a raw title.
///
/// Removes every `[...]` and `(...)` span, trims the result and
/// collapses internal whitespace runs to single spaces. Always succeeds;
/// an empty input yields an empty output.
pub fn clean(raw: &str) -> String {
    let stripped = ANNOTATIONS.replace_all(raw, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a display title at its first colon.
///
/// Anime list providers often carry long subtitles after a colon
/// ("Frieren: Beyond Journey's End"); torrent indexes usually don't.
/// The prefix makes a provider-agnostic search query.
pub fn search_key(title: &str) -> &str {
    match title.split_once(':') {
        Some((key, _)) => key,
        None => title,
    }
}

/// Extract the bracketed groups of a raw title: the first is the
/// release-group/source token, the rest are kept as ordered tags.
pub fn bracket_groups(raw: &str) -> (Option<String>, Vec<String>) {
    let mut groups = BRACKET_GROUP
        .captures_iter(raw)
        .map(|captures| captures[1].to_string());
    let source = groups.next();
    (source, groups.collect())
}

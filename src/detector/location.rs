use std::sync::LazyLock;

use regex::Regex;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid punctuation regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Shortest token that counts as a shared city/state/country word.
const MIN_SHARED_TOKEN_CHARS: usize = 3;

/// Decide whether two free-text locations refer to the same place.
///
/// Biased toward "match": missing data never counts as a mismatch, and any
/// containment or shared word longer than two characters is enough. Unrelated
/// places that share a common word ("San Jose" / "San Diego") will match.
pub fn locations_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return true;
    }

    let a = normalize_location(a);
    let b = normalize_location(b);

    if a.contains(&b) || b.contains(&a) {
        return true;
    }

    let b_tokens: Vec<&str> = b.split(' ').collect();
    a.split(' ')
        .any(|word| word.chars().count() >= MIN_SHARED_TOKEN_CHARS && b_tokens.contains(&word))
}

/// Lowercase, strip punctuation, collapse whitespace.
pub fn normalize_location(location: &str) -> String {
    let lower = location.to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lower, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

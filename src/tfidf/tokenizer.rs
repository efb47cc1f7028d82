use once_cell::sync::Lazy;
use regex::Regex;

/// Matches maximal runs of Unicode letters and digits.
static TERM_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").unwrap());

/// Splits raw text into normalized index terms.
///
/// The whole text is lowercased, then every maximal alphanumeric run becomes
/// one term, in order of appearance. Duplicates are kept; punctuation and
/// whitespace only ever separate terms. No stop-word removal and no stemming
/// are applied, so the vocabulary stays a deterministic function of the input
/// alone. Any string is valid input; empty or punctuation-only text yields an
/// empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TERM_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").unwrap());

/// Common English words carrying no relevance signal.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was",
    "one", "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now",
    "old", "see", "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she",
    "too", "use", "with", "have", "this", "will", "your", "from", "they", "know", "want",
    "been", "good", "much", "some", "time", "very", "when", "come", "here", "just", "like",
    "long", "make", "many", "over", "such", "take", "than", "them", "well", "were",
];

/// Lowercase alphabetic tokens of length >= 3, stop words removed. Pure and
/// order-free; identical text always yields the identical set.
pub fn keywords(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_dedups() {
        let kw = keywords("Parsing parsing PARSING");
        assert_eq!(kw.len(), 1);
        assert!(kw.contains("parsing"));
    }

    #[test]
    fn short_tokens_dropped() {
        let kw = keywords("an ox ran far");
        assert_eq!(kw, HashSet::from(["ran".to_string(), "far".to_string()]));
    }

    #[test]
    fn stop_words_removed() {
        let kw = keywords("the results were very good for them");
        assert_eq!(kw, HashSet::from(["results".to_string()]));
    }

    #[test]
    fn non_alphabetic_tokens_ignored() {
        let kw = keywords("roi2024 42 growth-rate");
        assert!(kw.contains("growth"));
        assert!(kw.contains("rate"));
        assert!(!kw.contains("roi2024"));
    }

    #[test]
    fn deterministic() {
        assert_eq!(keywords("hypothesis and data"), keywords("hypothesis and data"));
    }
}

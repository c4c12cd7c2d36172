//! Keyword extraction: tokens plus 2- and 3-word phrases

use crate::processing::skills::NormalizedKeywords;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Everything except letters, digits, whitespace and `. - + # /`.
/// Those symbols carry skill names such as `C#`, `CI/CD` and `Node.js`.
static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{Alphabetic}\p{N}\s.+#/\-]").expect("Invalid keyword filter regex")
});

/// Tokens shorter than this are dropped; two-letter skills like `go` survive.
const MIN_TOKEN_CHARS: usize = 2;

/// Deduplicated lowercase tokens and phrases derived from a text blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    keywords: HashSet<String>,
}

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Normalize every entry for skill matching.
    pub fn normalized(&self) -> NormalizedKeywords {
        NormalizedKeywords::from_keywords(self.iter())
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            keywords: iter.into_iter().collect(),
        }
    }
}

/// Extract unigrams, bigrams and trigrams from free text.
///
/// Missing or empty text yields an empty set.
pub fn extract_keywords<'a>(text: impl Into<Option<&'a str>>) -> KeywordSet {
    let text = match text.into() {
        Some(text) if !text.is_empty() => text,
        _ => return KeywordSet::default(),
    };

    let tokens = tokenize(text);

    let bigrams = tokens.windows(2).map(|pair| pair.join(" "));
    let trigrams = tokens.windows(3).map(|triple| triple.join(" "));

    bigrams
        .chain(trigrams)
        .chain(tokens.iter().cloned())
        .collect()
}

/// Lowercase, replace disallowed characters with spaces, split on whitespace
/// and drop very short tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = DISALLOWED_CHARS.replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Raw word count of the literal text, split on whitespace.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_missing_text() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords(None::<&str>).is_empty());
    }

    #[test]
    fn test_ngrams() {
        let keywords = extract_keywords("alpha beta gamma");

        for expected in ["alpha", "beta", "gamma", "alpha beta", "beta gamma", "alpha beta gamma"] {
            assert!(keywords.contains(expected), "missing {expected}");
        }
        assert_eq!(keywords.len(), 6);
    }

    #[test]
    fn test_skill_symbols_survive() {
        let keywords = extract_keywords("Experts in C#, CI/CD and Node.js (required)!");

        assert!(keywords.contains("c#"));
        assert!(keywords.contains("ci/cd"));
        assert!(keywords.contains("node.js"));
        assert!(keywords.contains("required"));
        assert!(!keywords.iter().any(|k| k.contains('(') || k.contains(',')));
    }

    #[test]
    fn test_short_tokens_dropped() {
        let tokens = tokenize("I know Go and R a lot");

        assert_eq!(tokens, vec!["know", "go", "and", "lot"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let keywords = extract_keywords("rust rust rust");

        assert_eq!(keywords.len(), 3); // "rust", "rust rust", "rust rust rust"
    }

    #[test]
    fn test_unusual_unicode_does_not_panic() {
        let text = "Développeur 🚀 Rust — naïve façade ✓ 数据库 \u{200B}";
        let keywords = extract_keywords(text);

        assert!(keywords.contains("développeur"));
        assert!(keywords.contains("rust"));
        assert!(keywords.contains("数据库"));
    }

    #[test]
    fn test_word_count_uses_raw_text() {
        assert_eq!(word_count("  one\ttwo\n\nthree  "), 3);
        assert_eq!(word_count(""), 0);
    }
}

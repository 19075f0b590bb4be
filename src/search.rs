//! Fuzzy search for filtering tables and lists.
//!
//! Wraps the matcher implementation behind a small interface so it can be
//! swapped without touching the screens.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// A matcher for fuzzy searching text.
pub struct Matcher {
    inner: SkimMatcherV2,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            inner: SkimMatcherV2::default(),
        }
    }

    /// Case-insensitive fuzzy match; non-consecutive characters allowed.
    pub fn matches(&self, text: &str, pattern: &str) -> bool {
        let pattern_lower = pattern.to_lowercase();
        self.inner.fuzzy_match(text, &pattern_lower).is_some()
    }

    /// Check if any of the provided texts match the pattern.
    pub fn matches_any<'a>(&self, texts: impl IntoIterator<Item = &'a str>, pattern: &str) -> bool {
        texts.into_iter().any(|text| self.matches(text, pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_match_over_service_names() {
        let matcher = Matcher::new();
        assert!(matcher.matches("Accommodations", "accom"));
        assert!(matcher.matches("Travel Companion", "tvlc"));
        assert!(matcher.matches("FREE ITEMS", "free"));
        assert!(!matcher.matches("Rides", "xyz"));
    }

    #[test]
    fn matches_any_over_multiple_fields() {
        let matcher = Matcher::new();
        let fields = ["Deals", "Exclusive deals and offers from partners"];
        assert!(matcher.matches_any(fields, "offers"));
        assert!(!matcher.matches_any(fields, "housing"));
    }
}

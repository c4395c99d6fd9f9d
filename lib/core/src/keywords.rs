// Query keyword extraction
use ahash::AHashSet;
use serde::Serialize;
use crate::semantic::SemanticTable;

/// Tokens must be at least this many characters to count as keywords.
pub const DEFAULT_MIN_KEYWORD_LEN: usize = 3;

/// De-duplicated lowercase search terms derived from one query.
///
/// Literal tokens come first in query order, followed by canonical keys
/// activated through the semantic table. Order only matters for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Extract keywords from `query`.
    ///
    /// Splits the lowercased query on whitespace, keeps tokens of at least
    /// `min_len` characters, then adds every canonical key whose synonyms
    /// occur anywhere in the lowercased query.
    pub fn extract(query: &str, table: &SemanticTable, min_len: usize) -> Self {
        let lowered = query.to_lowercase();
        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut keywords = Vec::new();

        let literals = lowered
            .split_whitespace()
            .filter(|token| token.chars().count() >= min_len);

        for keyword in literals.chain(table.expand(&lowered)) {
            if seen.insert(keyword) {
                keywords.push(keyword.to_string());
            }
        }

        Self { keywords }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keywords.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(query: &str) -> KeywordSet {
        KeywordSet::extract(query, &SemanticTable::builtin(), DEFAULT_MIN_KEYWORD_LEN)
    }

    #[test]
    fn test_short_tokens_dropped() {
        let keywords = extract("a set of kurtas");
        assert_eq!(keywords.as_slice(), &["set", "kurtas", "kurta"]);
    }

    #[test]
    fn test_duplicates_collapsed() {
        let keywords = extract("dress dress DRESS");
        assert_eq!(keywords.as_slice(), &["dress"]);
    }

    #[test]
    fn test_synonym_adds_canonical_key() {
        let keywords = extract("gown");
        assert!(keywords.contains("gown"));
        assert!(keywords.contains("dress"));
        assert_eq!(keywords.len(), 2);
    }

    #[test]
    fn test_only_short_tokens_is_empty() {
        assert!(extract("a of to").is_empty());
        assert!(extract("   ").is_empty());
    }

    #[test]
    fn test_short_token_can_still_expand() {
        // "to" is too short to keep but nothing in the table contains it;
        // "top" is three characters and a kurta synonym.
        let keywords = extract("to top");
        assert_eq!(keywords.as_slice(), &["top", "kurta"]);
    }

    #[test]
    fn test_length_counts_characters() {
        let keywords = extract("été ok");
        assert_eq!(keywords.as_slice(), &["été"]);
    }

    #[test]
    fn test_custom_min_len() {
        let keywords = KeywordSet::extract("ab silk", &SemanticTable::new(Vec::new()), 2);
        assert_eq!(keywords.as_slice(), &["ab", "silk"]);
    }
}

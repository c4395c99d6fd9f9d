//! Semantic mapping table
//!
//! Maps a canonical keyword to the synonyms that activate it. A query that
//! contains any synonym as a plain substring gains the canonical keyword, so
//! "gown" also searches for "dress". Containment is deliberately loose:
//! "red" is found inside "bored".

use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Built-in storefront vocabulary: materials, colors, styles, occasions and
/// general terms.
pub const BUILTIN_MAPPINGS: &[(&str, &[&str])] = &[
    // Materials
    ("cotton", &["cotton", "natural", "breathable", "organic"]),
    ("silk", &["silk", "luxury", "smooth", "satin"]),
    ("linen", &["linen", "natural", "breathable"]),
    // Colors
    ("blue", &["blue", "navy", "azure", "cobalt", "sapphire"]),
    ("red", &["red", "maroon", "burgundy", "crimson", "scarlet"]),
    ("green", &["green", "emerald", "olive", "mint"]),
    ("gold", &["gold", "golden", "amber", "yellow"]),
    ("white", &["white", "ivory", "cream", "beige", "off-white"]),
    ("black", &["black", "ebony", "charcoal"]),
    // Styles
    ("dress", &["dress", "gown", "frock"]),
    ("kurta", &["kurta", "tunic", "top"]),
    ("sari", &["sari", "saree"]),
    ("lehenga", &["lehenga", "skirt"]),
    ("embroidery", &["embroidery", "embroidered", "stitching", "threadwork"]),
    // Occasions
    ("evening", &["evening", "night", "dinner", "formal", "gala"]),
    ("casual", &["casual", "everyday", "comfortable", "daywear"]),
    ("bridal", &["bridal", "wedding", "bridalwear", "marriage"]),
    ("resort", &["resort", "vacation", "beach", "holiday"]),
    ("formal", &["formal", "professional", "business"]),
    // General terms
    ("elegant", &["elegant", "sophisticated", "refined"]),
    ("luxury", &["luxury", "premium", "high-end", "opulent"]),
    ("sustainable", &["sustainable", "eco-friendly", "organic", "eco"]),
];

/// One canonical keyword and its synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticEntry {
    pub key: String,
    pub synonyms: Vec<String>,
}

impl SemanticEntry {
    pub fn new<I, S>(key: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            synonyms: synonyms.into_iter().map(Into::into).collect(),
        }
    }

    /// True if `lowered_query` contains any synonym as a substring.
    #[inline]
    pub fn activated_by(&self, lowered_query: &str) -> bool {
        self.synonyms.iter().any(|syn| lowered_query.contains(syn.as_str()))
    }
}

/// Immutable table of semantic entries, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticTable {
    entries: Vec<SemanticEntry>,
}

static BUILTIN: OnceLock<Arc<SemanticTable>> = OnceLock::new();

impl SemanticTable {
    /// Build a table from entries. Keys and synonyms are lowercased so they
    /// can be compared against a lowercased query.
    pub fn new(entries: Vec<SemanticEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| SemanticEntry {
                key: e.key.to_lowercase(),
                synonyms: e.synonyms.iter().map(|s| s.to_lowercase()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// The process-wide built-in table, created on first use.
    pub fn builtin() -> Arc<SemanticTable> {
        BUILTIN
            .get_or_init(|| {
                Arc::new(Self::new(
                    BUILTIN_MAPPINGS
                        .iter()
                        .map(|(key, synonyms)| SemanticEntry::new(*key, synonyms.iter().copied()))
                        .collect(),
                ))
            })
            .clone()
    }

    pub fn entries(&self) -> &[SemanticEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&SemanticEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Canonical keys activated by `lowered_query`, in table order.
    pub fn expand<'a>(&'a self, lowered_query: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.activated_by(lowered_query))
            .map(|e| e.key.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SemanticTable {
    fn default() -> Self {
        Self::builtin().as_ref().clone()
    }
}

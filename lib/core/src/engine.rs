use serde::Serialize;
use std::cmp::Reverse;
use std::sync::Arc;
use crate::config::EngineConfig;
use crate::entity::{Brand, Product};
use crate::explain::{Explained, Explanation};
use crate::keywords::KeywordSet;
use crate::scoring::{ScoreWeights, Scored};
use crate::semantic::SemanticTable;
use crate::Result;

/// Ranked hits for one query, borrowing the caller's catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    pub products: Vec<&'a Product>,
    pub brands: Vec<&'a Brand>,
}

impl<'a> SearchResults<'a> {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.brands.is_empty()
    }
}

impl<'a> From<Explanation<'a>> for SearchResults<'a> {
    fn from(explanation: Explanation<'a>) -> Self {
        Self {
            products: explanation.products.into_iter().map(|e| e.item).collect(),
            brands: explanation.brands.into_iter().map(|e| e.item).collect(),
        }
    }
}

/// Keyword search over brands and products.
///
/// Holds only immutable configuration, so one engine can serve any number of
/// threads searching immutable catalog snapshots.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    table: Arc<SemanticTable>,
    weights: ScoreWeights,
    min_keyword_len: usize,
}

impl SearchEngine {
    /// Build an engine from a validated config.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let table = match config.semantic {
            Some(entries) => Arc::new(SemanticTable::new(entries)),
            None => SemanticTable::builtin(),
        };
        Ok(Self {
            table,
            weights: config.weights,
            min_keyword_len: config.min_keyword_len,
        })
    }

    pub fn semantic_table(&self) -> &SemanticTable {
        &self.table
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Keywords a query expands to. Empty when the query has nothing to search.
    pub fn keywords(&self, query: &str) -> KeywordSet {
        if query.trim().is_empty() {
            return KeywordSet::default();
        }
        KeywordSet::extract(query, &self.table, self.min_keyword_len)
    }

    /// Rank `products` and `brands` against `query`.
    ///
    /// Entities scoring zero are dropped; the rest are ordered by descending
    /// score, ties keeping their input order. An empty query, or one with no
    /// usable keywords, yields two empty lists.
    pub fn search<'a>(
        &self,
        query: &str,
        products: &'a [Product],
        brands: &'a [Brand],
    ) -> SearchResults<'a> {
        self.explain(query, products, brands).into()
    }

    /// Like [`search`](Self::search) but keeps scores and per-field contributions.
    pub fn explain<'a>(
        &self,
        query: &str,
        products: &'a [Product],
        brands: &'a [Brand],
    ) -> Explanation<'a> {
        let keywords = self.keywords(query);
        if keywords.is_empty() {
            return Explanation::default();
        }

        Explanation {
            products: rank(products, &keywords, &self.weights),
            brands: rank(brands, &keywords, &self.weights),
            keywords,
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            table: SemanticTable::builtin(),
            weights: ScoreWeights::default(),
            min_keyword_len: crate::keywords::DEFAULT_MIN_KEYWORD_LEN,
        }
    }
}

fn rank<'a, T: Scored>(
    items: &'a [T],
    keywords: &KeywordSet,
    weights: &ScoreWeights,
) -> Vec<Explained<'a, T>> {
    let mut ranked: Vec<Explained<'a, T>> = items
        .iter()
        .map(|item| Explained::new(item, item.field_scores(keywords, weights)))
        .filter(|e| e.score > 0)
        .collect();

    // sort_by_key is stable: equal scores keep catalog order
    ranked.sort_by_key(|e| Reverse(e.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::SemanticEntry;

    fn catalog() -> (Vec<Product>, Vec<Brand>) {
        let products = vec![
            Product::new("evening-dress-aurum", "khara-kapas", "evening-elegance", "Aurum Evening Dress", 28000.0)
                .with_tags(["evening", "dress", "gold"])
                .with_material(["silk"])
                .with_colors(["gold"])
                .with_occasions(["evening", "gala"])
                .with_styles(["gown"]),
            Product::new("cotton-kurta-elara", "khara-kapas", "daylight-cotton", "Elara Cotton Kurta", 14000.0)
                .with_tags(["cotton", "kurta", "casual"])
                .with_material(["cotton"])
                .with_colors(["white"])
                .with_occasions(["casual"])
                .with_styles(["kurta"]),
            Product::new("plain-top", "raw-mango", "silk-conservatory", "Plain Top", 9000.0),
        ];
        let brands = vec![
            Brand::new("khara-kapas", "Khara Kapas").with_tagline("Pure cotton, pure style"),
            Brand::new("raw-mango", "Raw Mango").with_tagline("Contemporary Indian design"),
        ];
        (products, brands)
    }

    fn slugs(results: &SearchResults<'_>) -> (Vec<String>, Vec<String>) {
        (
            results.products.iter().map(|p| p.slug.clone()).collect(),
            results.brands.iter().map(|b| b.slug.clone()).collect(),
        )
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let (products, brands) = catalog();
        let engine = SearchEngine::default();
        assert!(engine.search("", &products, &brands).is_empty());
        assert!(engine.search("   \t", &products, &brands).is_empty());
    }

    #[test]
    fn test_short_tokens_only_returns_nothing() {
        let (products, brands) = catalog();
        let results = SearchEngine::default().search("a b", &products, &brands);
        assert!(results.is_empty());
    }

    #[test]
    fn test_gown_finds_dress_by_synonym() {
        let (products, brands) = catalog();
        let results = SearchEngine::default().search("gown", &products, &brands);
        assert_eq!(results.products[0].slug, "evening-dress-aurum");
    }

    #[test]
    fn test_cotton_ranks_products_and_brands() {
        let (products, brands) = catalog();
        let results = SearchEngine::default().search("cotton", &products, &brands);
        let (product_slugs, brand_slugs) = slugs(&results);
        assert_eq!(product_slugs, vec!["cotton-kurta-elara"]);
        assert_eq!(brand_slugs, vec!["khara-kapas"]);
    }

    #[test]
    fn test_explain_matches_search_order() {
        let (products, brands) = catalog();
        let engine = SearchEngine::default();
        let query = "white cotton evening";
        let explanation = engine.explain(query, &products, &brands);
        let results = engine.search(query, &products, &brands);

        let explained: Vec<&str> = explanation.products.iter().map(|e| e.item.slug.as_str()).collect();
        let searched: Vec<&str> = results.products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(explained, searched);

        for hit in &explanation.products {
            assert_eq!(hit.score, hit.fields.iter().map(|(_, p)| p).sum::<u32>());
        }
        let scores: Vec<u32> = explanation.products.iter().map(|e| e.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_custom_semantic_table() {
        let (products, brands) = catalog();
        let config = EngineConfig {
            semantic: Some(vec![SemanticEntry::new("kurta", ["jama"])]),
            ..EngineConfig::default()
        };
        let engine = SearchEngine::new(config).unwrap();

        let results = engine.search("jama", &products, &brands);
        assert_eq!(results.products.len(), 1);
        assert_eq!(results.products[0].slug, "cotton-kurta-elara");

        // built-in synonyms are gone
        let keywords = engine.keywords("gown");
        assert_eq!(keywords.as_slice(), &["gown"]);
    }

    #[test]
    fn test_large_weights_do_not_panic() {
        let mut config = EngineConfig::default();
        config.weights.product.name = 1 << 31;
        let engine = SearchEngine::new(config).unwrap();

        let products = vec![Product::new("silk-sari", "b", "c", "Silk Sari", 1000.0)];
        let explanation = engine.explain("silk sari", &products, &[]);
        assert_eq!(explanation.products.len(), 1);
        assert_eq!(explanation.products[0].score, u32::MAX);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            min_keyword_len: 0,
            ..EngineConfig::default()
        };
        assert!(SearchEngine::new(config).is_err());
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchEngine>();
    }
}

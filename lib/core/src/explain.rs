//! Explained search results
//!
//! Same filtering and ordering as [`SearchEngine::search`](crate::SearchEngine::search),
//! with the total score and per-field contributions kept for each hit.

use serde::Serialize;
use crate::entity::{Brand, Product};
use crate::keywords::KeywordSet;
use crate::scoring::FieldScores;

/// One ranked entity with its score breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct Explained<'a, T> {
    pub item: &'a T,
    pub score: u32,
    pub fields: FieldScores,
}

impl<'a, T> Explained<'a, T> {
    pub(crate) fn new(item: &'a T, fields: FieldScores) -> Self {
        Self {
            item,
            score: fields.total(),
            fields,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Explanation<'a> {
    pub keywords: KeywordSet,
    pub products: Vec<Explained<'a, Product>>,
    pub brands: Vec<Explained<'a, Brand>>,
}

impl<'a> Explanation<'a> {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.brands.is_empty()
    }

    pub fn product_scores(&self) -> Vec<(&str, u32)> {
        self.products
            .iter()
            .map(|e| (e.item.slug.as_str(), e.score))
            .collect()
    }

    pub fn brand_scores(&self) -> Vec<(&str, u32)> {
        self.brands
            .iter()
            .map(|e| (e.item.slug.as_str(), e.score))
            .collect()
    }
}

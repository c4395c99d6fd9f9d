//! Field-weighted relevance scoring
//!
//! Every keyword is checked against every field independently and each
//! matching field adds its weight, so one keyword can score several times on
//! the same entity. Name and tagline use plain substring containment on the
//! lowercased text; attribute lists use bidirectional containment against
//! the values as stored.

use serde::{Deserialize, Serialize};
use crate::entity::{Brand, Product};
use crate::keywords::KeywordSet;

pub const NAME_WEIGHT: u32 = 3;
pub const TAG_WEIGHT: u32 = 2;
pub const MATERIAL_WEIGHT: u32 = 4;
pub const COLOR_WEIGHT: u32 = 4;
pub const OCCASION_WEIGHT: u32 = 3;
pub const STYLE_WEIGHT: u32 = 3;

pub const BRAND_NAME_WEIGHT: u32 = 3;
pub const TAGLINE_WEIGHT: u32 = 2;
pub const BRAND_TAG_WEIGHT: u32 = 2;

/// Per-field product weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductWeights {
    pub name: u32,
    pub tags: u32,
    pub material: u32,
    pub colors: u32,
    pub occasions: u32,
    pub styles: u32,
}

impl Default for ProductWeights {
    fn default() -> Self {
        Self {
            name: NAME_WEIGHT,
            tags: TAG_WEIGHT,
            material: MATERIAL_WEIGHT,
            colors: COLOR_WEIGHT,
            occasions: OCCASION_WEIGHT,
            styles: STYLE_WEIGHT,
        }
    }
}

impl ProductWeights {
    /// Sum of all weights, or `None` if it does not fit in a `u32`.
    pub fn total(&self) -> Option<u32> {
        [self.tags, self.material, self.colors, self.occasions, self.styles]
            .into_iter()
            .try_fold(self.name, u32::checked_add)
    }
}

/// Per-field brand weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandWeights {
    pub name: u32,
    pub tagline: u32,
    pub tags: u32,
}

impl Default for BrandWeights {
    fn default() -> Self {
        Self {
            name: BRAND_NAME_WEIGHT,
            tagline: TAGLINE_WEIGHT,
            tags: BRAND_TAG_WEIGHT,
        }
    }
}

impl BrandWeights {
    /// Sum of all weights, or `None` if it does not fit in a `u32`.
    pub fn total(&self) -> Option<u32> {
        self.name.checked_add(self.tagline)?.checked_add(self.tags)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub product: ProductWeights,
    pub brand: BrandWeights,
}

/// True if any value contains `keyword` or is contained in it.
#[inline]
pub fn contains_either_way(values: &[String], keyword: &str) -> bool {
    values
        .iter()
        .any(|v| v.contains(keyword) || keyword.contains(v.as_str()))
}

/// Score contributions of one entity, per field, summed over all keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldScores {
    fields: Vec<(&'static str, u32)>,
}

impl FieldScores {
    // Saturates so oversized configured weights cannot overflow.
    fn add(&mut self, field: &'static str, points: u32) {
        if points == 0 {
            return;
        }
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, total)) => *total = total.saturating_add(points),
            None => self.fields.push((field, points)),
        }
    }

    pub fn total(&self) -> u32 {
        self.fields
            .iter()
            .fold(0u32, |sum, (_, points)| sum.saturating_add(*points))
    }

    pub fn get(&self, field: &str) -> u32 {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    /// Fields that contributed points, in the order they first matched.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.fields.iter().copied()
    }
}

/// Something the engine can rank against a keyword set.
pub trait Scored {
    fn field_scores(&self, keywords: &KeywordSet, weights: &ScoreWeights) -> FieldScores;

    fn score(&self, keywords: &KeywordSet, weights: &ScoreWeights) -> u32 {
        self.field_scores(keywords, weights).total()
    }
}

impl Scored for Product {
    fn field_scores(&self, keywords: &KeywordSet, weights: &ScoreWeights) -> FieldScores {
        let w = &weights.product;
        let name = self.name.to_lowercase();
        let mut scores = FieldScores::default();

        for keyword in keywords.iter() {
            if name.contains(keyword) {
                scores.add("name", w.name);
            }
            if contains_either_way(&self.tags, keyword) {
                scores.add("tags", w.tags);
            }
            if contains_either_way(&self.material, keyword) {
                scores.add("material", w.material);
            }
            if contains_either_way(&self.colors, keyword) {
                scores.add("colors", w.colors);
            }
            if contains_either_way(&self.occasions, keyword) {
                scores.add("occasions", w.occasions);
            }
            if contains_either_way(&self.styles, keyword) {
                scores.add("styles", w.styles);
            }
        }

        scores
    }
}

impl Scored for Brand {
    fn field_scores(&self, keywords: &KeywordSet, weights: &ScoreWeights) -> FieldScores {
        let w = &weights.brand;
        let name = self.name.to_lowercase();
        let tagline = self.tagline.as_deref().map(str::to_lowercase);
        let mut scores = FieldScores::default();

        for keyword in keywords.iter() {
            if name.contains(keyword) {
                scores.add("name", w.name);
            }
            if tagline.as_deref().is_some_and(|t| t.contains(keyword)) {
                scores.add("tagline", w.tagline);
            }
            if contains_either_way(&self.tags, keyword) {
                scores.add("tags", w.tags);
            }
        }

        scores
    }
}

//! # Qala
//!
//! Keyword and synonym search over an in-memory fashion catalog.
//!
//! A query is lowercased, split into keywords, and expanded through a fixed
//! semantic table ("gown" also searches "dress"). Every brand and product is
//! scored by which of its fields match those keywords, and the two result
//! lists come back ranked by score.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! qala "red evening gown"
//! qala --explain --catalog ./catalog.json "organic cotton"
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use qala::prelude::*;
//!
//! let catalog = Catalog::demo().unwrap();
//! let engine = SearchEngine::default();
//!
//! let results = engine.search("gown", &catalog.products, &catalog.brands);
//! assert!(results.products.iter().any(|p| p.slug == "evening-dress-aurum"));
//! ```
//!
//! ## Crate Structure
//!
//! - `qala-core` - data model, semantic table, scoring, [`SearchEngine`]
//! - `qala-catalog` - catalog loading, demo fixtures, integrity checks
//!
//! ## Scoring
//!
//! | field | weight |
//! |---|---|
//! | product name | 3 |
//! | product tags | 2 |
//! | material | 4 |
//! | colors | 4 |
//! | occasions | 3 |
//! | styles | 3 |
//! | brand name | 3 |
//! | brand tagline | 2 |
//! | brand tags | 2 |

// Re-export core types
pub use qala_core::{
    Brand, Product,
    SearchEngine, SearchResults, EngineConfig,
    Explained, Explanation,
    KeywordSet, SemanticTable, SemanticEntry,
    ScoreWeights, ProductWeights, BrandWeights, FieldScores, Scored,
    Error, Result,
};

// Re-export catalog
pub use qala_catalog::{Catalog, CatalogError, Collection};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Brand, Product,
        SearchEngine, SearchResults, EngineConfig,
        Explanation,
        KeywordSet,
        Catalog, Collection,
    };
}

/// Named scoring weights
pub mod weights {
    pub use qala_core::scoring::{
        NAME_WEIGHT, TAG_WEIGHT, MATERIAL_WEIGHT, COLOR_WEIGHT, OCCASION_WEIGHT, STYLE_WEIGHT,
        BRAND_NAME_WEIGHT, TAGLINE_WEIGHT, BRAND_TAG_WEIGHT,
    };
}

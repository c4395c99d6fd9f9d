//! # Qala Core
//!
//! Keyword search over an in-memory fashion catalog.
//!
//! This crate provides the data model and the ranking pipeline:
//!
//! - [`Brand`], [`Product`] - catalog records
//! - [`SemanticTable`] - canonical keyword to synonym expansion
//! - [`KeywordSet`] - de-duplicated keywords derived from a query
//! - [`Scored`] - field-weighted relevance scoring
//! - [`SearchEngine`] - ranks brands and products for a query
//!
//! ## Example
//!
//! ```rust
//! use qala_core::{Brand, Product, SearchEngine};
//!
//! let products = vec![
//!     Product::new("evening-dress-aurum", "khara-kapas", "evening-elegance", "Aurum Evening Dress", 28000.0)
//!         .with_tags(["evening", "dress"]),
//! ];
//! let brands = vec![Brand::new("khara-kapas", "Khara Kapas")];
//!
//! let engine = SearchEngine::default();
//! // "gown" is a synonym of "dress"
//! let results = engine.search("gown", &products, &brands);
//! assert_eq!(results.products[0].slug, "evening-dress-aurum");
//! ```

pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod explain;
pub mod keywords;
pub mod scoring;
pub mod semantic;

pub use config::EngineConfig;
pub use engine::{SearchEngine, SearchResults};
pub use entity::{Brand, Product};
pub use error::{Error, Result};
pub use explain::{Explained, Explanation};
pub use keywords::{KeywordSet, DEFAULT_MIN_KEYWORD_LEN};
pub use scoring::{BrandWeights, FieldScores, ProductWeights, ScoreWeights, Scored};
pub use semantic::{SemanticEntry, SemanticTable};

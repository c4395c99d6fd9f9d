//! # Qala Catalog
//!
//! Catalog provider for Qala search: loads brand, collection and product
//! snapshots from JSON and enforces what the search engine assumes.
//!
//! - slugs are unique per entity kind
//! - every collection and product references an existing brand
//! - every product references an existing collection of its own brand
//! - prices are positive
//!
//! ## Example
//!
//! ```rust
//! use qala_catalog::Catalog;
//! use qala_core::SearchEngine;
//!
//! let catalog = Catalog::demo().unwrap();
//! let engine = SearchEngine::default();
//! let results = catalog.search(&engine, "silk sari");
//! assert!(!results.products.is_empty());
//! ```

pub mod catalog;
pub mod error;

pub use catalog::{Catalog, Collection};
pub use error::{CatalogError, Result};

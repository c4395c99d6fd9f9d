use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("{kind} '{slug}' references unknown brand '{brand}'")]
    UnknownBrand {
        kind: &'static str,
        slug: String,
        brand: String,
    },

    #[error("Product '{product}' references unknown collection '{collection}'")]
    UnknownCollection { product: String, collection: String },

    #[error("Product '{product}' belongs to brand '{brand}' but collection '{collection}' belongs to '{collection_brand}'")]
    CollectionBrandMismatch {
        product: String,
        brand: String,
        collection: String,
        collection_brand: String,
    },

    #[error("Product '{product}' has invalid price {price}")]
    InvalidPrice { product: String, price: f64 },
}

use ahash::{AHashMap, AHashSet};
use qala_core::{Brand, Product, SearchEngine, SearchResults};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};
use crate::error::{CatalogError, Result};

const DEMO_CATALOG: &str = include_str!("../data/demo.json");

/// A brand's collection. Products reference one by slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub slug: String,
    pub brand_slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl Collection {
    pub fn new(slug: impl Into<String>, brand_slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            brand_slug: brand_slug.into(),
            name: name.into(),
            cover: None,
        }
    }
}

/// In-memory catalog snapshot.
///
/// Lists keep the order they were loaded in; search ties are broken by it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from parts and validate it.
    pub fn new(brands: Vec<Brand>, collections: Vec<Collection>, products: Vec<Product>) -> Result<Self> {
        let catalog = Self {
            brands,
            collections,
            products,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The storefront demo fixtures.
    pub fn demo() -> Result<Self> {
        Self::from_json_str(DEMO_CATALOG)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading catalog from {:?}", path);
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(data)?;
        catalog.validate()?;
        info!(
            "Catalog loaded: {} brands, {} collections, {} products",
            catalog.brands.len(),
            catalog.collections.len(),
            catalog.products.len()
        );
        Ok(catalog)
    }

    /// Check slug uniqueness, referential integrity and prices.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        let mut brand_slugs: AHashSet<&str> = AHashSet::with_capacity(self.brands.len());
        for brand in &self.brands {
            if !brand_slugs.insert(brand.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug {
                    kind: "brand",
                    slug: brand.slug.clone(),
                });
            }
        }

        // collection slug -> owning brand
        let mut collection_brands: AHashMap<&str, &str> = AHashMap::with_capacity(self.collections.len());
        for collection in &self.collections {
            if !brand_slugs.contains(collection.brand_slug.as_str()) {
                return Err(CatalogError::UnknownBrand {
                    kind: "collection",
                    slug: collection.slug.clone(),
                    brand: collection.brand_slug.clone(),
                });
            }
            if collection_brands
                .insert(collection.slug.as_str(), collection.brand_slug.as_str())
                .is_some()
            {
                return Err(CatalogError::DuplicateSlug {
                    kind: "collection",
                    slug: collection.slug.clone(),
                });
            }
        }

        let mut product_slugs: AHashSet<&str> = AHashSet::with_capacity(self.products.len());
        for product in &self.products {
            if !product_slugs.insert(product.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug {
                    kind: "product",
                    slug: product.slug.clone(),
                });
            }
            if !brand_slugs.contains(product.brand_slug.as_str()) {
                return Err(CatalogError::UnknownBrand {
                    kind: "product",
                    slug: product.slug.clone(),
                    brand: product.brand_slug.clone(),
                });
            }
            let Some(&owner) = collection_brands.get(product.collection_slug.as_str()) else {
                return Err(CatalogError::UnknownCollection {
                    product: product.slug.clone(),
                    collection: product.collection_slug.clone(),
                });
            };
            if owner != product.brand_slug {
                return Err(CatalogError::CollectionBrandMismatch {
                    product: product.slug.clone(),
                    brand: product.brand_slug.clone(),
                    collection: product.collection_slug.clone(),
                    collection_brand: owner.to_string(),
                });
            }
            if !product.price.is_finite() || product.price <= 0.0 {
                return Err(CatalogError::InvalidPrice {
                    product: product.slug.clone(),
                    price: product.price,
                });
            }
        }

        debug!("Catalog validated");
        Ok(())
    }

    pub fn brand(&self, slug: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.slug == slug)
    }

    pub fn collection(&self, slug: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.slug == slug)
    }

    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    pub fn products_by_brand<'a>(&'a self, brand_slug: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.brand_slug == brand_slug)
    }

    pub fn products_in_collection<'a>(&'a self, collection_slug: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |p| p.collection_slug == collection_slug)
    }

    pub fn collections_by_brand<'a>(&'a self, brand_slug: &'a str) -> impl Iterator<Item = &'a Collection> + 'a {
        self.collections
            .iter()
            .filter(move |c| c.brand_slug == brand_slug)
    }

    /// Search this catalog's products and brands.
    pub fn search<'a>(&'a self, engine: &SearchEngine, query: &str) -> SearchResults<'a> {
        let results = engine.search(query, &self.products, &self.brands);
        debug!(
            "Search matched {} products, {} brands",
            results.products.len(),
            results.brands.len()
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn small() -> (Vec<Brand>, Vec<Collection>, Vec<Product>) {
        (
            vec![
                Brand::new("khara-kapas", "Khara Kapas"),
                Brand::new("raw-mango", "Raw Mango"),
            ],
            vec![
                Collection::new("daylight-cotton", "khara-kapas", "Daylight Cotton"),
                Collection::new("silk-conservatory", "raw-mango", "Silk Conservatory"),
            ],
            vec![Product::new(
                "cotton-kurta-elara",
                "khara-kapas",
                "daylight-cotton",
                "Elara Cotton Kurta",
                14000.0,
            )],
        )
    }

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.brands.len(), 4);
        assert_eq!(catalog.collections.len(), 8);
        assert_eq!(catalog.products.len(), 22);
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.brand("sabyasachi").unwrap().name, "Sabyasachi");
        assert_eq!(catalog.collection("garden-fete").unwrap().brand_slug, "anita-dongre");
        assert_eq!(catalog.product("silk-sari-nila").unwrap().price, 56000.0);
        assert!(catalog.product("missing").is_none());

        assert_eq!(catalog.products_by_brand("raw-mango").count(), 5);
        assert_eq!(catalog.products_in_collection("couture-bridal").count(), 3);
        assert_eq!(catalog.collections_by_brand("khara-kapas").count(), 3);
    }

    #[test]
    fn test_duplicate_product_slug() {
        let (brands, collections, mut products) = small();
        products.push(products[0].clone());
        let err = Catalog::new(brands, collections, products).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug { kind: "product", .. }));
    }

    #[test]
    fn test_duplicate_brand_slug() {
        let (mut brands, collections, products) = small();
        brands.push(Brand::new("raw-mango", "Raw Mango Again"));
        let err = Catalog::new(brands, collections, products).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug { kind: "brand", .. }));
    }

    #[test]
    fn test_unknown_brand() {
        let (brands, collections, mut products) = small();
        products[0].brand_slug = "missing".to_string();
        let err = Catalog::new(brands, collections, products).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownBrand { kind: "product", .. }));
    }

    #[test]
    fn test_collection_with_unknown_brand() {
        let (brands, mut collections, products) = small();
        collections.push(Collection::new("orphan", "missing", "Orphan"));
        let err = Catalog::new(brands, collections, products).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownBrand { kind: "collection", .. }));
    }

    #[test]
    fn test_unknown_collection() {
        let (brands, collections, mut products) = small();
        products[0].collection_slug = "missing".to_string();
        let err = Catalog::new(brands, collections, products).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCollection { .. }));
    }

    #[test]
    fn test_collection_of_another_brand() {
        let (brands, collections, mut products) = small();
        products[0].collection_slug = "silk-conservatory".to_string();
        let err = Catalog::new(brands, collections, products).unwrap_err();
        assert!(matches!(err, CatalogError::CollectionBrandMismatch { .. }));
    }

    #[test]
    fn test_invalid_price() {
        for price in [0.0, -1.0, f64::NAN] {
            let (brands, collections, mut products) = small();
            products[0].price = price;
            let err = Catalog::new(brands, collections, products).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidPrice { .. }));
        }
    }

    #[test]
    fn test_load_from_file() {
        let (brands, collections, products) = small();
        let catalog = Catalog::new(brands, collections, products).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&catalog).unwrap().as_bytes()).unwrap();

        let loaded = Catalog::load(file.path()).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"brands\": [").unwrap();
        assert!(matches!(Catalog::load(file.path()), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_search_through_catalog() {
        let catalog = Catalog::demo().unwrap();
        let engine = SearchEngine::default();
        let results = catalog.search(&engine, "bridal lehenga");
        assert_eq!(results.products[0].slug, "bridal-lehenga-noor");
        assert_eq!(results.brands[0].slug, "sabyasachi");
    }
}

//! Catalog collection and decoding.

use crate::error::CatalogError;
use crate::filter::GridFilter;
use crate::product::Product;

/// The product catalog: an ordered, session-immutable list of products.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an already-decoded product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Decode a catalog from its JSON document.
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(body)?;
        Ok(Self { products })
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Consume the catalog, yielding the product list.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// The subset passing `filter`, preserving catalog order.
    pub fn filter(&self, filter: &GridFilter) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"[
        {"name": "Smart TV", "price": "R$ 2.499,00", "imageUrl": "img/eletronicos/tv.webp"},
        {"name": "Linen Shirt", "price": "R$ 129,90", "imageUrl": "img/moda/shirt.webp"},
        {"name": "Headset", "price": "R$ 349,00", "imageUrl": "img/eletronicos/headset.webp"},
        {"name": "Table Lamp", "price": "R$ 89,00", "imageUrl": "img/casa/lamp.webp"}
    ]"#;

    #[test]
    fn test_from_json_decodes_all_records() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.products()[0].name, "Smart TV");
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = Catalog::from_json(r#"{"not": "a list"}"#).unwrap_err();

        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        let err = Catalog::from_json(r#"[{"name": "No price"}]"#).unwrap_err();

        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_filter_category_preserves_catalog_order() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let filtered = catalog.filter(&GridFilter::from_token("eletronicos"));

        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Smart TV", "Headset"]);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let filtered = catalog.filter(&GridFilter::All);

        assert_eq!(filtered.len(), 4);
        assert_eq!(filtered, catalog.products());
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();

        assert!(catalog.filter(&GridFilter::from_token("livros")).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();

        assert!(catalog.is_empty());
        assert!(catalog.filter(&GridFilter::All).is_empty());
    }
}

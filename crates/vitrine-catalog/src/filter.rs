//! Grid filter types.

use crate::product::Product;

/// Which products a grid shows, parsed from its `data-grid-type` value.
///
/// The literal token `"all"` disables filtering; any other token selects
/// products whose `imageUrl` contains `/<token>/`. Matching on the image
/// path is an implicit schema carried over from the catalog format, which
/// has no category field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridFilter {
    /// Show every catalog item.
    All,
    /// Show items whose image path contains this category segment.
    Category(String),
}

impl GridFilter {
    /// Parse a `data-grid-type` attribute value.
    pub fn from_token(token: &str) -> Self {
        if token == "all" {
            GridFilter::All
        } else {
            GridFilter::Category(token.to_string())
        }
    }

    /// Whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            GridFilter::All => true,
            GridFilter::Category(token) => product.has_category_segment(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, image_url: &str) -> Product {
        Product {
            name: name.to_string(),
            price: "R$ 10,00".to_string(),
            image_url: image_url.to_string(),
        }
    }

    #[test]
    fn test_all_token_parses_to_all() {
        assert_eq!(GridFilter::from_token("all"), GridFilter::All);
    }

    #[test]
    fn test_other_token_parses_to_category() {
        assert_eq!(
            GridFilter::from_token("eletronicos"),
            GridFilter::Category("eletronicos".to_string())
        );
    }

    #[test]
    fn test_all_matches_everything() {
        let filter = GridFilter::All;

        assert!(filter.matches(&product("TV", "img/eletronicos/tv.webp")));
        assert!(filter.matches(&product("Shirt", "img/moda/shirt.webp")));
    }

    #[test]
    fn test_category_matches_only_its_segment() {
        let filter = GridFilter::from_token("eletronicos");

        assert!(filter.matches(&product("TV", "img/eletronicos/tv.webp")));
        assert!(!filter.matches(&product("Shirt", "img/moda/shirt.webp")));
    }
}

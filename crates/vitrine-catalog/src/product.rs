//! Product wire model.

use serde::{Deserialize, Serialize};

/// A product record as it appears in the catalog resource.
///
/// Prices arrive pre-formatted for display; the layer never does money
/// arithmetic. There is no explicit category field: the category is
/// encoded as a path segment of `imageUrl` (e.g.
/// `img/eletronicos/phone.webp`), a convention this crate preserves for
/// compatibility with existing catalogs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name, also used as the add-to-cart identifier.
    pub name: String,
    /// Pre-formatted display price (e.g. `"R$ 1.299,00"`).
    pub price: String,
    /// Image URL; its path encodes the product's category.
    pub image_url: String,
}

impl Product {
    /// Check whether `imageUrl` contains `category` as a path segment.
    pub fn has_category_segment(&self, category: &str) -> bool {
        self.image_url.contains(&format!("/{category}/"))
    }
}

//! Product catalog types for the Vitrine storefront enhancement layer.
//!
//! The catalog is a single static JSON resource; products are immutable
//! for the session. This crate owns the wire model, catalog decoding, and
//! the category filtering used by product grids.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod product;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use filter::GridFilter;
pub use product::Product;

//! Leptos components and browser glue for the Vitrine storefront layer.
//!
//! Everything here runs inside the page: fetching fragments and the
//! catalog, the toast notifier, the product grid, the carousel, and the
//! scroll-reveal observer. Pure state (paging, filtering) lives in
//! `vitrine-core` and `vitrine-catalog`; this crate wires it to the DOM.

pub mod carousel;
pub mod fragment;
pub mod grid;
pub mod listen;
pub mod net;
pub mod reveal;
pub mod schedule;
pub mod toast;

pub use carousel::Carousel;
pub use grid::{ProductCard, ProductGrid};
pub use net::FetchError;
pub use toast::{ToastHost, Toaster};

//! Core types for the Vitrine storefront enhancement layer.
//!
//! This crate is deliberately free of browser dependencies: it holds the
//! configuration passed from the page bootstrap into every component, and
//! the paging state machine that drives the product carousel. Both are
//! plain Rust and fully testable on the host.

pub mod config;
pub mod paging;

pub use config::{Breakpoints, StorefrontConfig, ToastTiming};
pub use paging::{slides_per_page, total_pages, PageCursor};

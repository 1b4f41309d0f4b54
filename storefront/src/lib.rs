//! Vitrine storefront enhancement layer.
//!
//! Compiled to WebAssembly and loaded by the otherwise-static store
//! pages; `boot()` is the single entry point.

mod bootstrap;

use vitrine_core::StorefrontConfig;

#[wasm_bindgen::prelude::wasm_bindgen]
pub fn boot() {
    console_error_panic_hook::set_once();
    bootstrap::run(StorefrontConfig::new());
}

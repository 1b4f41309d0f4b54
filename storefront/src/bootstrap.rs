//! Page bootstrap.
//!
//! Runs once per page: loads the shared chrome fragments, installs the
//! scroll reveal, and initializes whichever storefront features the
//! current document's markup asks for. Every feature degrades to absent
//! on failure; nothing here blocks page rendering.

use leptos::logging;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use vitrine_catalog::{Catalog, GridFilter};
use vitrine_core::StorefrontConfig;
use vitrine_ui::{carousel, fragment, grid, net, reveal, FetchError, ToastHost, Toaster};

/// Run the bootstrap as soon as the document has finished parsing.
pub fn run(config: StorefrontConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let deferred = {
            let document = document.clone();
            move |_| init(&document, &config)
        };
        vitrine_ui::listen::listen(&document, "DOMContentLoaded", deferred).forget();
    } else {
        init(&document, &config);
    }
}

fn init(document: &Document, config: &StorefrontConfig) {
    fragment::spawn_fragment(config.header_fragment.clone(), config.header_mount.clone());
    fragment::spawn_fragment(config.footer_fragment.clone(), config.footer_mount.clone());

    if let Err(e) = reveal::observe_sections(document, &config.reveal_selectors) {
        logging::warn!("Scroll reveal unavailable: {e:?}");
    }

    let toaster = Toaster::new(config.toast);
    if let Some(host) = element_by_id(document, "toast-container") {
        mount_to(host, move || view! { <ToastHost toaster/> }).forget();
    }

    init_carousel(document, config, toaster);
    init_grid(document, config, toaster);
}

fn init_carousel(document: &Document, config: &StorefrontConfig, toaster: Toaster) {
    let Some(container) = query(document, ".carousel-container") else {
        return;
    };

    let config = config.clone();
    spawn_local(async move {
        match fetch_catalog(&config.catalog_url).await {
            Ok(catalog) => {
                carousel::mount_into(&container, catalog.into_products(), config, toaster)
            }
            Err(e) => logging::error!("Failed to load products for the carousel: {e}"),
        }
    });
}

fn init_grid(document: &Document, config: &StorefrontConfig, toaster: Toaster) {
    let Some(container) = query(document, "[data-grid-type]") else {
        return;
    };

    let token = container
        .get_attribute("data-grid-type")
        .unwrap_or_else(|| "all".to_string());
    let filter = GridFilter::from_token(&token);

    // The delegated listener is attached once here, outside the render
    // path; re-rendering the grid never adds another one.
    grid::attach_cart_listener(&container, toaster).forget();

    let url = config.catalog_url.clone();
    spawn_local(async move {
        match fetch_catalog(&url).await {
            Ok(catalog) => grid::render_into(&container, catalog.filter(&filter)),
            Err(e) => logging::error!("Failed to load products for grid '{token}': {e}"),
        }
    });
}

async fn fetch_catalog(url: &str) -> Result<Catalog, FetchError> {
    let body = net::fetch_text(url).await?;
    Catalog::from_json(&body).map_err(|e| FetchError::Parse(e.to_string()))
}

fn element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into().ok())
}

fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into().ok())
}

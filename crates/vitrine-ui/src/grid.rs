//! Product grid rendering and the delegated add-to-cart listener.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

use vitrine_catalog::Product;

use crate::listen::{listen, ListenerHandle};
use crate::toast::Toaster;

const CART_BUTTON_SELECTOR: &str = ".add-to-cart-btn";

/// A single product card.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <div class="product-card">
            <img src=product.image_url.clone() alt=product.name.clone() loading="lazy"/>
            <h3 class="product-name">{product.name.clone()}</h3>
            <p class="product-price">{product.price.clone()}</p>
            <button class="add-to-cart-btn" data-product-name=product.name.clone()>
                "Add to cart"
            </button>
        </div>
    }
}

/// All cards for a grid, in catalog order.
#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    products
        .into_iter()
        .map(|product| view! { <ProductCard product/> })
        .collect::<Vec<_>>()
}

/// Replace `container`'s content with one card per product.
///
/// Idempotent with respect to DOM content: previous cards are fully
/// discarded. Event handling lives on the container itself (see
/// [`attach_cart_listener`]) and is untouched here, so re-rendering never
/// duplicates listeners.
pub fn render_into(container: &HtmlElement, products: Vec<Product>) {
    container.set_inner_html("");
    mount_to(container.clone(), move || view! { <ProductGrid products/> }).forget();
}

/// The product name carried by an add-to-cart click, if the event
/// originated on an add-to-cart control.
pub fn cart_click_product(event: &Event) -> Option<String> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let button = target.closest(CART_BUTTON_SELECTOR).ok()??;
    button.get_attribute("data-product-name")
}

/// Toast message acknowledging an add-to-cart action.
pub fn added_to_cart_message(product_name: &str) -> String {
    format!("{product_name} added to cart!")
}

/// Attach the delegated add-to-cart listener to `container`.
///
/// Called once per container at creation time, outside the re-render
/// path. The returned handle keeps the subscription alive.
pub fn attach_cart_listener(container: &HtmlElement, toaster: Toaster) -> ListenerHandle {
    listen(container, "click", move |event| {
        if let Some(name) = cart_click_product(&event) {
            toaster.show(added_to_cart_message(&name));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_to_cart_message_contains_product_name() {
        let message = added_to_cart_message("Smart TV");

        assert_eq!(message, "Smart TV added to cart!");
    }
}

//! The product carousel.
//!
//! Every product is rendered into the track exactly once at construction;
//! pagination slides the viewport with a transform and repaints the
//! indicator dots. The dots are rebuilt only when a resize changes the
//! page count.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use vitrine_catalog::Product;
use vitrine_core::{paging, PageCursor, StorefrontConfig};

use crate::grid::{added_to_cart_message, cart_click_product, ProductCard};
use crate::listen::listen;
use crate::schedule::Autoplay;
use crate::toast::Toaster;

/// Current viewport width in CSS pixels.
fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w as u32)
        .unwrap_or(0)
}

/// Clear `container` and mount the carousel into it.
pub fn mount_into(
    container: &HtmlElement,
    products: Vec<Product>,
    config: StorefrontConfig,
    toaster: Toaster,
) {
    container.set_inner_html("");
    mount_to(container.clone(), move || {
        view! { <Carousel products config toaster/> }
    })
    .forget();
}

/// An auto-advancing, paginated view over the product list.
///
/// Owned by the page bootstrap; container, data and configuration arrive
/// as explicit construction parameters.
#[component]
pub fn Carousel(products: Vec<Product>, config: StorefrontConfig, toaster: Toaster) -> impl IntoView {
    let product_count = products.len();
    let breakpoints = config.breakpoints;

    let per_page = RwSignal::new(paging::slides_per_page(viewport_width(), &breakpoints));
    let cursor = RwSignal::new(PageCursor::new());
    let total = Memo::new(move |_| paging::total_pages(product_count, per_page.get()));

    let autoplay = Rc::new(RefCell::new(Autoplay::new(
        config.autoplay_interval_ms,
        move || cursor.update(|c| c.next_wrapping(total.get_untracked())),
    )));
    autoplay.borrow_mut().restart();

    let go_to_page = {
        let autoplay = Rc::clone(&autoplay);
        move |page: usize| {
            cursor.update(|c| c.go_to(page, total.get_untracked()));
            autoplay.borrow_mut().restart();
        }
    };
    let next_page = {
        let autoplay = Rc::clone(&autoplay);
        move |_: MouseEvent| {
            cursor.update(|c| c.next_wrapping(total.get_untracked()));
            autoplay.borrow_mut().restart();
        }
    };
    let prev_page = {
        let autoplay = Rc::clone(&autoplay);
        move |_: MouseEvent| {
            cursor.update(|c| c.prev_wrapping(total.get_untracked()));
            autoplay.borrow_mut().restart();
        }
    };
    let pause = {
        let autoplay = Rc::clone(&autoplay);
        move |_: MouseEvent| autoplay.borrow_mut().stop()
    };
    let resume = {
        let autoplay = Rc::clone(&autoplay);
        move |_: MouseEvent| autoplay.borrow_mut().restart()
    };

    // Resize recomputes the page size; the cursor is re-clamped against
    // the new page count and the autoplay countdown starts over.
    let resize_handle = web_sys::window().map(|window| {
        let autoplay = Rc::clone(&autoplay);
        listen(&window, "resize", move |_| {
            per_page.set(paging::slides_per_page(viewport_width(), &breakpoints));
            cursor.update(|c| c.clamp_to(total.get_untracked()));
            autoplay.borrow_mut().restart();
        })
    });
    on_cleanup({
        let autoplay = Rc::clone(&autoplay);
        move || {
            autoplay.borrow_mut().stop();
            drop(resize_handle);
        }
    });

    let on_track_click = move |event: MouseEvent| {
        if let Some(name) = cart_click_product(&event) {
            toaster.show(added_to_cart_message(&name));
        }
    };

    let cards = products
        .into_iter()
        .map(|product| view! { <ProductCard product/> })
        .collect::<Vec<_>>();

    view! {
        <div class="carousel" on:mouseenter=pause on:mouseleave=resume>
            <button class="carousel-button prev" aria-label="Previous page" on:click=prev_page>
                "‹"
            </button>
            <div class="carousel-viewport">
                <div
                    class="carousel-track"
                    style:transform=move || format!("translateX(-{}%)", cursor.get().index() * 100)
                    on:click=on_track_click
                >
                    {cards}
                </div>
            </div>
            <button class="carousel-button next" aria-label="Next page" on:click=next_page>
                "›"
            </button>
            <div class="carousel-pagination">
                {move || {
                    (0..total.get())
                        .map(|page| {
                            let go_to_page = go_to_page.clone();
                            view! {
                                <button
                                    class="pagination-dot"
                                    class:active=move || cursor.get().index() == page
                                    aria-label=format!("Go to page {}", page + 1)
                                    on:click=move |_| go_to_page(page)
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

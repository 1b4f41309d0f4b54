//! Scroll-triggered section reveal.
//!
//! Designated sections start transparent and slightly offset, then fade
//! and slide in the first time they enter the viewport. Each section
//! animates once and is unobserved afterwards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

const REVEAL_THRESHOLD: f64 = 0.1;

fn hide(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", "translateY(20px)");
    let _ = style.set_property(
        "transition",
        "opacity 0.6s ease-out, transform 0.6s ease-out",
    );
}

fn show(element: &HtmlElement) {
    let style = element.style();
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translateY(0)");
}

/// Observe every element matching `selectors`, revealing each once when
/// it becomes visible. The observer and its callback live for the rest of
/// the page.
pub fn observe_sections(document: &Document, selectors: &[String]) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    show(element);
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for selector in selectors {
        let nodes = document.query_selector_all(selector)?;
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            let Ok(element) = node.dyn_into::<HtmlElement>() else {
                continue;
            };
            hide(&element);
            observer.observe(&element);
        }
    }

    callback.forget();
    Ok(())
}

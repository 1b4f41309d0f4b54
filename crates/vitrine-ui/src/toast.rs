//! Transient toast notifications.
//!
//! Toasts stack in append order; each entry owns its own timer chain and
//! removes itself, so concurrent notifications never share state.

use leptos::control_flow::For;
use leptos::prelude::*;

use vitrine_core::ToastTiming;

use crate::schedule::after;

#[derive(Debug, Clone)]
struct ToastEntry {
    id: u64,
    message: String,
    shown: RwSignal<bool>,
}

/// Handle for raising toasts.
///
/// Cheap to copy; the bootstrap creates one and passes it explicitly to
/// every component that reports to the user.
#[derive(Clone, Copy)]
pub struct Toaster {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
    timing: ToastTiming,
}

impl Toaster {
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            timing,
        }
    }

    /// Append a toast. It becomes visible after the enter delay, stays
    /// for the visible window, fades, and removes itself.
    pub fn show(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let shown = RwSignal::new(false);
        self.entries.update(|entries| {
            entries.push(ToastEntry {
                id,
                message: message.into(),
                shown,
            })
        });

        let ToastTiming {
            enter_delay_ms,
            visible_ms,
            fade_ms,
        } = self.timing;
        let entries = self.entries;

        after(enter_delay_ms, move || shown.set(true));
        after(enter_delay_ms + visible_ms, move || shown.set(false));
        after(enter_delay_ms + visible_ms + fade_ms, move || {
            entries.update(|entries| entries.retain(|t| t.id != id));
        });
    }
}

/// Renders the stack of live toasts; mounted at `#toast-container`.
#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
    view! {
        <For
            each=move || toaster.entries.get()
            key=|toast| toast.id
            children=move |toast: ToastEntry| {
                let shown = toast.shown;
                view! {
                    <div class="toast" class:show=move || shown.get()>
                        {toast.message.clone()}
                    </div>
                }
            }
        />
    }
}

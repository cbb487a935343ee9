//! Modal built on the native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap, Escape-to-close and
//! `::backdrop` styling for free. The dialog owns its own display (none when
//! closed), so layout goes on an inner fixed container instead.
//!
//! Escape fires `cancel`, which we turn into `on_close` and prevent, so the
//! host stays the single owner of visibility. `showModal()` throws if the
//! dialog is already open, so the effect checks the `open` attribute first.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn call_dialog_method(element: &web_sys::Element, name: &str) {
    if let Ok(method) = js_sys::Reflect::get(element, &name.into()) {
        if let Some(func) = method.dyn_ref::<js_sys::Function>() {
            let _ = func.call0(element);
        }
    }
}

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Escape key or backdrop click
    on_close: EventHandler<()>,
    /// Id of the element that titles the dialog
    #[props(default)]
    labelled_by: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{id}")
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let open = is_open();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&dialog_id_for_effect) else {
            return;
        };

        match (open, element.has_attribute("open")) {
            (true, false) => call_dialog_method(&element, "showModal"),
            (false, true) => call_dialog_method(&element, "close"),
            _ => {}
        }
    });

    let dialog_class = class.unwrap_or_default();

    // No display classes on the <dialog> itself: they would override the
    // native display:none and show the dialog while closed.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/80 {dialog_class}",
            aria_labelledby: labelled_by.as_deref(),
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center p-4",
                    onclick: move |_| on_close.call(()),
                    div {
                        class: "w-full max-w-md",
                        onclick: move |evt| evt.stop_propagation(),
                        {children}
                    }
                }
            }
        }
    }
}

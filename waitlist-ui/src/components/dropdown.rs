//! Dropdown panel using the popover API + floating-ui for positioning
//!
//! The popover API gives top-layer rendering and light dismiss (click outside
//! closes). floating-ui anchors the panel to its trigger and keeps it in the
//! viewport. This matters inside the modal: the panel must render above the
//! `<dialog>` and must not be clipped by it.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::floating_ui::{self, PositionOptions};
pub use crate::floating_ui::Placement;

static DROPDOWN_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

const HIDDEN_STYLE: &str =
    "position: absolute; top: 0; left: 0; width: max-content; margin: 0; opacity: 0;";

fn call_popover_method(element: &web_sys::Element, name: &str) {
    if let Ok(method) = js_sys::Reflect::get(element, &name.into()) {
        if let Some(func) = method.dyn_ref::<js_sys::Function>() {
            let _ = func.call0(element);
        }
    }
}

/// Floating panel positioned against the element with id `anchor_id`
#[component]
pub fn Dropdown(
    anchor_id: String,
    is_open: ReadSignal<bool>,
    /// Called on light dismiss (outside click, Escape)
    on_close: EventHandler<()>,
    #[props(default)] placement: Placement,
    #[props(default = 4.0)] offset: f64,
    /// Make the panel at least as wide as the anchor
    #[props(default)]
    match_anchor_width: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    // Set before we show/hide ourselves so `ontoggle` can tell our own toggles
    // apart from the browser's light dismiss.
    let mut programmatic_toggle = use_signal(|| false);

    let popover_id = use_hook(|| {
        let id = DROPDOWN_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("dropdown-{id}")
    });
    let popover_id_for_effect = popover_id.clone();

    use_effect(move || {
        let open = is_open();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(floating) = document.get_element_by_id(&popover_id_for_effect) else {
            return;
        };

        programmatic_toggle.set(true);

        if !open {
            call_popover_method(&floating, "hidePopover");
            return;
        }

        let _ = floating.set_attribute("style", HIDDEN_STYLE);
        call_popover_method(&floating, "showPopover");

        let Some(anchor) = document.get_element_by_id(&anchor_id) else {
            return;
        };
        let min_width = if match_anchor_width {
            format!(" min-width: {}px;", anchor.client_width())
        } else {
            String::new()
        };
        let options = PositionOptions {
            placement,
            offset: Some(offset),
            flip: true,
            shift: true,
        };

        spawn(async move {
            match floating_ui::compute_position(&anchor, &floating, options).await {
                Ok(pos) => {
                    let style = format!(
                        "position: absolute; top: 0; left: 0; width: max-content; margin: 0;{min_width} transform: translate({}px, {}px); opacity: 1;",
                        pos.x, pos.y
                    );
                    let _ = floating.set_attribute("style", &style);
                }
                Err(e) => tracing::warn!("Failed to position dropdown: {e:?}"),
            }
        });
    });

    let panel_class = class.unwrap_or_default();

    rsx! {
        div {
            id: "{popover_id}",
            popover: "auto",
            class: "{panel_class}",
            style: HIDDEN_STYLE,
            ontoggle: move |_| {
                if programmatic_toggle() {
                    programmatic_toggle.set(false);
                    return;
                }
                on_close.call(());
            },
            {children}
        }
    }
}

//! Styled single-select built on the Dropdown popover
//!
//! Options register themselves with the parent through context, so the trigger
//! can render the selected option's icon and label.
//!
//! ```ignore
//! Select {
//!     value: country,
//!     placeholder: "Select your country",
//!     onchange: move |val: String| { ... },
//!     SelectOption { value: "Canada", label: "Canada", icon: "🇨🇦" }
//!     SelectOption { value: "Other", label: "Other", icon: "🌍" }
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::components::icons::{CheckIcon, ChevronDownIcon};
use crate::components::{Dropdown, Placement};

static SELECT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// An option as registered by `SelectOption`
#[derive(Clone, Debug, PartialEq)]
struct RegisteredOption {
    value: String,
    label: String,
    icon: Option<String>,
}

/// Shared between Select and its SelectOption children
#[derive(Clone, Copy)]
struct SelectContext {
    current_value: ReadSignal<String>,
    onchange: EventHandler<String>,
    close: Callback<()>,
    options: Signal<Vec<RegisteredOption>>,
}

#[component]
pub fn Select(
    value: ReadSignal<String>,
    onchange: EventHandler<String>,
    /// Shown in the trigger while nothing is selected
    #[props(default)]
    placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    /// Id of the trigger button, for `label { r#for }`
    #[props(default)]
    id: Option<String>,
    children: Element,
) -> Element {
    let mut is_open = use_signal(|| false);
    let is_open_read: ReadSignal<bool> = is_open.into();
    let options: Signal<Vec<RegisteredOption>> = use_signal(Vec::new);

    let generated_id = use_hook(|| {
        let id = SELECT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("select-anchor-{id}")
    });
    let anchor_id = id.unwrap_or(generated_id);

    let close_cb = use_callback(move |()| {
        is_open.set(false);
    });

    use_context_provider(|| SelectContext {
        current_value: value,
        onchange,
        close: close_cb,
        options,
    });

    let selected = options.read().iter().find(|o| o.value == value()).cloned();

    rsx! {
        div { class: "relative w-full",
            button {
                id: "{anchor_id}",
                r#type: "button",
                class: "w-full inline-flex items-center justify-between gap-2 rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-left text-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled,
                aria_haspopup: "listbox",
                aria_expanded: if is_open() { "true" } else { "false" },
                onclick: move |_| {
                    if !disabled {
                        is_open.set(!is_open());
                    }
                },
                match selected {
                    Some(option) => rsx! {
                        span { class: "flex items-center gap-2 truncate",
                            if let Some(icon) = option.icon {
                                span { class: "text-lg leading-none", "{icon}" }
                            }
                            span { "{option.label}" }
                        }
                    },
                    None => rsx! {
                        span { class: "truncate text-gray-500", {placeholder.unwrap_or_default()} }
                    },
                }
                ChevronDownIcon { class: "w-4 h-4 text-gray-400 flex-shrink-0" }
            }

            Dropdown {
                anchor_id: anchor_id.clone(),
                is_open: is_open_read,
                on_close: move |_| is_open.set(false),
                placement: Placement::BottomStart,
                match_anchor_width: true,
                class: "max-h-64 overflow-y-auto bg-white rounded-md shadow-lg border border-gray-200 p-1",
                div { role: "listbox", {children} }
            }
        }
    }
}

/// An option within a Select
#[component]
pub fn SelectOption(
    value: String,
    label: String,
    /// Glyph shown before the label, in the list and in the trigger
    #[props(default)]
    icon: Option<String>,
) -> Element {
    let ctx = use_context::<SelectContext>();
    let is_selected = *ctx.current_value.read() == value;

    {
        let option = RegisteredOption {
            value: value.clone(),
            label: label.clone(),
            icon: icon.clone(),
        };
        let mut options = ctx.options;
        use_hook(move || {
            let mut opts = options.write();
            if !opts.iter().any(|o| o.value == option.value) {
                opts.push(option);
            }
        });
    }

    let value_for_click = value.clone();

    rsx! {
        button {
            r#type: "button",
            role: "option",
            aria_selected: if is_selected { "true" } else { "false" },
            class: "w-full text-left px-2 py-1.5 text-sm rounded flex items-center gap-2 {option_class(is_selected)}",
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                ctx.onchange.call(value_for_click.clone());
                ctx.close.call(());
            },
            if let Some(icon) = icon {
                span { class: "text-lg leading-none", "{icon}" }
            }
            span { class: "flex-1", "{label}" }
            if is_selected {
                CheckIcon { class: "w-4 h-4 text-blue-600 flex-shrink-0" }
            }
        }
    }
}

fn option_class(is_selected: bool) -> &'static str {
    if is_selected {
        "bg-gray-100 text-gray-900"
    } else {
        "text-gray-700 hover:bg-gray-100"
    }
}

//! Icon components using the Lucide icon set (https://lucide.dev)
//!
//! Icons stroke with currentColor, so they take their color from Tailwind text
//! classes. Default size is w-4 h-4, override with the `class` prop.

use dioxus::prelude::*;

/// Shared 24x24 stroked Lucide frame
#[component]
fn LucideSvg(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

/// Check mark
#[component]
pub fn CheckIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M20 6 9 17l-5-5" }
        }
    }
}

/// Large check inside a circle, for confirmations
#[component]
pub fn CheckCircleIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M21.801 10A10 10 0 1 1 17 3.335" }
            path { d: "m9 11 3 3L22 4" }
        }
    }
}

/// Chevron pointing down
#[component]
pub fn ChevronDownIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "m6 9 6 6 6-6" }
        }
    }
}

/// Open circle used as a spinner (pair with `animate-spin`)
#[component]
pub fn LoaderIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
        }
    }
}

/// Exclamation mark inside a circle
#[component]
pub fn AlertCircleIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            circle { cx: "12", cy: "12", r: "10" }
            line {
                x1: "12",
                x2: "12",
                y1: "8",
                y2: "12",
            }
            line {
                x1: "12",
                x2: "12.01",
                y1: "16",
                y2: "16",
            }
        }
    }
}

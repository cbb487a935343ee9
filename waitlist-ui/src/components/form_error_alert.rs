//! Destructive alert banner for a failed form submission

use crate::components::icons::AlertCircleIcon;
use dioxus::prelude::*;

/// Red banner with an icon and the error text, announced to screen readers.
#[component]
pub fn FormErrorAlert(message: String) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "flex items-start gap-3 rounded-md border border-red-300 bg-red-50 p-3",
            AlertCircleIcon { class: "w-4 h-4 text-red-600 flex-shrink-0 mt-0.5" }
            p { class: "text-sm text-red-700", "{message}" }
        }
    }
}

use super::form_view::TITLE_ID;
use crate::components::icons::CheckCircleIcon;
use dioxus::prelude::*;

/// Confirmation shown in place of the form after a successful signup
#[component]
pub fn WaitlistSuccessView(product_name: String) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow-xl p-6 text-center py-10",
            CheckCircleIcon { class: "w-16 h-16 text-green-500 mx-auto mb-4" }
            h2 {
                id: TITLE_ID,
                class: "text-2xl font-bold text-gray-900 mb-2",
                "You're on the list!"
            }
            p { class: "text-gray-600",
                "Thanks for joining our waitlist. We'll notify you when {product_name} launches!"
            }
        }
    }
}

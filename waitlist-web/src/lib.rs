//! waitlist-web - landing page hosting the waitlist signup modal

pub mod services;
mod timer;
pub mod waitlist_modal;

use dioxus::prelude::*;
pub use services::WaitlistServices;
pub use waitlist_modal::WaitlistModal;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const FLOATING_UI_CORE: &str = "https://cdn.jsdelivr.net/npm/@floating-ui/core@1.6.9";
const FLOATING_UI_DOM: &str = "https://cdn.jsdelivr.net/npm/@floating-ui/dom@1.6.13";

#[component]
pub fn App() -> Element {
    let services = try_use_context::<WaitlistServices>();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        document::Script { src: FLOATING_UI_CORE }
        document::Script { src: FLOATING_UI_DOM }
        div { class: "min-h-screen flex items-center justify-center p-6",
            match services {
                Some(services) => rsx! {
                    Landing { product_name: services.product_name }
                },
                None => rsx! {
                    p { class: "text-sm text-red-600",
                        "The waitlist is not configured. Set WAITLIST_STORE_URL and WAITLIST_ANON_KEY."
                    }
                },
            }
        }
    }
}

#[component]
fn Landing(product_name: String) -> Element {
    let mut show_waitlist = use_signal(|| false);

    rsx! {
        div { class: "max-w-xl text-center space-y-6",
            h1 { class: "text-4xl font-bold text-gray-900", "{product_name}" }
            p { class: "text-lg text-gray-600",
                "Scheduling for writers is almost here. Be the first to know when it launches."
            }
            button {
                class: "rounded-md bg-gray-900 px-6 py-3 text-white font-medium hover:bg-gray-800",
                onclick: move |_| show_waitlist.set(true),
                "Join Waitlist"
            }
        }
        WaitlistModal {
            is_open: show_waitlist(),
            on_close: move |_| show_waitlist.set(false),
        }
    }
}

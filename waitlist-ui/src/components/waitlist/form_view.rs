use crate::components::icons::LoaderIcon;
use crate::components::{
    Button, ButtonType, ButtonVariant, FormErrorAlert, Select, SelectOption, TextInput,
    TextInputType,
};
use dioxus::prelude::*;
use waitlist_common::{CountryTable, WaitlistForm};

/// Id of the form title, referenced by the dialog's `aria-labelledby`
pub(super) const TITLE_ID: &str = "waitlist-title";

/// `required` alone accepts a name of only spaces
const NON_BLANK_PATTERN: &str = r".*\S.*";

/// Pure view of the signup form.
///
/// Everything is driven by `form`: while it is submitting, every input and
/// both buttons are disabled and the submit button shows a spinner. The host
/// decides what a submit or cancel does.
#[component]
pub fn WaitlistFormView(
    form: WaitlistForm,
    countries: CountryTable,
    product_name: String,

    // --- Callbacks ---
    on_name_change: EventHandler<String>,
    on_email_change: EventHandler<String>,
    on_country_change: EventHandler<String>,
    /// Fired once the browser's required-field checks pass
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let disabled = form.inputs_disabled();
    let submitting = form.is_submitting();

    rsx! {
        div { class: "bg-white rounded-lg shadow-xl p-6",
            div { class: "text-center mb-4",
                h2 {
                    id: TITLE_ID,
                    class: "text-lg font-semibold text-gray-900",
                    "Join the Waitlist"
                }
                div { class: "flex justify-center mt-2",
                    span { class: "bg-gradient-to-r from-blue-600 to-purple-600 text-white text-xs px-3 py-1 rounded-full font-medium",
                        "COMING SOON"
                    }
                }
            }

            form {
                class: "space-y-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },

                if let Some(message) = form.error_message() {
                    FormErrorAlert { message: message.to_string() }
                }

                div { class: "space-y-2",
                    label {
                        r#for: "waitlist-name",
                        class: "block text-sm font-medium text-gray-900",
                        "Full Name"
                    }
                    TextInput {
                        value: form.name().to_string(),
                        on_input: move |v| on_name_change.call(v),
                        input_type: TextInputType::Text,
                        id: "waitlist-name".to_string(),
                        name: "name",
                        placeholder: "Enter your full name",
                        autocomplete: "name",
                        pattern: NON_BLANK_PATTERN,
                        required: true,
                        disabled,
                    }
                }

                div { class: "space-y-2",
                    label {
                        r#for: "waitlist-email",
                        class: "block text-sm font-medium text-gray-900",
                        "Email Address"
                    }
                    TextInput {
                        value: form.email().to_string(),
                        on_input: move |v| on_email_change.call(v),
                        input_type: TextInputType::Email,
                        id: "waitlist-email".to_string(),
                        name: "email",
                        placeholder: "Enter your email",
                        autocomplete: "email",
                        required: true,
                        disabled,
                    }
                }

                div { class: "space-y-2 relative",
                    label {
                        r#for: "waitlist-country",
                        class: "block text-sm font-medium text-gray-900",
                        "Country"
                    }
                    Select {
                        value: form.country().to_string(),
                        onchange: move |v| on_country_change.call(v),
                        placeholder: "Select your country",
                        id: "waitlist-country".to_string(),
                        disabled,
                        for country in countries.iter() {
                            SelectOption {
                                key: "{country.name}",
                                value: country.name.clone(),
                                label: country.name.clone(),
                                icon: country.flag.clone(),
                            }
                        }
                    }
                    // The custom select has no native validity; this mirror lets
                    // the browser block submit while no country is chosen.
                    input {
                        class: "absolute bottom-0 left-0 h-px w-px opacity-0 pointer-events-none",
                        tabindex: "-1",
                        aria_hidden: "true",
                        name: "country",
                        value: "{form.country()}",
                        required: true,
                        disabled,
                    }
                }

                div { class: "flex gap-3 pt-4",
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: ButtonType::Submit,
                        class: "flex-1",
                        disabled,
                        if submitting {
                            LoaderIcon { class: "w-4 h-4 animate-spin" }
                            "Joining..."
                        } else {
                            "Join Waitlist"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }

                p { class: "text-xs text-gray-500 text-center",
                    "We'll notify you when {product_name} is ready to launch!"
                }
            }
        }
    }
}

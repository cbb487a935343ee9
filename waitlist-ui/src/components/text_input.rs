//! Reusable text input component

use dioxus::prelude::*;

/// HTML input type
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextInputType {
    #[default]
    Text,
    /// Browser checks the value looks like an address before submit
    Email,
}

impl TextInputType {
    fn as_str(&self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Email => "email",
        }
    }
}

#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] input_type: TextInputType,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] id: Option<String>,
    #[props(default)] name: Option<&'static str>,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] autocomplete: Option<&'static str>,
    /// Regex the whole value must match for the form to submit
    #[props(default)]
    pattern: Option<&'static str>,
) -> Element {
    rsx! {
        input {
            r#type: input_type.as_str(),
            class: "w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50 disabled:cursor-not-allowed",
            id: id.as_deref(),
            name,
            value: "{value}",
            placeholder,
            required,
            disabled,
            autocomplete,
            pattern,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}

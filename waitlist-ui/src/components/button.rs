//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Solid dark background, for the primary action
    Primary,
    /// Bordered, for cancel
    Outline,
}

/// HTML button type
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonType {
    #[default]
    Button,
    /// Submits the enclosing form
    Submit,
}

impl ButtonType {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

/// Button with the modal's styling.
///
/// `onclick` is optional because a submit button usually lets the form's
/// `onsubmit` do the work.
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] button_type: ButtonType,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 rounded-md px-4 py-2 text-sm font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-gray-900 text-white hover:bg-gray-800",
        ButtonVariant::Outline => "border border-gray-300 bg-white text-gray-900 hover:bg-gray-50",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {variant_class} {extra}"),
        None => format!("{base} {variant_class}"),
    };

    rsx! {
        button {
            class: "{computed_class}",
            r#type: button_type.as_str(),
            disabled,
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if disabled {
                    return;
                }
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

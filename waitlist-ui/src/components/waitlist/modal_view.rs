use super::form_view::TITLE_ID;
use crate::components::{Modal, WaitlistFormView, WaitlistSuccessView};
use dioxus::prelude::*;
use waitlist_common::{CountryTable, WaitlistForm};

/// Waitlist dialog: the success confirmation while `form` is in success,
/// otherwise the signup form.
///
/// Escape, backdrop click and Cancel all end in `on_close`; resetting the form
/// before closing is the host's job.
#[component]
pub fn WaitlistModalView(
    is_open: ReadSignal<bool>,
    form: WaitlistForm,
    countries: CountryTable,
    product_name: String,
    on_name_change: EventHandler<String>,
    on_email_change: EventHandler<String>,
    on_country_change: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            is_open,
            on_close,
            labelled_by: TITLE_ID.to_string(),
            if form.is_success() {
                WaitlistSuccessView { product_name }
            } else {
                WaitlistFormView {
                    form,
                    countries,
                    product_name,
                    on_name_change,
                    on_email_change,
                    on_country_change,
                    on_submit,
                    on_cancel: on_close,
                }
            }
        }
    }
}

//! Waitlist signup modal views

mod form_view;
mod modal_view;
mod success_view;

pub use form_view::WaitlistFormView;
pub use modal_view::WaitlistModalView;
pub use success_view::WaitlistSuccessView;

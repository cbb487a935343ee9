//! waitlist-ui - Pure view components for the waitlist modal
//!
//! Components here own no business state. The host passes the current
//! `WaitlistForm` in and receives user intents back through event handlers.

pub mod components;
pub mod floating_ui;

pub use components::*;

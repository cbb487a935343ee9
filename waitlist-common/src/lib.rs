//! Pure waitlist types shared by the services, views and host app.

mod country;
mod entry;
mod form;

pub use country::{Country, CountryTable};
pub use entry::{is_plausible_email, Entry};
pub use form::{FormStatus, SubmitFailure, WaitlistForm};

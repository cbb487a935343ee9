//! Shared UI components

pub mod button;
pub mod dropdown;
pub mod form_error_alert;
pub mod icons;
pub mod modal;
pub mod select;
pub mod text_input;
pub mod waitlist;

pub use button::{Button, ButtonType, ButtonVariant};
pub use dropdown::{Dropdown, Placement};
pub use form_error_alert::FormErrorAlert;
pub use icons::{AlertCircleIcon, CheckCircleIcon, CheckIcon, ChevronDownIcon, LoaderIcon};
pub use modal::Modal;
pub use select::{Select, SelectOption};
pub use text_input::{TextInput, TextInputType};
pub use waitlist::{WaitlistFormView, WaitlistModalView, WaitlistSuccessView};

use crate::entry::{is_plausible_email, Entry};

/// Phase of the waitlist form. Exactly one holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Insert in flight; every input and button is disabled
    Submitting,
    /// Insert succeeded; the confirmation view replaces the form
    Success,
    /// Last submit failed; the form is editable and shows the message
    Error(String),
}

/// Why a submit did not go through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitFailure {
    /// The email is already on the waitlist
    Duplicate,
    /// The store rejected the insert for any other reason
    Store,
    /// The store could not be reached
    Network,
}

impl SubmitFailure {
    /// Message shown to the user in the form's error banner.
    pub fn message(&self) -> &'static str {
        match self {
            SubmitFailure::Duplicate => "This email is already on our waitlist!",
            SubmitFailure::Store => "Something went wrong. Please try again.",
            SubmitFailure::Network => {
                "Network error. Please check your connection and try again."
            }
        }
    }
}

/// Field values and status of one waitlist modal instance.
///
/// Pure state machine with no I/O. The host drives it:
///
/// ```ignore
/// if let Some(entry) = form.begin_submit() {
///     let result = controller.submit(&entry).await;
///     form.finish_submit(result);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WaitlistForm {
    name: String,
    email: String,
    country: String,
    status: FormStatus,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == FormStatus::Success
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Inputs and both buttons are disabled exactly while a submit is in flight.
    pub fn inputs_disabled(&self) -> bool {
        self.is_submitting()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if !self.inputs_disabled() {
            self.name = name.into();
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        if !self.inputs_disabled() {
            self.email = email.into();
        }
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        if !self.inputs_disabled() {
            self.country = country.into();
        }
    }

    /// The required-field check a browser form applies before submit fires:
    /// non-blank name, plausible email, a selected country.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && is_plausible_email(&self.email) && !self.country.is_empty()
    }

    /// Enter `Submitting` and hand back the normalized entry to send.
    ///
    /// Clears any previous error. Returns `None` when a submit is already in
    /// flight or the success view is showing.
    pub fn begin_submit(&mut self) -> Option<Entry> {
        match self.status {
            FormStatus::Submitting | FormStatus::Success => None,
            FormStatus::Idle | FormStatus::Error(_) => {
                self.status = FormStatus::Submitting;
                Some(Entry::normalized(&self.name, &self.email, &self.country))
            }
        }
    }

    /// Leave `Submitting` with the store's verdict.
    ///
    /// Success clears every field; a failure keeps them so the user can fix
    /// and resubmit. Ignored unless a submit is in flight, so a late result
    /// cannot resurrect a form that was reset.
    pub fn finish_submit(&mut self, result: Result<(), SubmitFailure>) {
        if !self.is_submitting() {
            return;
        }
        match result {
            Ok(()) => {
                self.clear_fields();
                self.status = FormStatus::Success;
            }
            Err(failure) => {
                self.status = FormStatus::Error(failure.message().to_string());
            }
        }
    }

    /// Success view timed out.
    pub fn dismiss_success(&mut self) {
        if self.is_success() {
            self.status = FormStatus::Idle;
        }
    }

    /// Back to a blank, idle form.
    pub fn reset(&mut self) {
        self.clear_fields();
        self.status = FormStatus::Idle;
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.country.clear();
    }
}

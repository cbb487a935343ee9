//! Stateful waitlist modal: owns the form, runs submits, schedules auto-close

use crate::services::WaitlistServices;
use crate::timer::sleep;
use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::debug;
use waitlist_common::{Entry, WaitlistForm};
use waitlist_ui::WaitlistModalView;

/// Waitlist signup modal.
///
/// The host only controls visibility. Every way of closing (Cancel, Escape,
/// backdrop click, success timeout, or the host flipping `is_open`) cancels
/// pending submit and auto-close tasks and resets the form, so reopening
/// always starts blank and a stale timer can never close a reopened modal.
#[component]
pub fn WaitlistModal(is_open: ReadSignal<bool>, on_close: EventHandler<()>) -> Element {
    let services = use_context::<WaitlistServices>();

    let mut form = use_signal(WaitlistForm::new);
    let mut submit_task = use_signal(|| Option::<Task>::None);
    let mut auto_close_task = use_signal(|| Option::<Task>::None);

    // Runs on every open/close transition, including ones the host makes.
    use_effect(move || {
        let open = is_open();
        debug!("Waitlist modal {}", if open { "opened" } else { "closed" });
        let pending = [submit_task.write().take(), auto_close_task.write().take()];
        discard_session(&mut form.write(), pending, Task::cancel);
    });

    let close = use_callback(move |()| {
        let pending = [submit_task.write().take(), auto_close_task.write().take()];
        discard_session(&mut form.write(), pending, Task::cancel);
        on_close.call(());
    });

    let on_submit = {
        let services = services.clone();
        move |_| {
            let Some(entry) = start_submit(&mut form.write()) else {
                return;
            };

            let controller = services.controller.clone();
            let success_display = services.success_display;

            let task = spawn(async move {
                let result = controller.submit(&entry).await;
                submit_task.set(None);
                form.write().finish_submit(result);

                if form.read().is_success() {
                    let timer = spawn(async move {
                        sleep(success_display).await;
                        auto_close_task.set(None);
                        form.write().dismiss_success();
                        close.call(());
                    });
                    auto_close_task.set(Some(timer));
                }
            });
            submit_task.set(Some(task));
        }
    };

    rsx! {
        WaitlistModalView {
            is_open,
            form: form.read().clone(),
            countries: services.countries.clone(),
            product_name: services.product_name.clone(),
            on_name_change: move |v: String| form.write().set_name(v),
            on_email_change: move |v: String| form.write().set_email(v),
            on_country_change: move |v: String| form.write().set_country(v),
            on_submit,
            on_close: move |_| close.call(()),
        }
    }
}

/// Enter `Submitting` once the browser has accepted the form.
///
/// The browser's `required`/`type=email`/`pattern` checks are the only gate;
/// whatever passed them is sent as-is.
fn start_submit(form: &mut WaitlistForm) -> Option<Entry> {
    let entry = form.begin_submit();
    if entry.is_none() {
        debug!("Ignoring submit while one is in flight or the success view is showing");
    }
    entry
}

/// Cancel whatever the session still has pending and blank the form.
///
/// Callers notify the host only after this returns.
fn discard_session<T>(
    form: &mut WaitlistForm,
    pending: impl IntoIterator<Item = Option<T>>,
    mut cancel: impl FnMut(T),
) {
    for task in pending.into_iter().flatten() {
        cancel(task);
    }
    form.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use waitlist_common::{FormStatus, SubmitFailure};

    fn filled() -> WaitlistForm {
        let mut form = WaitlistForm::new();
        form.set_name("Ada Lovelace");
        form.set_email("ada@example.com");
        form.set_country("United Kingdom");
        form
    }

    #[test]
    fn test_discard_cancels_pending_and_resets() {
        let mut form = filled();
        form.begin_submit();
        assert!(form.is_submitting());

        let mut cancelled = Vec::new();
        discard_session(&mut form, [Some("submit"), None], |t| cancelled.push(t));

        assert_eq!(cancelled, vec!["submit"]);
        assert_eq!(form, WaitlistForm::new());
    }

    #[test]
    fn test_discard_from_every_state_leaves_blank_idle() {
        let mut success = filled();
        success.begin_submit();
        success.finish_submit(Ok(()));

        let mut failed = filled();
        failed.begin_submit();
        failed.finish_submit(Err(SubmitFailure::Duplicate));

        for mut form in [filled(), success, failed] {
            discard_session(&mut form, [None::<()>, None], |_| {});
            assert_eq!(form.status(), &FormStatus::Idle);
            assert_eq!(form.name(), "");
            assert_eq!(form.email(), "");
            assert_eq!(form.country(), "");
            assert_eq!(form.error_message(), None);
        }
    }

    #[test]
    fn test_close_resets_before_host_is_notified() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(Err(SubmitFailure::Network));

        let mut events = Vec::new();
        discard_session(&mut form, [Some(1), Some(2)], |t| {
            events.push(format!("cancel {t}"))
        });
        // What the host would observe when `on_close` fires next.
        events.push(format!("close with {:?}", form.status()));

        assert_eq!(events, vec!["cancel 1", "cancel 2", "close with Idle"]);
    }

    #[test]
    fn test_stale_success_does_not_survive_reopen() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(Ok(()));
        assert!(form.is_success());

        // Host hides and reopens the modal before the timer fires.
        let mut cancelled = 0;
        discard_session(&mut form, [None, Some(())], |_| cancelled += 1);

        assert_eq!(cancelled, 1);
        assert!(!form.is_success());
        assert!(start_submit(&mut filled()).is_some());
    }

    #[test]
    fn test_browser_accepted_input_is_submitted() {
        // Passes the browser's checks but not `is_complete`'s stricter email rule.
        let mut form = WaitlistForm::new();
        form.set_name("Ada");
        form.set_email("ada@bücher.example");
        form.set_country("Germany");
        assert!(!form.is_complete());

        let entry = start_submit(&mut form).expect("submit should start");
        assert_eq!(entry.email, "ada@bücher.example");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_submit_ignored_while_in_flight_or_showing_success() {
        let mut form = filled();
        assert!(start_submit(&mut form).is_some());
        assert!(start_submit(&mut form).is_none());

        form.finish_submit(Ok(()));
        assert!(start_submit(&mut form).is_none());
    }
}

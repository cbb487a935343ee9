//! Submission controller: sends a normalized entry and classifies the outcome

use crate::store::{StoreError, WaitlistStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use waitlist_common::{Entry, SubmitFailure};

/// Sends waitlist entries to the store, one at a time.
///
/// Clones share the store and the in-flight flag, so a controller handed to
/// several callers still admits only one insert at a time.
#[derive(Clone)]
pub struct SubmissionController {
    store: Arc<dyn WaitlistStore>,
    in_flight: Arc<AtomicBool>,
}

impl SubmissionController {
    pub fn new(store: Arc<dyn WaitlistStore>) -> Self {
        Self {
            store,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Insert `entry` and map the result to what the user should see.
    ///
    /// No retry. A submit that arrives while another is in flight is refused
    /// without reaching the store.
    pub async fn submit(&self, entry: &Entry) -> Result<(), SubmitFailure> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("Waitlist submit refused: another submit is in flight");
            return Err(SubmitFailure::Store);
        };

        match self.store.insert(entry).await {
            Ok(()) => {
                info!(
                    "Waitlist signup stored (domain: {}, country: {})",
                    entry.email_domain(),
                    entry.country
                );
                Ok(())
            }
            Err(e) => {
                let failure = classify(&e);
                warn!(
                    "Waitlist signup failed (domain: {}): {} -> {:?}",
                    entry.email_domain(),
                    e,
                    failure
                );
                Err(failure)
            }
        }
    }
}

/// Map a store error to a user-facing failure category.
pub fn classify(err: &StoreError) -> SubmitFailure {
    match err {
        StoreError::Transport(_) => SubmitFailure::Network,
        e if e.is_unique_violation() => SubmitFailure::Duplicate,
        StoreError::Rejected { .. } => SubmitFailure::Store,
    }
}

/// Holds the in-flight flag; clears it on drop, including when the submit
/// future is dropped before completing.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn entry(email: &str) -> Entry {
        Entry::normalized("Ada", email, "Other")
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(&StoreError::Transport("refused".into())),
            SubmitFailure::Network
        );
        assert_eq!(
            classify(&StoreError::Rejected {
                status: 409,
                code: Some("23505".into()),
                message: String::new(),
            }),
            SubmitFailure::Duplicate
        );
        assert_eq!(
            classify(&StoreError::Rejected {
                status: 500,
                code: Some("XX000".into()),
                message: String::new(),
            }),
            SubmitFailure::Store
        );
        assert_eq!(
            classify(&StoreError::Rejected {
                status: 502,
                code: None,
                message: String::new(),
            }),
            SubmitFailure::Store
        );
    }

    #[test]
    fn test_guard_is_exclusive() {
        let flag = AtomicBool::new(false);
        let first = InFlightGuard::acquire(&flag);
        assert!(first.is_some());
        assert!(InFlightGuard::acquire(&flag).is_none());
        drop(first);
        assert!(!flag.load(Ordering::SeqCst));
        assert!(InFlightGuard::acquire(&flag).is_some());
    }

    #[tokio::test]
    async fn test_submit_then_duplicate() {
        let store = Arc::new(MemoryStore::new());
        let controller = SubmissionController::new(store.clone());

        assert_eq!(controller.submit(&entry("ada@example.com")).await, Ok(()));
        assert_eq!(
            controller.submit(&entry("ada@example.com")).await,
            Err(SubmitFailure::Duplicate)
        );
        assert_eq!(store.entries().len(), 1);
        assert!(!controller.is_in_flight());
    }
}

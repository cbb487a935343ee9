//! In-memory waitlist store for tests and the offline demo

use super::{StoreError, WaitlistStore, UNIQUE_VIOLATION_CODE};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use waitlist_common::Entry;

/// Holds entries in a `Vec`, enforcing a unique email like the real table.
///
/// Can be told to behave as unreachable or to reject the next insert with a
/// given code, to drive every failure path.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<Entry>>,
    unreachable: AtomicBool,
    reject_next: Mutex<Option<String>>,
    attempts: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing signups.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Reject the next insert with this error code.
    pub fn reject_next(&self, code: impl Into<String>) {
        *lock(&self.reject_next) = Some(code.into());
    }

    pub fn entries(&self) -> Vec<Entry> {
        lock(&self.entries).clone()
    }

    /// Inserts attempted, including failed ones.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WaitlistStore for MemoryStore {
    async fn insert(&self, entry: &Entry) -> Result<(), StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.unreachable.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("store unreachable".to_string()));
        }

        if let Some(code) = lock(&self.reject_next).take() {
            return Err(StoreError::Rejected {
                status: 400,
                code: Some(code),
                message: "insert rejected".to_string(),
            });
        }

        let mut entries = lock(&self.entries);
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(StoreError::Rejected {
                status: 409,
                code: Some(UNIQUE_VIOLATION_CODE.to_string()),
                message: "duplicate key value violates unique constraint".to_string(),
            });
        }
        entries.push(entry.clone());
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

//! Waitlist store trait and implementations

#[cfg(any(test, feature = "test-utils"))]
mod memory;
mod supabase;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

use async_trait::async_trait;
use thiserror::Error;
use waitlist_common::Entry;

/// PostgreSQL SQLSTATE for `unique_violation`, passed through by PostgREST.
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

#[derive(Error, Debug)]
pub enum StoreError {
    /// The store answered but refused the insert
    #[error("Store rejected insert (HTTP {status}): {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },
    /// The store could not be reached or its answer could not be read
    #[error("Transport error: {0}")]
    Transport(String),
}

impl StoreError {
    /// Whether the store refused the insert because the email already exists.
    ///
    /// Only the uniqueness SQLSTATE counts; any other or missing code is a
    /// generic failure.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Rejected { code: Some(code), .. } if code == UNIQUE_VIOLATION_CODE
        )
    }
}

/// Persistence for waitlist signups: a single-record insert
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait WaitlistStore: Send + Sync {
    async fn insert(&self, entry: &Entry) -> Result<(), StoreError>;
}

//! waitlist-core - store access, submission and configuration for the waitlist modal

pub mod config;
pub mod store;
pub mod submission;

pub use config::{Config, ConfigError};
pub use store::{StoreError, SupabaseStore, WaitlistStore};
pub use submission::SubmissionController;

#[cfg(any(test, feature = "test-utils"))]
pub use store::MemoryStore;

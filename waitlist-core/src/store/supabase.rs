//! Supabase (PostgREST) waitlist store

use super::{StoreError, WaitlistStore};
use crate::config::Config;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use waitlist_common::Entry;

/// Row shape of the waitlist table
#[derive(Serialize)]
struct EntryRow<'a> {
    name: &'a str,
    email: &'a str,
    country: &'a str,
}

impl<'a> From<&'a Entry> for EntryRow<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            name: &entry.name,
            email: &entry.email,
            country: &entry.country,
        }
    }
}

/// PostgREST error body
#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
}

/// Inserts signups through the PostgREST endpoint of a Supabase project.
#[derive(Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    endpoint: String,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(store_url: &str, anon_key: impl Into<String>, table: &str) -> Self {
        Self::with_client(reqwest::Client::new(), store_url, anon_key, table)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.store_url, config.anon_key.clone(), &config.table)
    }

    /// Use a caller-provided HTTP client (timeouts, proxies).
    pub fn with_client(
        client: reqwest::Client,
        store_url: &str,
        anon_key: impl Into<String>,
        table: &str,
    ) -> Self {
        let endpoint = format!("{}/rest/v1/{}", store_url.trim_end_matches('/'), table);
        Self {
            client,
            endpoint,
            anon_key: anon_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WaitlistStore for SupabaseStore {
    async fn insert(&self, entry: &Entry) -> Result<(), StoreError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[EntryRow::from(entry)])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        debug!("Waitlist insert failed with HTTP {}: {}", status, body);

        Err(rejection_from_body(status.as_u16(), &body))
    }
}

/// Map a non-2xx response body to a `StoreError::Rejected`.
///
/// Bodies that are not PostgREST errors keep no code, so they can never be
/// mistaken for a uniqueness violation.
fn rejection_from_body(status: u16, body: &str) -> StoreError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => {
            let message = match (err.message, err.details) {
                (Some(message), Some(details)) => format!("{message} ({details})"),
                (Some(message), None) => message,
                (None, Some(details)) => details,
                (None, None) => body.to_string(),
            };
            StoreError::Rejected {
                status,
                code: err.code.filter(|c| !c.is_empty()),
                message,
            }
        }
        Err(_) => StoreError::Rejected {
            status,
            code: None,
            message: body.to_string(),
        },
    }
}

use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use waitlist_common::CountryTable;
use waitlist_core::{Config, ConfigError, SubmissionController, SupabaseStore, WaitlistStore};

/// Everything the waitlist modal needs from outside, provided as context at launch
#[derive(Clone)]
pub struct WaitlistServices {
    pub controller: SubmissionController,
    pub countries: CountryTable,
    /// How long the success view shows before the modal closes itself
    pub success_display: Duration,
    pub product_name: String,
}

impl WaitlistServices {
    pub fn new(
        store: Arc<dyn WaitlistStore>,
        countries: CountryTable,
        success_display: Duration,
        product_name: impl Into<String>,
    ) -> Self {
        Self {
            controller: SubmissionController::new(store),
            countries,
            success_display,
            product_name: product_name.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        info!(
            "Waitlist store: {}/rest/v1/{}",
            config.store_url.trim_end_matches('/'),
            config.table
        );
        Self::new(
            Arc::new(SupabaseStore::from_config(config)),
            CountryTable::default(),
            config.success_display(),
            config.product_name.clone(),
        )
    }

    /// Services backed by an in-memory store, for running without a project.
    #[cfg(feature = "demo")]
    pub fn demo() -> Self {
        use waitlist_core::config::{DEFAULT_PRODUCT_NAME, DEFAULT_SUCCESS_DISPLAY_MS};

        Self::new(
            Arc::new(waitlist_core::MemoryStore::new()),
            CountryTable::default(),
            Duration::from_millis(DEFAULT_SUCCESS_DISPLAY_MS),
            DEFAULT_PRODUCT_NAME,
        )
    }

    pub fn load() -> Result<Self, ConfigError> {
        match load_config() {
            Ok(config) => Ok(Self::from_config(&config)),
            #[cfg(feature = "demo")]
            Err(e) => {
                tracing::warn!("{e}; falling back to the in-memory demo store");
                Ok(Self::demo())
            }
            #[cfg(not(feature = "demo"))]
            Err(e) => Err(e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> Result<Config, ConfigError> {
    Config::from_env()
}

/// The browser has no environment; values are baked in when the bundle is built.
#[cfg(target_arch = "wasm32")]
fn load_config() -> Result<Config, ConfigError> {
    Config::from_lookup(|key| {
        let value = match key {
            "WAITLIST_STORE_URL" => option_env!("WAITLIST_STORE_URL"),
            "WAITLIST_ANON_KEY" => option_env!("WAITLIST_ANON_KEY"),
            "WAITLIST_TABLE" => option_env!("WAITLIST_TABLE"),
            "WAITLIST_SUCCESS_DISPLAY_MS" => option_env!("WAITLIST_SUCCESS_DISPLAY_MS"),
            "WAITLIST_PRODUCT_NAME" => option_env!("WAITLIST_PRODUCT_NAME"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

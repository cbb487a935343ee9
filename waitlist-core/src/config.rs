use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TABLE: &str = "waitlist";
pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 2000;
pub const DEFAULT_PRODUCT_NAME: &str = "ScribeSchedule";
/// Browser timers take a 32-bit millisecond delay
pub const MAX_SUCCESS_DISPLAY_MS: u64 = u32::MAX as u64;

const KEY_STORE_URL: &str = "WAITLIST_STORE_URL";
const KEY_ANON_KEY: &str = "WAITLIST_ANON_KEY";
const KEY_TABLE: &str = "WAITLIST_TABLE";
const KEY_SUCCESS_DISPLAY_MS: &str = "WAITLIST_SUCCESS_DISPLAY_MS";
const KEY_PRODUCT_NAME: &str = "WAITLIST_PRODUCT_NAME";

/// Configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("YAML error: {0}")]
    Yaml(String),
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_success_display_ms() -> u64 {
    DEFAULT_SUCCESS_DISPLAY_MS
}

fn default_product_name() -> String {
    DEFAULT_PRODUCT_NAME.to_string()
}

/// YAML config file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigYaml {
    pub store_url: String,
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    /// How long the success view stays up before the modal closes
    #[serde(default = "default_success_display_ms")]
    pub success_display_ms: u64,
    /// Product named in the modal copy
    #[serde(default = "default_product_name")]
    pub product_name: String,
}

/// Waitlist configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the Supabase project, e.g. `https://xyz.supabase.co`
    pub store_url: String,
    /// Public (anon) API key
    pub anon_key: String,
    pub table: String,
    pub success_display_ms: u64,
    pub product_name: String,
}

impl Config {
    /// Load from `.env` (if present) and the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            tracing::info!("Loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store_url = get(KEY_STORE_URL).ok_or(ConfigError::Missing(KEY_STORE_URL))?;
        let anon_key = get(KEY_ANON_KEY).ok_or(ConfigError::Missing(KEY_ANON_KEY))?;
        let table = get(KEY_TABLE).unwrap_or_else(default_table);
        let success_display_ms = match get(KEY_SUCCESS_DISPLAY_MS) {
            Some(value) => value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: KEY_SUCCESS_DISPLAY_MS,
                value,
            })?,
            None => DEFAULT_SUCCESS_DISPLAY_MS,
        };
        let product_name = get(KEY_PRODUCT_NAME).unwrap_or_else(default_product_name);

        Self::validated(store_url, anon_key, table, success_display_ms, product_name)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigYaml =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Yaml(e.to_string()))?;
        Self::validated(
            parsed.store_url,
            parsed.anon_key,
            parsed.table,
            parsed.success_display_ms,
            parsed.product_name,
        )
    }

    fn validated(
        store_url: String,
        anon_key: String,
        table: String,
        success_display_ms: u64,
        product_name: String,
    ) -> Result<Self, ConfigError> {
        if !(store_url.starts_with("http://") || store_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: KEY_STORE_URL,
                value: store_url,
            });
        }
        if anon_key.trim().is_empty() {
            return Err(ConfigError::Missing(KEY_ANON_KEY));
        }
        if table.trim().is_empty() || table.contains('/') {
            return Err(ConfigError::Invalid {
                key: KEY_TABLE,
                value: table,
            });
        }

        if success_display_ms > MAX_SUCCESS_DISPLAY_MS {
            return Err(ConfigError::Invalid {
                key: KEY_SUCCESS_DISPLAY_MS,
                value: success_display_ms.to_string(),
            });
        }

        Ok(Self {
            store_url,
            anon_key,
            table,
            success_display_ms,
            product_name,
        })
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("WAITLIST_STORE_URL", "https://abc.supabase.co"),
            ("WAITLIST_ANON_KEY", "anon-key"),
        ]))
        .unwrap();
        assert_eq!(config.table, "waitlist");
        assert_eq!(config.success_display(), Duration::from_millis(2000));
        assert_eq!(config.product_name, "ScribeSchedule");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("WAITLIST_STORE_URL", "http://localhost:54321"),
            ("WAITLIST_ANON_KEY", "anon-key"),
            ("WAITLIST_TABLE", "beta_waitlist"),
            ("WAITLIST_SUCCESS_DISPLAY_MS", "500"),
            ("WAITLIST_PRODUCT_NAME", "Acme"),
        ]))
        .unwrap();
        assert_eq!(config.table, "beta_waitlist");
        assert_eq!(config.success_display_ms, 500);
        assert_eq!(config.product_name, "Acme");
    }

    #[test]
    fn test_missing_and_empty_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[("WAITLIST_ANON_KEY", "k")])),
            Err(ConfigError::Missing("WAITLIST_STORE_URL"))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[
                ("WAITLIST_STORE_URL", "https://abc.supabase.co"),
                ("WAITLIST_ANON_KEY", "  "),
            ])),
            Err(ConfigError::Missing("WAITLIST_ANON_KEY"))
        );
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[
            ("WAITLIST_STORE_URL", "https://abc.supabase.co"),
            ("WAITLIST_ANON_KEY", "k"),
            ("WAITLIST_SUCCESS_DISPLAY_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "WAITLIST_SUCCESS_DISPLAY_MS", .. }));

        let err = Config::from_lookup(lookup(&[
            ("WAITLIST_STORE_URL", "abc.supabase.co"),
            ("WAITLIST_ANON_KEY", "k"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "WAITLIST_STORE_URL", .. }));
    }

    #[test]
    fn test_success_display_fits_browser_timer() {
        let at_limit = Config::from_lookup(lookup(&[
            ("WAITLIST_STORE_URL", "https://abc.supabase.co"),
            ("WAITLIST_ANON_KEY", "k"),
            ("WAITLIST_SUCCESS_DISPLAY_MS", "4294967295"),
        ]))
        .unwrap();
        assert_eq!(at_limit.success_display_ms, u32::MAX as u64);

        assert_eq!(
            Config::from_lookup(lookup(&[
                ("WAITLIST_STORE_URL", "https://abc.supabase.co"),
                ("WAITLIST_ANON_KEY", "k"),
                ("WAITLIST_SUCCESS_DISPLAY_MS", "4294967296"),
            ])),
            Err(ConfigError::Invalid {
                key: "WAITLIST_SUCCESS_DISPLAY_MS",
                value: "4294967296".to_string(),
            })
        );

        let yaml = "store_url: https://abc.supabase.co\nanon_key: k\nsuccess_display_ms: 5000000000\n";
        assert!(matches!(
            Config::from_yaml_str(yaml),
            Err(ConfigError::Invalid { key: "WAITLIST_SUCCESS_DISPLAY_MS", .. })
        ));
    }

    #[test]
    fn test_yaml() {
        let yaml = r#"
store_url: https://abc.supabase.co
anon_key: anon-key
success_display_ms: 1500
"#;
        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.store_url, "https://abc.supabase.co");
        assert_eq!(config.table, "waitlist");
        assert_eq!(config.success_display_ms, 1500);

        assert!(matches!(
            Config::from_yaml_str("anon_key: k"),
            Err(ConfigError::Yaml(_))
        ));
    }
}

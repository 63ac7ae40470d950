//! Backend connection settings.

use serde::{Deserialize, Serialize};
use shop_commerce::search::{DEFAULT_DEBOUNCE_MS, DEFAULT_SEARCH_LIMIT};
use thiserror::Error;

/// Backend used when nothing is configured (local development).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
pub const SEARCH_LIMIT_VAR: &str = "STOREFRONT_SEARCH_LIMIT";
pub const SEARCH_DEBOUNCE_VAR: &str = "STOREFRONT_SEARCH_DEBOUNCE_MS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings for reaching the storefront backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Products requested per catalog search.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// Quiet period before a typed search is sent.
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_search_limit() -> u32 {
    DEFAULT_SEARCH_LIMIT
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_limit: default_search_limit(),
            search_debounce_ms: default_debounce_ms(),
        }
    }
}

impl ApiConfig {
    /// Build from the process environment, falling back to values baked in
    /// at compile time and then to the defaults.
    ///
    /// In the browser there is no process environment, so only the
    /// compile-time values apply.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| runtime_var(key).or_else(|| compile_time_var(key)))
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BACKEND_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup(SEARCH_LIMIT_VAR) {
            config.search_limit = parse(SEARCH_LIMIT_VAR, &raw)?;
        }
        if let Some(raw) = lookup(SEARCH_DEBOUNCE_VAR) {
            config.search_debounce_ms = parse(SEARCH_DEBOUNCE_VAR, &raw)?;
        }

        Ok(config)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_key: &str) -> Option<String> {
    None
}

fn compile_time_var(key: &str) -> Option<String> {
    let value = match key {
        BACKEND_URL_VAR => option_env!("BACKEND_URL"),
        SEARCH_LIMIT_VAR => option_env!("STOREFRONT_SEARCH_LIMIT"),
        SEARCH_DEBOUNCE_VAR => option_env!("STOREFRONT_SEARCH_DEBOUNCE_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

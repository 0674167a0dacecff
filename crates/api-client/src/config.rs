//! Configuration for the PokéAPI client
//!
//! Values layer in this order: built-in defaults, the `[api]` table of the
//! configuration file, then environment variables.

use crate::error::{ApiError, ApiResult};
use pokedex_core::config::ApiConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Public PokéAPI v2 root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Entries requested from the catalog endpoint: the first generation
pub const DEFAULT_CATALOG_LIMIT: u32 = 151;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST API
    pub base_url: String,
    /// Number of entries fetched for the listing
    pub catalog_limit: u32,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            catalog_limit: DEFAULT_CATALOG_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables on top of defaults
    ///
    /// Reads the following environment variables:
    /// - `POKEDEX_API_URL`: Base URL of the REST API
    /// - `POKEDEX_TIMEOUT_SECS`: Request timeout in seconds
    /// - `POKEDEX_CATALOG_LIMIT`: Number of catalog entries to fetch
    pub fn from_env() -> ApiResult<Self> {
        Self::default().merge_env()
    }

    /// Apply environment overrides to this configuration
    pub fn merge_env(self) -> ApiResult<Self> {
        self.merge_vars(|key| env::var(key).ok())
    }

    /// Apply overrides from any variable source
    ///
    /// Unparseable numbers are rejected rather than silently ignored.
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        if let Some(url) = lookup("POKEDEX_API_URL").filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup("POKEDEX_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ApiError::config(format!("POKEDEX_TIMEOUT_SECS is not a number: {raw}")))?;
            self.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup("POKEDEX_CATALOG_LIMIT") {
            self.catalog_limit = raw.trim().parse().map_err(|_| {
                ApiError::config(format!("POKEDEX_CATALOG_LIMIT is not a number: {raw}"))
            })?;
        }

        Ok(self)
    }

    /// Apply the `[api]` table of a loaded configuration file
    #[must_use]
    pub fn with_file_settings(mut self, api: &ApiConfig) -> Self {
        if let Some(ref url) = api.base_url {
            self.base_url.clone_from(url);
        }
        if let Some(limit) = api.catalog_limit {
            self.catalog_limit = limit;
        }
        if let Some(secs) = api.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the catalog size
    #[must_use]
    pub fn with_catalog_limit(mut self, limit: u32) -> Self {
        self.catalog_limit = limit;
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(self.base_url.clone()));
        }

        if self.catalog_limit == 0 {
            return Err(ApiError::config("catalog_limit must be at least 1"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.catalog_limit, 151);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::default()
            .merge_vars(vars(&[
                ("POKEDEX_API_URL", "http://localhost:8000/api/v2"),
                ("POKEDEX_TIMEOUT_SECS", "5"),
                ("POKEDEX_CATALOG_LIMIT", "20"),
            ]))
            .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000/api/v2");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.catalog_limit, 20);
    }

    #[test]
    fn test_bad_env_number_is_an_error() {
        let err = ClientConfig::default()
            .merge_vars(vars(&[("POKEDEX_CATALOG_LIMIT", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_file_settings_then_env() {
        let api = ApiConfig {
            base_url: Some("https://mirror.example/api/v2".to_string()),
            catalog_limit: Some(30),
            timeout_secs: None,
        };
        let config = ClientConfig::default()
            .with_file_settings(&api)
            .merge_vars(vars(&[("POKEDEX_CATALOG_LIMIT", "10")]))
            .unwrap();

        assert_eq!(config.base_url, "https://mirror.example/api/v2");
        assert_eq!(config.catalog_limit, 10);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(matches!(
            ClientConfig::default().with_base_url("ftp://x").validate(),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(ClientConfig::default().with_catalog_limit(0).validate().is_err());
        assert!(ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}

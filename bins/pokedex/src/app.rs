//! Settings shared by every command

use anyhow::{Context, Result};
use pokedex_api_client::{ApiError, ClientConfig, PokeApiClient};
use pokedex_core::config::{Config, DisplayConfig};
use pokedex_core::error::exit_codes;
use pokedex_search::SearchOptions;
use tracing::debug;

/// Resolved configuration and the HTTP client built from it
pub struct App {
    pub client: PokeApiClient,
    pub search: SearchOptions,
    pub display: DisplayConfig,
    pub json: bool,
}

impl App {
    /// Layer the config file, environment and command-line flags.
    pub fn load(config_path: Option<&str>, threshold: Option<f64>, format: &str) -> Result<Self> {
        let config = Config::load(config_path)?;

        let mut search = config.schema.search.clone();
        if let Some(t) = threshold {
            search = search.with_threshold(t);
            search
                .validate()
                .map_err(pokedex_core::Error::from)
                .context("Invalid --threshold")?;
        }

        let client_config = ClientConfig::default()
            .with_file_settings(&config.schema.api)
            .merge_env()?;
        debug!(
            base_url = %client_config.base_url,
            catalog_limit = client_config.catalog_limit,
            threshold = search.threshold,
            config_file = ?config.path,
            "Configuration resolved"
        );

        Ok(Self {
            client: PokeApiClient::with_config(client_config)?,
            search,
            display: config.schema.display,
            json: format == "json",
        })
    }
}

/// Process exit code for a failed command.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    let code = if let Some(e) = error.downcast_ref::<pokedex_core::Error>() {
        e.exit_code()
    } else if let Some(e) = error.downcast_ref::<ApiError>() {
        if e.is_not_found() {
            exit_codes::NOT_FOUND
        } else if matches!(e, ApiError::Config(_) | ApiError::InvalidUrl(_)) {
            exit_codes::CONFIG_ERROR
        } else if e.is_transport() {
            exit_codes::NETWORK_ERROR
        } else {
            exit_codes::FAILURE
        }
    } else {
        exit_codes::FAILURE
    };

    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = anyhow::Error::new(pokedex_core::Error::entry_not_found(9999));
        assert_eq!(exit_code(&not_found), 2);

        let bad_config = anyhow::Error::new(ApiError::config("catalog_limit must be at least 1"));
        assert_eq!(exit_code(&bad_config), 3);

        let offline = anyhow::Error::new(pokedex_core::Error::catalog_unavailable("offline"));
        assert_eq!(exit_code(&offline), 4);

        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }

    #[test]
    fn test_context_keeps_exit_code() {
        let err = anyhow::Error::new(pokedex_core::Error::config_validation("bad"))
            .context("Invalid --threshold");
        assert_eq!(exit_code(&err), 3);
    }
}

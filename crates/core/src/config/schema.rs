//! Configuration schema definitions

use pokedex_search::SearchOptions;
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchOptions,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Remote catalog settings. Unset fields fall back to the client defaults
/// and may still be overridden by environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the REST API, e.g. `https://pokeapi.co/api/v2`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Number of entries requested from the catalog endpoint
    #[serde(default)]
    pub catalog_limit: Option<u32>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Terminal rendering settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Number of moves shown on a detail page
    #[serde(default = "default_move_count")]
    pub move_count: usize,

    /// Maximum cards per row on the listing; `0` fits the terminal width
    #[serde(default)]
    pub columns: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            move_count: default_move_count(),
            columns: 0,
        }
    }
}

fn default_move_count() -> usize {
    6
}

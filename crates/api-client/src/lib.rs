//! HTTP client for the PokéAPI catalog and detail endpoints
//!
//! # Features
//!
//! - **Layered configuration**: defaults, config file and environment variables
//! - **Typed endpoints**: the catalog page and per-entry detail records
//! - **Status mapping**: `404` surfaces as [`ApiError::NotFound`]
//! - **Request correlation**: every request carries a unique `X-Request-ID`
//!
//! # Example
//!
//! ```rust,no_run
//! use pokedex_api_client::PokeApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PokeApiClient::new()?;
//!
//!     let entries = client.catalog().list_entries().await?;
//!     println!("Fetched {} entries", entries.len());
//!
//!     let pikachu = client.pokemon().get(25).await?;
//!     println!("{} weighs {} kg", pikachu.name, pikachu.weight_kg());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::PokeApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::PokeApiClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{CatalogApi, PokemonApi};
    pub use crate::error::{ApiError, ApiResult};
}

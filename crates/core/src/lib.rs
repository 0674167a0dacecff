//! Core model and view state for the Pokédex browser
//!
//! This crate provides shared functionality for the browser front-ends:
//!
//! - **Error handling**: Errors with codes, context and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Catalog**: Entries numbered by fetch order
//! - **Detail**: Detail records and the derived values a detail page shows
//! - **Routing**: `/` and `/pokemon/{id}` resolution
//! - **Views**: Listing and detail page state with an explicit lifecycle
//!
//! # Example
//!
//! ```rust
//! use pokedex_core::{catalog::{CatalogEntry, CatalogRecord}, view::ListingView};
//!
//! let records = vec![CatalogRecord {
//!     name: "pikachu".to_string(),
//!     url: "https://pokeapi.co/api/v2/pokemon/25/".to_string(),
//! }];
//!
//! let mut view = ListingView::default();
//! view.populate(CatalogEntry::enrich(records).unwrap());
//! view.set_query("pika");
//! assert_eq!(view.results()[0].item.id(), 1);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod palette;
pub mod route;
pub mod view;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{CatalogEntry, CatalogPage, CatalogRecord};
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::detail::{PokemonDetail, StatLine};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::palette::{stat_swatch, type_swatch, Swatch};
    pub use crate::route::Route;
    pub use crate::view::{DetailView, ListingStatus, ListingView, ViewPhase};
}

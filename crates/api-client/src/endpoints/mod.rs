//! API endpoint modules

mod catalog;
mod pokemon;

pub use catalog::CatalogApi;
pub use pokemon::PokemonApi;

//! Configuration loading and schema definitions
//!
//! Settings come from a TOML file; every field has a default so an absent
//! file is equivalent to an empty one.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;

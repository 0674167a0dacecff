//! CLI command implementations

pub mod browse;
pub mod list;
pub mod open;
pub mod show;

//! Terminal rendering for the Pokédex browser
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Progress spinner for network fetches
//! - Listing and detail page renderers

#![warn(missing_docs)]

pub mod output;
pub mod progress;
pub mod render;

//! Fuzzy search with match highlighting for the Pokédex browser.
//!
//! This crate provides:
//! - Bitap-based approximate matching with a normalized `[0, 1]` score
//! - Character spans describing which parts of a key matched
//! - Splitting labels into plain/highlighted segments
//! - An index memoized on the identity of its item list
//!
//! # Example
//!
//! ```rust
//! use pokedex_search::{segments, FuzzyIndex, SearchOptions};
//!
//! let names = vec!["bulbasaur".to_string(), "charmander".to_string()];
//! let index = FuzzyIndex::build(names, SearchOptions::default());
//!
//! let results = index.search("char");
//! assert_eq!(results.len(), 1);
//!
//! let parts = segments(&results[0].item, &results[0].spans);
//! assert_eq!(parts[0].text, "char");
//! assert!(parts[0].highlighted);
//! ```

#![warn(missing_docs)]

mod bitap;
mod error;
mod highlight;
mod index;
mod memo;
mod options;
mod span;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, SearchError};
pub use highlight::{render_with, segments, Segment};
pub use index::{FuzzyIndex, SearchResult, Searchable};
pub use memo::MemoizedIndex;
pub use options::{SearchOptions, DEFAULT_DISTANCE, DEFAULT_THRESHOLD};
pub use span::{normalize_spans, MatchSpan};

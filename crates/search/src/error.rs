//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while configuring a search.
///
/// Queries themselves never fail: garbage input simply matches nothing.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Threshold outside of `[0, 1]` or not a finite number
    #[error("Invalid threshold: {0} (expected a value between 0.0 and 1.0)")]
    InvalidThreshold(f64),

    /// Any other out-of-range option
    #[error("Invalid search option `{name}`: {reason}")]
    InvalidOption {
        /// Option name as it appears in configuration
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

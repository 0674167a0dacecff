//! Tuning knobs for the fuzzy matcher.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Default distance threshold. Results scoring above it are dropped.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Default number of characters a match may drift from `location`
/// before it counts as a full mismatch.
pub const DEFAULT_DISTANCE: usize = 100;

/// Options controlling approximate matching.
///
/// Scores are normalized to `[0, 1]` where `0` is a perfect match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum accepted score. `0.0` requires a perfect match, `1.0` matches anything.
    pub threshold: f64,
    /// Character offset where the match is expected to start.
    pub location: usize,
    /// How far from `location` a match may be found. Every `distance`
    /// characters of drift adds `1.0` to the score.
    pub distance: usize,
    /// Shortest run of matched characters reported as a span.
    pub min_match_char_length: usize,
    /// Keep scanning the whole text even after a perfect match was found.
    pub find_all_matches: bool,
    /// Score on edit errors alone, ignoring where the match sits.
    pub ignore_location: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            location: 0,
            distance: DEFAULT_DISTANCE,
            min_match_char_length: 1,
            find_all_matches: false,
            ignore_location: false,
        }
    }
}

impl SearchOptions {
    /// Builder-style method to set the threshold
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder-style method to set the expected location
    #[must_use]
    pub fn with_location(mut self, location: usize) -> Self {
        self.location = location;
        self
    }

    /// Builder-style method to set the distance
    #[must_use]
    pub fn with_distance(mut self, distance: usize) -> Self {
        self.distance = distance;
        self
    }

    /// Builder-style method to set the minimum span length
    #[must_use]
    pub fn with_min_match_char_length(mut self, len: usize) -> Self {
        self.min_match_char_length = len;
        self
    }

    /// Builder-style method to toggle exhaustive scanning
    #[must_use]
    pub fn with_find_all_matches(mut self, enabled: bool) -> Self {
        self.find_all_matches = enabled;
        self
    }

    /// Builder-style method to toggle location-insensitive scoring
    #[must_use]
    pub fn with_ignore_location(mut self, enabled: bool) -> Self {
        self.ignore_location = enabled;
        self
    }

    /// Validate option ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::InvalidThreshold(self.threshold));
        }

        if self.min_match_char_length == 0 {
            return Err(SearchError::InvalidOption {
                name: "min_match_char_length",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SearchOptions::default();
        assert!((options.threshold - 0.4).abs() < f64::EPSILON);
        assert_eq!(options.location, 0);
        assert_eq!(options.distance, 100);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_threshold_out_of_range() {
        assert!(SearchOptions::default().with_threshold(1.5).validate().is_err());
        assert!(SearchOptions::default().with_threshold(-0.1).validate().is_err());
        assert!(SearchOptions::default().with_threshold(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_zero_min_match_length_rejected() {
        let options = SearchOptions::default().with_min_match_char_length(0);
        assert!(matches!(
            options.validate(),
            Err(SearchError::InvalidOption { name: "min_match_char_length", .. })
        ));
    }

    #[test]
    fn test_partial_options_use_defaults() {
        let options: SearchOptions = serde_json::from_str(r#"{"threshold": 0.2}"#).unwrap();
        assert!((options.threshold - 0.2).abs() < f64::EPSILON);
        assert_eq!(options.distance, DEFAULT_DISTANCE);
    }
}

//! Match spans over character offsets.

use serde::{Deserialize, Serialize};

/// A contiguous run of matched characters, `start..=end`, counted in `char`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    /// First matched character
    pub start: usize,
    /// Last matched character (inclusive)
    pub end: usize,
}

impl MatchSpan {
    /// Create a span. `end` is inclusive.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    /// Number of characters covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Spans always cover at least one character.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the character at `offset` falls inside this span.
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        (self.start..=self.end).contains(&offset)
    }
}

impl From<(usize, usize)> for MatchSpan {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// Sort, clamp to `char_len` and merge overlapping or touching spans.
///
/// The output is ascending, non-overlapping and lies within `0..char_len`.
#[must_use]
pub fn normalize_spans(spans: &[MatchSpan], char_len: usize) -> Vec<MatchSpan> {
    if char_len == 0 {
        return Vec::new();
    }

    let mut clamped: Vec<MatchSpan> = spans
        .iter()
        .filter(|span| span.start < char_len && span.start <= span.end)
        .map(|span| MatchSpan::new(span.start, span.end.min(char_len - 1)))
        .collect();
    clamped.sort_unstable();

    let mut merged: Vec<MatchSpan> = Vec::with_capacity(clamped.len());
    for span in clamped {
        match merged.last_mut() {
            Some(last) if span.start <= last.end + 1 => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

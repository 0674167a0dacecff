//! Bitap (shift-and with errors) approximate matching.
//!
//! Every candidate is scored as `errors / pattern_len` plus a proximity
//! penalty of `|expected - found| / distance`. Besides the score, the
//! matcher records which characters of the text agreed with the pattern
//! inside the scanned window; those runs become the highlight spans.

use crate::options::SearchOptions;
use crate::span::{normalize_spans, MatchSpan};
use std::collections::HashMap;

/// Longest pattern a single bit vector can hold.
pub(crate) const MAX_BITS: usize = 32;

/// Lowest score reported for anything short of an identical string.
const MIN_SCORE: f64 = 0.001;

/// Outcome of matching a pattern against one text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BitapMatch {
    pub is_match: bool,
    /// Best score accepted by the threshold, `1.0` when nothing matched.
    pub raw_score: f64,
    /// `raw_score` floored at [`MIN_SCORE`] unless the text is identical.
    pub score: f64,
    pub spans: Vec<MatchSpan>,
}

impl BitapMatch {
    fn miss() -> Self {
        Self {
            is_match: false,
            raw_score: 1.0,
            score: 1.0,
            spans: Vec::new(),
        }
    }
}

/// Lowercase character-by-character so offsets line up with the original.
pub(crate) fn fold_case(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// A slice of the pattern small enough for one bit vector.
#[derive(Debug, Clone)]
struct Chunk {
    pattern: Vec<char>,
    alphabet: HashMap<char, u32>,
    start_index: usize,
}

impl Chunk {
    fn new(pattern: &[char], start_index: usize) -> Self {
        Self {
            pattern: pattern.to_vec(),
            alphabet: pattern_alphabet(pattern),
            start_index,
        }
    }
}

/// Bit `len - i - 1` is set for every position `i` holding the character.
fn pattern_alphabet(pattern: &[char]) -> HashMap<char, u32> {
    let len = pattern.len();
    let mut alphabet = HashMap::with_capacity(len);
    for (i, &c) in pattern.iter().enumerate() {
        *alphabet.entry(c).or_insert(0) |= 1u32 << (len - i - 1);
    }
    alphabet
}

/// Compiled query, reusable across every text in an index.
#[derive(Debug, Clone)]
pub(crate) struct BitapSearcher {
    pattern: Vec<char>,
    chunks: Vec<Chunk>,
    options: SearchOptions,
}

impl BitapSearcher {
    /// Compile a query. The pattern is case-folded.
    pub(crate) fn new(query: &str, options: &SearchOptions) -> Self {
        let pattern = fold_case(query);
        let len = pattern.len();
        let mut chunks = Vec::new();

        if len > MAX_BITS {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            let mut i = 0;
            while i < end {
                chunks.push(Chunk::new(&pattern[i..i + MAX_BITS], i));
                i += MAX_BITS;
            }
            if remainder > 0 {
                let start = len - MAX_BITS;
                chunks.push(Chunk::new(&pattern[start..], start));
            }
        } else if len > 0 {
            chunks.push(Chunk::new(&pattern, 0));
        }

        Self {
            pattern,
            chunks,
            options: options.clone(),
        }
    }

    /// Match against an already case-folded text.
    pub(crate) fn search_in(&self, text: &[char]) -> BitapMatch {
        if self.chunks.is_empty() || text.is_empty() {
            return BitapMatch::miss();
        }

        if self.pattern == text {
            return BitapMatch {
                is_match: true,
                raw_score: 0.0,
                score: 0.0,
                spans: vec![MatchSpan::new(0, text.len() - 1)],
            };
        }

        let mut has_match = false;
        let mut total_raw = 0.0;
        let mut spans = Vec::new();

        for chunk in &self.chunks {
            let outcome = search_chunk(
                text,
                chunk,
                self.options.location + chunk.start_index,
                &self.options,
            );
            total_raw += outcome.raw_score;
            if outcome.is_match {
                has_match = true;
                spans.extend(outcome.spans);
            }
        }

        if !has_match {
            return BitapMatch::miss();
        }

        #[allow(clippy::cast_precision_loss)]
        let raw_score = total_raw / self.chunks.len() as f64;
        BitapMatch {
            is_match: true,
            raw_score,
            score: raw_score.max(MIN_SCORE),
            spans: normalize_spans(&spans, text.len()),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_score(
    pattern_len: usize,
    errors: usize,
    current: usize,
    expected: usize,
    options: &SearchOptions,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    if options.ignore_location {
        return accuracy;
    }

    let proximity = current.abs_diff(expected);
    if options.distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }

    accuracy + proximity as f64 / options.distance as f64
}

/// Position of `pattern` in `text` at or after `from`.
fn find_exact(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if from >= text.len() || pattern.len() > text.len() - from {
        return None;
    }
    text[from..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|offset| from + offset)
}

/// Consecutive marked characters of at least `min_len` become spans.
fn mask_to_spans(mask: &[bool], min_len: usize) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &hit) in mask.iter().enumerate() {
        match (hit, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= min_len {
                    spans.push(MatchSpan::new(s, i - 1));
                }
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        if mask.len() - s >= min_len {
            spans.push(MatchSpan::new(s, mask.len() - 1));
        }
    }

    spans
}

fn search_chunk(
    text: &[char],
    chunk: &Chunk,
    location: usize,
    options: &SearchOptions,
) -> BitapMatch {
    let pattern = chunk.pattern.as_slice();
    let pattern_len = pattern.len();
    let text_len = text.len();
    let expected = location.min(text_len);

    let mut threshold = options.threshold;
    let mut match_mask = vec![false; text_len];

    // Exact occurrences tighten the threshold before the fuzzy pass.
    let mut from = expected;
    while let Some(index) = find_exact(text, pattern, from) {
        let score = compute_score(pattern_len, 0, index, expected, options);
        threshold = threshold.min(score);
        from = index + pattern_len;
        match_mask[index..index + pattern_len].fill(true);
    }

    let mut best_location: Option<usize> = None;
    let mut best_score = 1.0;
    let mut last_bits: Vec<u32> = Vec::new();
    let mut bin_max = pattern_len + text_len;
    let mask = 1u32 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // Widest window still able to beat the threshold with this many errors.
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            let score = compute_score(pattern_len, errors, expected + bin_mid, expected, options);
            if score <= threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (expected + 1).saturating_sub(bin_mid).max(1);
        let finish = if options.find_all_matches {
            text_len
        } else {
            (expected + bin_mid).min(text_len) + pattern_len
        };

        let mut bits = vec![0u32; finish + 2];
        bits[finish + 1] = (1u32 << errors) - 1;

        let mut j = finish;
        while j >= start {
            let current = j - 1;
            let char_match = text
                .get(current)
                .and_then(|c| chunk.alphabet.get(c))
                .copied()
                .unwrap_or(0);

            if current < text_len {
                match_mask[current] = char_match != 0;
            }

            bits[j] = ((bits[j + 1] << 1) | 1) & char_match;
            if errors > 0 {
                let prev_here = last_bits.get(j).copied().unwrap_or(0);
                let prev_next = last_bits.get(j + 1).copied().unwrap_or(0);
                bits[j] |= ((prev_next | prev_here) << 1) | 1 | prev_next;
            }

            if bits[j] & mask != 0 {
                let score = compute_score(pattern_len, errors, current, expected, options);
                if score <= threshold {
                    threshold = score;
                    best_score = score;
                    best_location = Some(current);

                    if current <= expected {
                        break;
                    }
                    start = (2 * expected).saturating_sub(current).max(1);
                }
            }

            j -= 1;
        }

        // One more error could not possibly beat the current best.
        let next = compute_score(pattern_len, errors + 1, expected, expected, options);
        if next > threshold {
            break;
        }
        last_bits = bits;
    }

    let spans = mask_to_spans(&match_mask, options.min_match_char_length);
    if best_location.is_none() || spans.is_empty() {
        return BitapMatch {
            raw_score: 1.0,
            ..BitapMatch::miss()
        };
    }

    BitapMatch {
        is_match: true,
        raw_score: best_score,
        score: best_score.max(MIN_SCORE),
        spans,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(query: &str, text: &str) -> BitapMatch {
        BitapSearcher::new(query, &SearchOptions::default()).search_in(&fold_case(text))
    }

    #[test]
    fn test_identical_text_scores_zero() {
        let result = run("pikachu", "Pikachu");
        assert!(result.is_match);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.spans, vec![MatchSpan::new(0, 6)]);
    }

    #[test]
    fn test_prefix_match() {
        let result = run("char", "charmander");
        assert!(result.is_match);
        assert!((result.score - MIN_SCORE).abs() < f64::EPSILON);
        assert_eq!(result.spans, vec![MatchSpan::new(0, 3)]);
    }

    #[test]
    fn test_substring_penalized_by_distance() {
        let result = run("saur", "bulbasaur");
        assert!(result.is_match);
        assert!((result.raw_score - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_typo_tolerated() {
        let result = run("pikchu", "pikachu");
        assert!(result.is_match);
        assert!(result.score > 0.0 && result.score <= 0.4);
        assert!(!result.spans.is_empty());
    }

    #[test]
    fn test_unrelated_text_rejected() {
        assert!(!run("char", "bulbasaur").is_match);
        assert!(!run("char", "squirtle").is_match);
        assert!(!run("zzz", "charmander").is_match);
    }

    #[test]
    fn test_long_patterns_are_chunked() {
        let text = "a".repeat(40);
        let searcher = BitapSearcher::new(&"a".repeat(40), &SearchOptions::default());
        assert_eq!(searcher.chunks.len(), 2);
        assert_eq!(searcher.chunks[1].start_index, 8);
        assert!(searcher.search_in(&fold_case(&text)).is_match);
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        assert!(!run("", "bulbasaur").is_match);
    }

    #[test]
    fn test_mask_to_spans_min_length() {
        let mask = [true, false, true, true, false, true];
        assert_eq!(
            mask_to_spans(&mask, 1),
            vec![MatchSpan::new(0, 0), MatchSpan::new(2, 3), MatchSpan::new(5, 5)]
        );
        assert_eq!(mask_to_spans(&mask, 2), vec![MatchSpan::new(2, 3)]);
    }

    #[test]
    fn test_pattern_alphabet_bits() {
        let alphabet = pattern_alphabet(&['a', 'b', 'a']);
        assert_eq!(alphabet[&'a'], 0b101);
        assert_eq!(alphabet[&'b'], 0b010);
    }

    #[test]
    fn test_fold_case_preserves_offsets() {
        let folded = fold_case("MR-MİME");
        assert_eq!(folded.len(), "MR-MİME".chars().count());
        assert_eq!(folded[0], 'm');
    }
}

//! WASM bindings for the search index.

use crate::{FuzzyIndex, MatchSpan, SearchOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct WasmResult {
    /// 1-based position in the input list
    id: usize,
    name: String,
    score: f64,
    spans: Vec<[usize; 2]>,
}

fn span_pairs(spans: &[MatchSpan]) -> Vec<[usize; 2]> {
    spans.iter().map(|s| [s.start, s.end]).collect()
}

/// Search a JSON array of names and return ranked results as JSON.
///
/// # Arguments
/// * `query` - Search query (empty returns every name)
/// * `names_json` - JSON array of strings, in catalog order
/// * `threshold` - Maximum accepted score; values outside `[0, 1]` fall back to the default
///
/// # Returns
/// JSON array of `{id, name, score, spans}`, best match first
#[wasm_bindgen]
pub fn search_names(query: &str, names_json: &str, threshold: f64) -> String {
    let Ok(names) = serde_json::from_str::<Vec<String>>(names_json) else {
        return "[]".to_string();
    };

    let mut options = SearchOptions::default().with_threshold(threshold);
    if options.validate().is_err() {
        options = SearchOptions::default();
    }

    let results: Vec<WasmResult> = FuzzyIndex::build(names, options)
        .search(query)
        .into_iter()
        .map(|r| WasmResult {
            id: r.position + 1,
            spans: span_pairs(&r.spans),
            name: r.item,
            score: r.score,
        })
        .collect();

    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}

/// Split a label into segments for rendering, as JSON `[{text, highlighted}]`.
///
/// `spans_json` is an array of inclusive `[start, end]` character pairs.
#[wasm_bindgen]
pub fn highlight_segments(text: &str, spans_json: &str) -> String {
    let pairs: Vec<[usize; 2]> = serde_json::from_str(spans_json).unwrap_or_default();
    let spans: Vec<MatchSpan> = pairs
        .into_iter()
        .filter(|[start, end]| start <= end)
        .map(|[start, end]| MatchSpan::new(start, end))
        .collect();

    serde_json::to_string(&crate::segments(text, &spans)).unwrap_or_else(|_| "[]".to_string())
}

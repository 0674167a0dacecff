//! The fuzzy search index.

use crate::bitap::{fold_case, BitapSearcher};
use crate::options::SearchOptions;
use crate::span::MatchSpan;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Anything that exposes a single text key to search on.
pub trait Searchable {
    /// The text matched against queries.
    fn search_key(&self) -> &str;
}

impl Searchable for String {
    fn search_key(&self) -> &str {
        self
    }
}

impl Searchable for &str {
    fn search_key(&self) -> &str {
        self
    }
}

/// Search result with score and highlight spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Position of the item in the indexed list
    pub position: usize,
    /// Match score in `[0, 1]` (lower is better, `0` is identical)
    pub score: f64,
    /// Matched character runs in the item's key, ascending and disjoint
    pub spans: Vec<MatchSpan>,
}

#[derive(Debug, Clone)]
struct IndexedKey {
    folded: Vec<char>,
}

/// Precomputed index over an ordered list of items.
///
/// The index keeps the list behind an [`Arc`] so callers can tell whether an
/// index was built from a given list without comparing contents.
#[derive(Debug, Clone)]
pub struct FuzzyIndex<T> {
    items: Arc<[T]>,
    keys: Vec<IndexedKey>,
    options: SearchOptions,
}

impl<T: Searchable + Clone> FuzzyIndex<T> {
    /// Build an index. An empty list is valid and matches nothing.
    pub fn build(items: impl Into<Arc<[T]>>, options: SearchOptions) -> Self {
        let items = items.into();
        let keys = items
            .iter()
            .map(|item| IndexedKey {
                folded: fold_case(item.search_key()),
            })
            .collect();

        Self {
            items,
            keys,
            options,
        }
    }

    /// The indexed items in their original order.
    #[must_use]
    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    /// Options the index was built with.
    #[must_use]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the index holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this index was built from exactly this list.
    #[must_use]
    pub fn is_built_from(&self, items: &Arc<[T]>) -> bool {
        Arc::ptr_eq(&self.items, items)
    }

    /// Run a query.
    ///
    /// An empty query returns every item in original order with no spans.
    /// Otherwise results are ordered by ascending score, ties keeping
    /// original order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchResult<T>> {
        if query.is_empty() {
            return self
                .items
                .iter()
                .enumerate()
                .map(|(position, item)| SearchResult {
                    item: item.clone(),
                    position,
                    score: 0.0,
                    spans: Vec::new(),
                })
                .collect();
        }

        let searcher = BitapSearcher::new(query, &self.options);
        let mut hits = self.score_all(&searcher);
        hits.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        hits.into_iter()
            .map(|(position, score, spans)| SearchResult {
                item: self.items[position].clone(),
                position,
                score,
                spans,
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(&self, searcher: &BitapSearcher) -> Vec<Hit> {
        let threshold = self.options.threshold;
        self.keys
            .iter()
            .enumerate()
            .filter_map(|(position, key)| score_one(searcher, threshold, position, key))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_all(&self, searcher: &BitapSearcher) -> Vec<Hit> {
        let threshold = self.options.threshold;
        self.keys
            .par_iter()
            .enumerate()
            .filter_map(|(position, key)| score_one(searcher, threshold, position, key))
            .collect()
    }
}

type Hit = (usize, f64, Vec<MatchSpan>);

fn score_one(
    searcher: &BitapSearcher,
    threshold: f64,
    position: usize,
    key: &IndexedKey,
) -> Option<Hit> {
    let outcome = searcher.search_in(&key.folded);
    (outcome.is_match && outcome.raw_score <= threshold)
        .then_some((position, outcome.score, outcome.spans))
}

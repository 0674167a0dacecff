//! Index memoized on the identity of the item list.

use crate::index::{FuzzyIndex, Searchable};
use crate::options::SearchOptions;
use std::sync::Arc;

/// Caches a [`FuzzyIndex`] and rebuilds it only when handed a different list.
///
/// Identity is the `Arc` allocation, not the contents: two equal lists in
/// separate allocations count as different.
#[derive(Debug)]
pub struct MemoizedIndex<T> {
    options: SearchOptions,
    cached: Option<FuzzyIndex<T>>,
    builds: usize,
}

impl<T: Searchable + Clone> MemoizedIndex<T> {
    /// Create an empty cache.
    #[must_use]
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            cached: None,
            builds: 0,
        }
    }

    /// Index for `items`, building it if the cached one came from another list.
    pub fn get(&mut self, items: &Arc<[T]>) -> &FuzzyIndex<T> {
        if !self.is_built_for(items) {
            self.cached = None;
        }

        let options = &self.options;
        let builds = &mut self.builds;
        self.cached.get_or_insert_with(|| {
            *builds += 1;
            FuzzyIndex::build(Arc::clone(items), options.clone())
        })
    }

    /// Whether the cached index was built from `items`.
    #[must_use]
    pub fn is_built_for(&self, items: &Arc<[T]>) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|index| index.is_built_from(items))
    }

    /// Replace the options, dropping the cached index.
    pub fn set_options(&mut self, options: SearchOptions) {
        if options != self.options {
            self.options = options;
            self.cached = None;
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// How many times an index has been built.
    #[must_use]
    pub fn build_count(&self) -> usize {
        self.builds
    }

    /// Drop the cached index.
    pub fn clear(&mut self) {
        self.cached = None;
    }
}

impl<T: Searchable + Clone> Default for MemoizedIndex<T> {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> Arc<[String]> {
        names.iter().map(|s| (*s).to_string()).collect::<Vec<_>>().into()
    }

    #[test]
    fn test_same_list_builds_once() {
        let items = list(&["pidgey", "pidgeotto"]);
        let mut memo = MemoizedIndex::default();

        for query in ["p", "pi", "pid", "pidg"] {
            assert!(!memo.get(&items).search(query).is_empty());
        }
        assert_eq!(memo.build_count(), 1);
    }

    #[test]
    fn test_new_list_rebuilds() {
        let mut memo = MemoizedIndex::default();
        let first = list(&["rattata"]);
        let second = list(&["rattata"]);

        memo.get(&first);
        memo.get(&second);
        assert_eq!(memo.build_count(), 2);
        assert!(memo.is_built_for(&second));
        assert!(!memo.is_built_for(&first));
    }

    #[test]
    fn test_option_change_rebuilds() {
        let items = list(&["spearow"]);
        let mut memo = MemoizedIndex::default();

        memo.get(&items);
        memo.set_options(SearchOptions::default());
        memo.get(&items);
        assert_eq!(memo.build_count(), 1);

        memo.set_options(SearchOptions::default().with_threshold(0.1));
        memo.get(&items);
        assert_eq!(memo.build_count(), 2);
    }
}

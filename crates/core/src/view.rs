//! View state for the listing and detail pages.
//!
//! A [`ListingView`] starts out loading and empty, is populated at most once
//! when the catalog fetch resolves, and ignores every write after it has
//! been unmounted. The search index is derived from the entry list and only
//! rebuilt when the list itself changes.

use crate::catalog::CatalogEntry;
use crate::detail::PokemonDetail;
use pokedex_search::{MemoizedIndex, SearchOptions, SearchResult};
use serde::Serialize;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};

/// Lifecycle of a listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPhase {
    /// Mounted, catalog not yet received
    Loading,
    /// Mounted with a catalog
    Ready,
    /// Torn down; no further writes are accepted
    Unmounted,
}

/// What the listing should show above (or instead of) its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "count", rename_all = "snake_case")]
pub enum ListingStatus {
    /// No entries yet: the catalog is still loading or never arrived
    Loading,
    /// The query filtered everything out
    NoMatches,
    /// This many cards are shown
    Showing(usize),
}

/// Component-local state of the listing page.
#[derive(Debug)]
pub struct ListingView {
    phase: ViewPhase,
    entries: Arc<[CatalogEntry]>,
    query: String,
    index: MemoizedIndex<CatalogEntry>,
}

impl Default for ListingView {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}

impl ListingView {
    /// A freshly mounted, empty view.
    pub fn new(options: SearchOptions) -> Self {
        Self {
            phase: ViewPhase::Loading,
            entries: Arc::from(Vec::new()),
            query: String::new(),
            index: MemoizedIndex::new(options),
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != ViewPhase::Unmounted
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Store the catalog. Only the first call on a mounted view takes effect;
    /// the return value says whether this one did.
    pub fn populate(&mut self, entries: Vec<CatalogEntry>) -> bool {
        match self.phase {
            ViewPhase::Loading => {
                debug!(count = entries.len(), "Listing populated");
                self.entries = entries.into();
                self.phase = ViewPhase::Ready;
                true
            }
            ViewPhase::Ready => {
                warn!("Ignoring second catalog for an already populated listing");
                false
            }
            ViewPhase::Unmounted => {
                debug!("Discarding catalog that arrived after unmount");
                false
            }
        }
    }

    /// Replace the query. Input is lowercased as typed. Ignored once unmounted.
    pub fn set_query(&mut self, raw: &str) {
        if self.is_mounted() {
            self.query = raw.to_lowercase();
        }
    }

    /// Results for the current query. Empty while loading and after unmount.
    pub fn results(&mut self) -> Vec<SearchResult<CatalogEntry>> {
        if self.phase == ViewPhase::Unmounted {
            return Vec::new();
        }
        self.index.get(&self.entries).search(&self.query)
    }

    /// Status line for the current query.
    pub fn status(&mut self) -> ListingStatus {
        if self.entries.is_empty() {
            return ListingStatus::Loading;
        }
        match self.results().len() {
            0 => ListingStatus::NoMatches,
            n => ListingStatus::Showing(n),
        }
    }

    /// How many times the search index has been built for this view.
    pub fn index_builds(&self) -> usize {
        self.index.build_count()
    }

    /// Tear the view down. Entries stay readable; nothing can be written.
    pub fn unmount(&mut self) {
        self.phase = ViewPhase::Unmounted;
        self.index.clear();
    }
}

/// Outcome of loading a detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "pokemon", rename_all = "snake_case")]
pub enum DetailView {
    Found(Box<PokemonDetail>),
    NotFound,
}

impl DetailView {
    /// Collapse a fetch result into a page. Every failure, whether transport,
    /// status or payload, becomes [`DetailView::NotFound`].
    pub fn from_fetch<E: Display>(id: u32, fetched: Result<PokemonDetail, E>) -> Self {
        match fetched {
            Ok(detail) => Self::Found(Box::new(detail)),
            Err(e) => {
                warn!(id, error = %e, "Detail fetch failed, rendering not found");
                Self::NotFound
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

//! List command - the catalog page, filtered by an optional query

use crate::app::App;
use anyhow::Result;
use pokedex_api_client::ApiError;
use pokedex_cli::output::{format_duration, Status};
use pokedex_cli::progress::spinner;
use pokedex_cli::render;
use pokedex_core::catalog::CatalogEntry;
use pokedex_core::view::{ListingStatus, ListingView};
use pokedex_search::{MatchSpan, SearchResult};
use serde::Serialize;
use std::time::Instant;
use tracing::warn;

/// JSON output for one listing render
#[derive(Debug, Serialize)]
struct JsonListing<'a> {
    query: &'a str,
    status: &'static str,
    count: usize,
    results: Vec<JsonCard>,
}

#[derive(Debug, Serialize)]
struct JsonCard {
    id: u32,
    number: String,
    name: String,
    score: f64,
    spans: Vec<MatchSpan>,
    artwork_url: String,
    path: String,
}

impl From<&SearchResult<CatalogEntry>> for JsonCard {
    fn from(result: &SearchResult<CatalogEntry>) -> Self {
        Self {
            id: result.item.id(),
            number: result.item.display_number(),
            name: result.item.name().to_string(),
            score: result.score,
            spans: result.spans.clone(),
            artwork_url: result.item.artwork_url(),
            path: result.item.detail_path(),
        }
    }
}

/// Fetch the catalog into a fresh view. A failed fetch leaves the view
/// loading and is returned alongside it.
pub async fn load_view(app: &App) -> (ListingView, Option<ApiError>) {
    let mut view = ListingView::new(app.search.clone());
    let pb = spinner("Loading Pokémon...", !app.json);
    let start = Instant::now();

    let fetched = app.client.catalog().list_entries().await;
    pb.finish_and_clear();

    match fetched {
        Ok(entries) => {
            if !app.json {
                Status::info(&format!(
                    "Fetched {} entries in {}",
                    entries.len(),
                    format_duration(start.elapsed())
                ));
            }
            view.populate(entries);
            (view, None)
        }
        Err(e) => {
            warn!(error = %e, "Catalog fetch failed, listing stays in its loading state");
            (view, Some(e))
        }
    }
}

/// Print the view for its current query.
pub fn print_view(app: &App, view: &mut ListingView) -> Result<()> {
    let results = view.results();
    let status = view.status();

    if app.json {
        let (label, count) = match status {
            ListingStatus::Loading => ("loading", 0),
            ListingStatus::NoMatches => ("no_matches", 0),
            ListingStatus::Showing(n) => ("showing", n),
        };
        let output = JsonListing {
            query: view.query(),
            status: label,
            count,
            results: results.iter().map(JsonCard::from).collect(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!(
            "{}",
            render::listing_page(
                status,
                view.query(),
                &results,
                app.display.columns,
                render::terminal_width(),
            )
        );
    }
    Ok(())
}

/// Run list command
pub async fn run(app: &App, query: Option<&str>) -> Result<()> {
    let (mut view, failure) = load_view(app).await;
    if let Some(q) = query {
        view.set_query(q);
    }

    print_view(app, &mut view)?;
    view.unmount();

    match failure {
        Some(e) => Err(pokedex_core::Error::catalog_unavailable(e.to_string())
            .with_source(e)
            .into()),
        None => Ok(()),
    }
}

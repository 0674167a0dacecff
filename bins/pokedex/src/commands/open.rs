//! Open command - resolve a route path and render its page

use crate::app::App;
use crate::commands::{list, show};
use anyhow::Result;
use pokedex_core::route::Route;
use tracing::debug;

/// Run open command
pub async fn run(app: &App, path: &str) -> Result<()> {
    let route = Route::parse(path);
    debug!(path, route = %route, "Resolved route");

    match route {
        Route::Listing { query } => list::run(app, query.as_deref()).await,
        Route::Detail { id } => show::run(app, id).await,
        Route::NotFound { ref path } => {
            show::print_not_found(app, &route)?;
            Err(pokedex_core::Error::invalid_route(path).into())
        }
    }
}

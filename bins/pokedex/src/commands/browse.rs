//! Browse command - interactive search over a live listing view
//!
//! The catalog fetch runs as its own task while queries are read from stdin.
//! Queries typed before the catalog arrives render the loading state.

use crate::app::App;
use crate::commands::list;
use anyhow::Result;
use pokedex_api_client::PokeApiClient;
use pokedex_cli::output::Status;
use pokedex_core::view::ListingView;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Line that ends the session
const QUIT: &str = ":q";

fn spawn_fetch(client: PokeApiClient, view: Arc<Mutex<ListingView>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match client.catalog().list_entries().await {
            Ok(entries) => {
                let count = entries.len();
                if view.lock().await.populate(entries) {
                    info!(count, "Catalog ready");
                }
            }
            Err(e) => warn!(error = %e, "Catalog fetch failed, listing stays in its loading state"),
        }
    })
}

/// Run browse command
pub async fn run(app: &App) -> Result<()> {
    let view = Arc::new(Mutex::new(ListingView::new(app.search.clone())));
    let fetch = spawn_fetch(app.client.clone(), Arc::clone(&view));

    if !app.json {
        Status::info("One query per line. An empty line lists everything, :q quits.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if !app.json {
            Status::prompt("search");
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == QUIT {
            break;
        }

        let mut view = view.lock().await;
        view.set_query(&line);
        list::print_view(app, &mut view)?;
    }

    let mut view = view.lock().await;
    let index_builds = view.index_builds();
    view.unmount();
    debug!(
        fetch_done = fetch.is_finished(),
        index_builds,
        "Browse session closed"
    );
    Ok(())
}

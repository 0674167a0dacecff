//! Show command - the detail page for one id

use crate::app::App;
use anyhow::Result;
use pokedex_cli::progress::spinner;
use pokedex_cli::render;
use pokedex_core::route::Route;
use pokedex_core::view::DetailView;
use serde_json::json;

/// Run show command
pub async fn run(app: &App, id: u32) -> Result<()> {
    // Ids start at 1; nothing to fetch for 0.
    let view = if id == 0 {
        DetailView::NotFound
    } else {
        let pb = spinner(&format!("Fetching Pokémon #{id}..."), !app.json);
        let view = app.client.pokemon().detail_view(id).await;
        pb.finish_and_clear();
        view
    };

    print_detail(app, id, &view)?;

    if view.is_found() {
        Ok(())
    } else {
        Err(pokedex_core::Error::entry_not_found(id).into())
    }
}

fn print_detail(app: &App, id: u32, view: &DetailView) -> Result<()> {
    if app.json {
        println!("{}", serde_json::to_string(view)?);
        return Ok(());
    }

    match view {
        DetailView::Found(detail) => {
            println!("{}", render::detail_page(detail, app.display.move_count));
        }
        DetailView::NotFound => {
            let path = Route::Detail { id }.path();
            println!("{}", render::not_found_page(&path));
        }
    }
    Ok(())
}

/// Print the not-found page for an arbitrary path.
pub fn print_not_found(app: &App, route: &Route) -> Result<()> {
    if app.json {
        println!("{}", json!({ "status": "not_found", "route": route }));
    } else {
        println!("{}", render::not_found_page(&route.path()));
    }
    Ok(())
}

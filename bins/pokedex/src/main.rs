//! Pokédex - browse and fuzzy-search the Kanto catalog from the terminal
//!
//! Pages mirror the browser routes: the listing at `/` and detail pages at
//! `/pokemon/{id}`.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;

use app::App;
use commands::{browse, list, open, show};

/// Browse and fuzzy-search the original 151 Pokémon
#[derive(Parser)]
#[command(name = "pokedex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Configuration file (defaults to .pokedex.toml, pokedex.toml or .config/pokedex.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Match threshold between 0.0 (exact) and 1.0 (anything)
    #[arg(short, long, global = true)]
    threshold: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog, optionally filtered by a fuzzy query
    ///
    /// If the catalog cannot be fetched the page still renders in its
    /// loading state, and the command exits with status 4 so scripts can
    /// tell it apart from an empty result.
    List {
        /// Search text; omit to list everything
        query: Option<String>,
    },

    /// Show the detail page for one Pokémon
    Show {
        /// Catalog number, starting at 1
        id: u32,
    },

    /// Render the page at a route such as `/`, `/?q=char` or `/pokemon/25`
    ///
    /// Exits with status 2 for an unknown route or Pokémon, and with
    /// status 4 when the catalog behind `/` cannot be fetched.
    Open {
        /// Route path
        path: String,
    },

    /// Search interactively, one query per line (`:q` to quit)
    Browse,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pokedex=debug,pokedex_api_client=debug,pokedex_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match App::load(cli.config.as_deref(), cli.threshold, &cli.format) {
        Ok(app) => match cli.command {
            Commands::List { query } => list::run(&app, query.as_deref()).await,
            Commands::Show { id } => show::run(&app, id).await,
            Commands::Open { path } => open::run(&app, &path).await,
            Commands::Browse => browse::run(&app).await,
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::from(app::exit_code(&e))
        }
    }
}

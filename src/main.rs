use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use bookshelf::catalog::CatalogStore;
use bookshelf::config::Config;
use bookshelf::logging::init_tracing;
use bookshelf::service::{FetchFailure, FilterParams, HttpBookService};

/// Query a book catalog API and print the resulting catalog state.
#[derive(Debug, Parser)]
#[command(name = "bookshelf", version)]
struct Cli {
    /// Path to config file (default: ~/.config/bookshelf/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL from config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List books matching the given filters
    Books {
        #[arg(long)]
        category: Option<String>,
        /// Publication year
        #[arg(long)]
        year: Option<String>,
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List all categories
    Categories,
    /// List all publication years
    Years,
    /// Show a single book
    Book {
        /// Book identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(failure)) => {
            eprintln!("Error: {}", failure);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Outer error: setup failed. Inner error: the catalog operation failed
/// after the state snapshot was printed.
async fn run(cli: Cli) -> anyhow::Result<Result<(), FetchFailure>> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate().context("Invalid --base-url")?;
    }

    let service = HttpBookService::new(&config.api).context("Failed to build API client")?;
    let store = CatalogStore::new(Arc::new(service), &config.store);

    let outcome = match cli.command {
        Command::Books {
            category,
            year,
            search,
            page,
            limit,
        } => {
            let filters = FilterParams {
                category,
                publication_year: year,
                search,
                page,
                limit,
            };
            store.fetch_books(filters).await.map(drop)
        }
        Command::Categories => store.fetch_categories().await.map(drop),
        Command::Years => store.fetch_publication_years().await.map(drop),
        Command::Book { id } => store.fetch_book_by_id(&id).await.map(drop),
    };

    let snapshot = serde_json::to_string_pretty(&store.snapshot())
        .context("Failed to serialize catalog state")?;
    println!("{}", snapshot);

    Ok(outcome)
}

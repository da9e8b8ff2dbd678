use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use addrsearch_core::Coordinate;

mod live;
mod nav;
mod route;
mod search;

#[derive(Debug, Parser)]
#[command(name = "addrsearch")]
#[command(about = "Address search and navigation front-end")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for addresses matching a free-text query.
    Search {
        /// Query text; multiple words are joined with spaces.
        query: Vec<String>,
    },
    /// Fetch a driving route summary between two coordinates.
    Route {
        /// Origin as "lat,lon".
        #[arg(long)]
        from: Coordinate,
        /// Destination as "lat,lon".
        #[arg(long)]
        to: Coordinate,
    },
    /// Interactive search: each line typed updates the live query.
    Live,
    /// Compose (and pretend to launch) a navigation intent.
    Nav {
        /// Destination as "lat,lon".
        #[arg(long)]
        to: Coordinate,
        /// Current location as "lat,lon"; omitted means unavailable.
        #[arg(long)]
        from: Option<Coordinate>,
        /// Prefer a native maps deep link over the web URL.
        #[arg(long)]
        native: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = addrsearch_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Search { query } => search::run(&config, &query.join(" ")).await,
        Commands::Route { from, to } => route::run(&config, from, to).await,
        Commands::Live => live::run(&config).await,
        Commands::Nav { to, from, native } => nav::run(to, from, native).await,
    }
}

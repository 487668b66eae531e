use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use netatlas::api;
use netatlas::controller::MapController;
use netatlas::store::{DataSource, FeatureStore};

const DEFAULT_DATA: &str = "data/network.geojson";

#[derive(Parser)]
#[command(name = "netatlas")]
#[command(about = "Interactive web map for pre-computed entity-relationship networks")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the NetAtlas server
    Serve {
        /// Port for the web UI and HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Dataset file path or http(s) URL (also: NETATLAS_DATA)
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Load the dataset and report what it contains
    Check {
        /// Dataset file path or http(s) URL (also: NETATLAS_DATA)
        #[arg(short, long)]
        data: Option<String>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "netatlas=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// CLI flag first, then the environment, then the conventional location.
fn resolve_data(data: Option<String>) -> String {
    data.or_else(|| std::env::var("NETATLAS_DATA").ok())
        .unwrap_or_else(|| DEFAULT_DATA.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, data }) => serve(port, resolve_data(data)).await,
        Some(Commands::Check { data }) => check(resolve_data(data)).await,
        None => serve(3000, resolve_data(None)).await,
    }
}

async fn serve(port: u16, data: String) -> anyhow::Result<()> {
    let source = DataSource::parse(&data);
    tracing::info!("Starting NetAtlas server on port {}", port);

    let mut controller = MapController::new();
    if let Err(e) = controller.load(&source).await {
        // The server still comes up so the page can show the failure; the
        // load is not retried.
        tracing::error!("starting without a dataset: {}", e);
    }

    let app = api::create_router(Arc::new(Mutex::new(controller)));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("NetAtlas server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn check(data: String) -> anyhow::Result<()> {
    let source = DataSource::parse(&data);
    let store = FeatureStore::load(&source).await?;
    let collection = store.collection();

    println!("dataset: {}", source);
    println!("  points:  {}", collection.points().count());
    println!("  lines:   {}", collection.lines().count());
    println!("  types:   {}", collection.entity_types().join(", "));
    println!("  skipped: {}", store.skipped());

    let dangling = store.dangling_endpoints();
    for endpoint in &dangling {
        println!(
            "  warning: '{}' references missing point id {}",
            endpoint.relationship, endpoint.missing_id
        );
    }
    if !dangling.is_empty() {
        println!("  {} dangling endpoint reference(s)", dangling.len());
    }

    Ok(())
}

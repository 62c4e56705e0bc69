//! Coffee Service HTTP Server Binary
//!
//! This is the main entry point for the coffee menu REST API server.
//! It loads the configuration, builds the repository, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with an empty menu (default)
//! cargo run --bin cafe-server
//!
//! # Run with the classic four-item menu
//! CAFE_SEED_MENU=1 cargo run --bin cafe-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 5000)
//! - `CAFE_SEED_MENU`: Seed the default menu on startup (default: off)
//! - `RUST_LOG`: Log level (default: info)
//!
//! A `cafe.toml` file in the working directory (or `config/`, or the parent
//! directory) provides the same settings; environment variables win.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cafe_rust::config::ServerConfig;
use cafe_rust::db::repository::MenuRepository;
use cafe_rust::db::LocalRepository;
use cafe_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting coffee service");

    // Load configuration (file, then environment overrides)
    let config = ServerConfig::load()?;

    // Build the repository
    let repository: Arc<dyn MenuRepository> = if config.server.seed_menu {
        Arc::new(LocalRepository::with_default_menu())
    } else {
        Arc::new(LocalRepository::new())
    };

    // Create application state
    let state = AppState::new(repository);

    let menu = state.repository.list_coffees().await?;
    info!("Menu initialized with {} items", menu.len());

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let addr: SocketAddr = config.bind_addr().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Metrics available at http://{}/metrics", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

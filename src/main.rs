//! Bookshelf - GraphQL server entry point
//!
//! All operations are exposed via GraphQL at /graphql; subscriptions use the
//! WebSocket endpoint on the same path.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::cli::CliOptions;
use bookshelf::config::Config;
use bookshelf::db::Database;
use bookshelf::graphql::build_schema;
use bookshelf::services::PubSub;
use bookshelf::store::Store;
use bookshelf::{AppState, build_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliOptions::from_args();
    if cli.print_schema {
        let schema = build_schema(Store::empty(), PubSub::new(), None);
        println!("{}", schema.sdl());
        return Ok(());
    }

    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting Bookshelf");

    // A configured directory that cannot be reached is fatal.
    let db = match &config.database_url {
        Some(url) => {
            let db = Database::connect(url, config.database_max_connections)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Database connection failed"))?;
            tracing::info!("Database connected");
            Some(db)
        }
        None => {
            tracing::info!("DATABASE_URL not set; users query disabled");
            None
        }
    };

    let state = AppState::new(config.clone(), db);
    tracing::info!("GraphQL schema built");

    let app = build_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("GraphQL endpoint: {}/graphql", config.base_url());
    tracing::info!(
        "Subscriptions: ws://{}:{}/graphql",
        config.host.as_deref().unwrap_or("localhost"),
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}

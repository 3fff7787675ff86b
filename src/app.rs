//! Application state and HTTP router construction.
//!
//! Used by `main` and by the HTTP tests to build the Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Database;
use crate::graphql::{BookshelfSchema, build_schema};
use crate::services::PubSub;
use crate::store::{BookRecord, Store};

/// Shared state for HTTP handlers (GraphQL, health routes).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub schema: BookshelfSchema,
    pub db: Option<Database>,
}

impl AppState {
    /// Build state around a fresh seeded store and an empty subscriber registry
    pub fn new(config: Arc<Config>, db: Option<Database>) -> Self {
        Self::with_store(config, Store::seeded(), PubSub::new(), db)
    }

    pub fn with_store(
        config: Arc<Config>,
        store: Store,
        events: PubSub<BookRecord>,
        db: Option<Database>,
    ) -> Self {
        let schema = build_schema(store, events, db.clone());
        Self { config, schema, db }
    }
}

/// Build the full Axum router: health probes, /graphql (HTTP and WebSocket), layers.
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .merge(crate::api::health::router())
        .merge(crate::graphql::routes::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Health check endpoints

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};

use crate::app::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub ready: bool,
    /// Directory database reachability; `None` when no database is configured
    pub database: Option<bool>,
}

/// Health check - always returns OK if the server is running
async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check - verifies the directory database when one is configured
async fn readyz(State(state): State<AppState>) -> Json<ReadyResponse> {
    let database = match &state.db {
        Some(db) => Some(db.ping().await),
        None => None,
    };

    Json(ReadyResponse {
        ready: database.unwrap_or(true),
        database,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}

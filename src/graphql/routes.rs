//! HTTP and WebSocket routes for /graphql
//!
//! `POST /graphql` executes queries and mutations. `GET /graphql` either
//! upgrades to a GraphQL-over-WebSocket connection (subscriptions) or, for
//! browsers, serves the GraphiQL playground.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLProtocol, GraphQLRequest, GraphQLResponse, GraphQLWebSocket};
use axum::Router;
use axum::extract::State;
use axum::extract::WebSocketUpgrade;
use axum::extract::ws::rejection::WebSocketUpgradeRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::app::AppState;

use super::auth::{RequestToken, extract_token, token_from_init_params};

/// GraphQL endpoint path, shared by HTTP and WebSocket
pub const GRAPHQL_PATH: &str = "/graphql";

pub fn router() -> Router<AppState> {
    Router::new().route(GRAPHQL_PATH, get(graphql_get).post(graphql_handler))
}

/// GraphQL query/mutation handler with token context
async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(token) = extract_token(&headers) {
        request = request.data(RequestToken(token));
    }
    state.schema.execute(request).await.into()
}

async fn graphql_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    protocol: Result<GraphQLProtocol, StatusCode>,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Response {
    match (ws, protocol) {
        (Ok(ws), Ok(protocol)) => subscriptions(state, headers, protocol, ws),
        (Ok(_), Err(status)) => {
            tracing::debug!("WebSocket upgrade without a GraphQL subprotocol");
            status.into_response()
        }
        (Err(_), _) => graphiql(&headers),
    }
}

/// GraphiQL interactive playground (only for browsers)
fn graphiql(headers: &HeaderMap) -> Response {
    let accepts_html = headers
        .get(axum::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        axum::response::Html(
            GraphiQLSource::build()
                .endpoint(GRAPHQL_PATH)
                .subscription_endpoint(GRAPHQL_PATH)
                .finish(),
        )
        .into_response()
    } else {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}

/// GraphQL-over-WebSocket connection for subscriptions
fn subscriptions(
    state: AppState,
    headers: HeaderMap,
    protocol: GraphQLProtocol,
    ws: WebSocketUpgrade,
) -> Response {
    let header_token = extract_token(&headers);

    ws.protocols(["graphql-transport-ws", "graphql-ws"])
        .on_upgrade(move |socket| {
            tracing::debug!("Subscription connection opened");
            let mut ws = GraphQLWebSocket::new(socket, state.schema.clone(), protocol);

            if let Some(token) = header_token {
                let mut data = async_graphql::Data::default();
                data.insert(RequestToken(token));
                ws = ws.with_data(data);
            }

            ws.on_connection_init(|params| async move {
                let mut data = async_graphql::Data::default();
                if let Some(token) = token_from_init_params(&params) {
                    data.insert(RequestToken(token));
                }
                Ok(data)
            })
            .serve()
        })
}

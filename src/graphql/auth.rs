//! Request token context
//!
//! Clients may send a `token` HTTP header (or a `token` field in the WebSocket
//! `connection_init` payload). The value is attached to the request context as
//! a [`RequestToken`]. Nothing verifies it; resolvers only log its presence.

use async_graphql::Context;
use axum::http::HeaderMap;

/// Header carrying the client token
pub const TOKEN_HEADER: &str = "token";

/// Raw token supplied by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken(pub String);

/// Extract the token header, ignoring empty or non-ASCII values
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Read the token from a `connection_init` payload
pub fn token_from_init_params(params: &serde_json::Value) -> Option<String> {
    params
        .get(TOKEN_HEADER)
        .and_then(|v| v.as_str())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Extension trait to read the request token from GraphQL context
pub trait TokenExt {
    fn request_token(&self) -> Option<&RequestToken>;
}

impl<'a> TokenExt for Context<'a> {
    fn request_token(&self) -> Option<&RequestToken> {
        self.data_opt::<RequestToken>()
    }
}

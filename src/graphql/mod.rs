//! GraphQL API with subscriptions for real-time updates
//!
//! This module provides a GraphQL API using async-graphql with support for
//! queries, mutations, and subscriptions over WebSocket.
//!
//! Query and mutation roots are merged from per-entity objects:
//!
//! ```rust,ignore
//! #[derive(MergedObject, Default)]
//! pub struct QueryRoot(BookQueries, AuthorQueries, UserQueries);
//! ```

pub mod auth;
pub mod errors;
pub mod mutations;
pub mod queries;
pub mod routes;
mod schema;
mod subscriptions;
pub mod types;

pub use auth::{RequestToken, TokenExt};
pub use errors::ApiError;
pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use subscriptions::SubscriptionRoot;
pub use types::{AddBookInput, Author, Book, User};

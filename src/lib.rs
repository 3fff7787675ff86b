//! Bookshelf - GraphQL API for books and authors
//!
//! Books and authors live in an in-memory [`store::Store`]. New books are
//! announced to `bookAdded` subscribers through [`services::PubSub`]. An
//! optional SQLite directory backs the `users` query.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod graphql;
pub mod services;
pub mod store;

pub use app::{AppState, build_app};

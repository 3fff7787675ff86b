//! API route definitions
//!
//! The primary API is GraphQL at /graphql. REST endpoints only cover
//! liveness and readiness probes.

pub mod health;

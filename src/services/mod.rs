//! Services shared between the HTTP layer and the GraphQL resolvers

pub mod pubsub;

pub use pubsub::{BOOK_ADDED_TOPIC, Listener, PubSub};

//! GraphQL subscriptions for real-time updates
//!
//! Subscriptions allow clients to receive push updates over WebSocket.

use async_graphql::{Context, Subscription};
use futures::{Stream, StreamExt};

use crate::services::{BOOK_ADDED_TOPIC, PubSub};
use crate::store::BookRecord;

use super::types::Book;

#[derive(Default)]
pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Subscribe to books created by `addBook` after the subscription starts.
    /// The listener is released when the client disconnects.
    async fn book_added<'ctx>(
        &self,
        ctx: &Context<'ctx>,
    ) -> impl Stream<Item = Option<Book>> + 'ctx {
        let events = ctx.data_unchecked::<PubSub<BookRecord>>();
        let listener = events.subscribe(BOOK_ADDED_TOPIC);
        tracing::debug!(
            listeners = events.listener_count(BOOK_ADDED_TOPIC),
            "bookAdded subscription started"
        );

        listener.map(|record| Some(Book::from(record)))
    }
}

//! GraphQL schema definition with queries, mutations, and subscriptions

use async_graphql::extensions::Tracing;
use async_graphql::{MergedObject, Schema};

use crate::db::Database;
use crate::services::PubSub;
use crate::store::{BookRecord, Store};

use super::mutations::BookMutations;
use super::queries::{AuthorQueries, BookQueries, UserQueries};
use super::subscriptions::SubscriptionRoot;

#[derive(MergedObject, Default)]
pub struct QueryRoot(BookQueries, AuthorQueries, UserQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(BookMutations);

/// The GraphQL schema type
pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// Build the GraphQL schema with all resolvers.
///
/// `db` backs the `users` query; without it that field reports
/// `SERVICE_UNAVAILABLE` while everything else keeps working.
pub fn build_schema(
    store: Store,
    events: PubSub<BookRecord>,
    db: Option<Database>,
) -> BookshelfSchema {
    let builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot,
    )
    .extension(Tracing)
    .data(store)
    .data(events);

    match db {
        Some(db) => builder.data(db).finish(),
        None => builder.finish(),
    }
}

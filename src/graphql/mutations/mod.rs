pub mod books;

pub use books::BookMutations;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::graphql::auth::TokenExt;
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::services::{BOOK_ADDED_TOPIC, PubSub};
    pub(crate) use crate::store::{BookRecord, Store};
}

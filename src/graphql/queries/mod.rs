pub mod authors;
pub mod books;
pub mod users;

pub use authors::AuthorQueries;
pub use books::BookQueries;
pub use users::UserQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

    pub(crate) use crate::graphql::errors::ApiError;
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::store::Store;
}

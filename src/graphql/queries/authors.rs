use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// Get all authors
    async fn authors(&self, ctx: &Context<'_>) -> Option<Vec<Author>> {
        let store = ctx.data_unchecked::<Store>();
        Some(store.list_authors().into_iter().map(Author::from).collect())
    }

    /// Get an author by ID. A miss is reported as a NOT_FOUND error.
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let store = ctx.data_unchecked::<Store>();

        let record = store.get_author(id.as_str()).ok_or_else(|| {
            tracing::debug!(author_id = %id.as_str(), "Author lookup missed");
            ApiError::not_found("Author").extend()
        })?;

        Ok(Some(Author::from(record)))
    }
}

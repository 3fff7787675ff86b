use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Get all books in the order they were added
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Book>> {
        let store = ctx.data_unchecked::<Store>();
        Some(store.list_books().into_iter().map(Book::from).collect())
    }

    /// Get a book by ID. A miss is reported as a NOT_FOUND error.
    async fn book(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Book>> {
        let store = ctx.data_unchecked::<Store>();

        match store.get_book(id.as_str()) {
            Some(record) => Ok(Some(Book::from(record))),
            None => {
                tracing::debug!(book_id = %id.as_str(), "Book lookup missed");
                Err(ApiError::not_found("Book").extend())
            }
        }
    }
}

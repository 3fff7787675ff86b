use super::prelude::*;

#[derive(Default)]
pub struct BookMutations;

#[Object]
impl BookMutations {
    /// Add a book and notify `bookAdded` subscribers.
    ///
    /// Input is stored as given: an empty title or an unknown author ID is accepted.
    async fn add_book(&self, ctx: &Context<'_>, input: AddBookInput) -> Result<Option<Book>> {
        let store = ctx.data_unchecked::<Store>();
        let events = ctx.data_unchecked::<PubSub<BookRecord>>();

        let record = store.insert_book(input.into());
        let delivered = events.publish(BOOK_ADDED_TOPIC, record.clone());

        tracing::info!(
            book_id = %record.id,
            title = %record.title,
            subscribers = delivered,
            has_token = ctx.request_token().is_some(),
            "Book added"
        );

        Ok(Some(Book::from(record)))
    }
}

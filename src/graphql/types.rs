//! GraphQL type definitions
//!
//! These types mirror the store and directory records but are decorated with
//! async-graphql attributes. Relationship fields resolve lazily against the
//! [`Store`] held in the schema data.

use async_graphql::{ComplexObject, Context, ID, InputObject, SimpleObject};

use crate::db::UserRecord;
use crate::store::{AuthorRecord, BookRecord, NewBook, Store};

/// A book in the collection
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Book {
    pub id: ID,
    pub title: String,
    pub published_year: Option<i32>,
    pub author_id: ID,
}

#[ComplexObject]
impl Book {
    /// The referenced author, or null when `authorId` names no known author
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        ctx.data_unchecked::<Store>()
            .get_author(self.author_id.as_str())
            .map(Author::from)
    }
}

impl From<BookRecord> for Book {
    fn from(r: BookRecord) -> Self {
        Self {
            id: ID(r.id),
            title: r.title,
            published_year: r.published_year,
            author_id: ID(r.author_id),
        }
    }
}

/// An author of one or more books
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub bio: Option<String>,
}

#[ComplexObject]
impl Author {
    /// Books referencing this author, in the order they were added
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Book>> {
        let books = ctx
            .data_unchecked::<Store>()
            .books_by_author(self.id.as_str())
            .into_iter()
            .map(Book::from)
            .collect();
        Some(books)
    }
}

impl From<AuthorRecord> for Author {
    fn from(r: AuthorRecord) -> Self {
        Self {
            id: ID(r.id),
            name: r.name,
            bio: r.bio,
        }
    }
}

/// Input for the `addBook` mutation
#[derive(Debug, InputObject)]
pub struct AddBookInput {
    pub title: String,
    pub published_year: Option<i32>,
    pub author_id: ID,
}

impl From<AddBookInput> for NewBook {
    fn from(input: AddBookInput) -> Self {
        Self {
            title: input.title,
            published_year: input.published_year,
            author_id: input.author_id.0,
        }
    }
}

/// An entry in the user directory
#[derive(Debug, Clone, SimpleObject)]
pub struct User {
    pub id: ID,
    pub fullname: Option<String>,
    pub email: Option<String>,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        Self {
            id: ID(r.id),
            fullname: r.fullname,
            email: r.email,
        }
    }
}

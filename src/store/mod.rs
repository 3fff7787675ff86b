//! In-memory book and author store
//!
//! The store is an explicit object built at startup and handed to the GraphQL
//! schema as context data. Cloning a [`Store`] shares the same collections.
//! Nothing is persisted: every process starts from the seed data in [`seed`].

pub mod seed;

use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

/// A book as held in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub published_year: Option<i32>,
    /// Logical reference to [`AuthorRecord::id`]. Not checked on insert.
    pub author_id: String,
}

/// An author as held in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
}

/// Input for creating a new book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub published_year: Option<i32>,
    pub author_id: String,
}

#[derive(Debug, Default)]
struct Collections {
    books: Vec<BookRecord>,
    authors: Vec<AuthorRecord>,
}

/// Shared handle to the book and author collections
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    /// Create a store with no books and no authors
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store holding the fixed startup data
    pub fn seeded() -> Self {
        Self::with_records(seed::books(), seed::authors())
    }

    /// Create a store from explicit collections
    pub fn with_records(books: Vec<BookRecord>, authors: Vec<AuthorRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections { books, authors })),
        }
    }

    /// All books in insertion order
    pub fn list_books(&self) -> Vec<BookRecord> {
        self.inner.read().books.clone()
    }

    pub fn get_book(&self, id: &str) -> Option<BookRecord> {
        self.inner.read().books.iter().find(|b| b.id == id).cloned()
    }

    /// All books whose `author_id` equals `author_id`, in insertion order
    pub fn books_by_author(&self, author_id: &str) -> Vec<BookRecord> {
        self.inner
            .read()
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    /// All authors in insertion order
    pub fn list_authors(&self) -> Vec<AuthorRecord> {
        self.inner.read().authors.clone()
    }

    pub fn get_author(&self, id: &str) -> Option<AuthorRecord> {
        self.inner.read().authors.iter().find(|a| a.id == id).cloned()
    }

    /// Assign a fresh id to `book`, append it and return the stored record
    pub fn insert_book(&self, book: NewBook) -> BookRecord {
        let record = BookRecord {
            id: Uuid::new_v4().to_string(),
            title: book.title,
            published_year: book.published_year,
            author_id: book.author_id,
        };

        let mut collections = self.inner.write();
        collections.books.push(record.clone());
        tracing::debug!(
            book_id = %record.id,
            author_id = %record.author_id,
            total_books = collections.books.len(),
            "Book inserted"
        );

        record
    }
}

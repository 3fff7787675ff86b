//! Startup data for the in-memory store.
//!
//! Every process starts with the same two authors and one book each.

use super::{AuthorRecord, BookRecord};

struct BookRow {
    id: &'static str,
    title: &'static str,
    author_id: &'static str,
    published_year: i32,
}

struct AuthorRow {
    id: &'static str,
    name: &'static str,
    bio: &'static str,
}

const BOOKS: &[BookRow] = &[
    BookRow {
        id: "1",
        title: "The Awakening",
        author_id: "1",
        published_year: 1899,
    },
    BookRow {
        id: "2",
        title: "City of Glass",
        author_id: "2",
        published_year: 1985,
    },
];

const AUTHORS: &[AuthorRow] = &[
    AuthorRow {
        id: "1",
        name: "Kate Chopin",
        bio: "Kate Chopin (born Katherine O'Flaherty; February 8, 1850 – August 22, 1904) was an American author of short stories and novels based in Louisiana.",
    },
    AuthorRow {
        id: "2",
        name: "Paul Auster",
        bio: "Paul Benjamin Auster (February 3, 1947 – April 30, 2024) was an American writer and film director.",
    },
];

/// Seed books, in the order queries return them
pub fn books() -> Vec<BookRecord> {
    BOOKS
        .iter()
        .map(|row| BookRecord {
            id: row.id.to_string(),
            title: row.title.to_string(),
            published_year: Some(row.published_year),
            author_id: row.author_id.to_string(),
        })
        .collect()
}

/// Seed authors
pub fn authors() -> Vec<AuthorRecord> {
    AUTHORS
        .iter()
        .map(|row| AuthorRecord {
            id: row.id.to_string(),
            name: row.name.to_string(),
            bio: Some(row.bio.to_string()),
        })
        .collect()
}

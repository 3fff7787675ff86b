//! Integration tests for the GraphQL schema
//!
//! Every test builds its own store and subscriber registry, so tests never
//! observe each other's books.

use std::time::Duration;

use async_graphql::{Request, Response, Variables};
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::time::timeout;

use bookshelf::graphql::{BookshelfSchema, RequestToken, build_schema};
use bookshelf::services::{BOOK_ADDED_TOPIC, PubSub};
use bookshelf::store::{BookRecord, NewBook, Store};

// ============================================================================
// Helpers
// ============================================================================

struct Harness {
    schema: BookshelfSchema,
    store: Store,
    events: PubSub<BookRecord>,
}

fn harness() -> Harness {
    let store = Store::seeded();
    let events = PubSub::new();
    let schema = build_schema(store.clone(), events.clone(), None);
    Harness {
        schema,
        store,
        events,
    }
}

fn data(response: Response) -> Value {
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

async fn add_book(schema: &BookshelfSchema, title: &str, author_id: &str, year: Option<i32>) -> Value {
    let request = Request::new(
        r#"
        mutation Add($input: AddBookInput!) {
            addBook(input: $input) { id title authorId publishedYear }
        }
        "#,
    )
    .variables(Variables::from_json(json!({
        "input": { "title": title, "authorId": author_id, "publishedYear": year }
    })));

    data(schema.execute(request).await)["addBook"].clone()
}

async fn wait_for_listeners(events: &PubSub<BookRecord>, count: usize) {
    timeout(Duration::from_secs(1), async {
        while events.listener_count(BOOK_ADDED_TOPIC) < count {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("subscription never registered");
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_fresh_books_are_the_seed_books_in_order() {
    let h = harness();
    let result = data(h.schema.execute("{ books { id title publishedYear authorId } }").await);

    assert_eq!(
        result,
        json!({
            "books": [
                { "id": "1", "title": "The Awakening", "publishedYear": 1899, "authorId": "1" },
                { "id": "2", "title": "City of Glass", "publishedYear": 1985, "authorId": "2" }
            ]
        })
    );
}

#[tokio::test]
async fn test_authors_lists_seed_authors() {
    let h = harness();
    let result = data(h.schema.execute("{ authors { id name } }").await);

    assert_eq!(
        result,
        json!({
            "authors": [
                { "id": "1", "name": "Kate Chopin" },
                { "id": "2", "name": "Paul Auster" }
            ]
        })
    );
}

#[tokio::test]
async fn test_missing_book_fails_with_not_found() {
    let h = harness();

    for id in ["0", "3", "missing", ""] {
        let query = format!(r#"{{ book(id: "{}") {{ id }} }}"#, id);
        let response = h.schema.execute(query).await;

        assert_eq!(response.errors.len(), 1, "id {:?}", id);
        let error = &response.errors[0];
        assert_eq!(error.message, "Book not found.");

        let extensions = error.extensions.as_ref().expect("extensions present");
        assert_eq!(
            extensions.get("code").cloned().map(|v| v.into_json().unwrap()),
            Some(json!("NOT_FOUND"))
        );
        assert_eq!(
            extensions.get("argumentName").cloned().map(|v| v.into_json().unwrap()),
            Some(json!("id"))
        );
        assert_eq!(response.data.into_json().unwrap(), json!({ "book": null }));
    }
}

#[tokio::test]
async fn test_missing_author_fails_with_not_found() {
    let h = harness();
    let response = h.schema.execute(r#"{ author(id: "99") { id } }"#).await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Author not found.");
    let code = response.errors[0]
        .extensions
        .as_ref()
        .and_then(|e| e.get("code").cloned())
        .map(|v| v.into_json().unwrap());
    assert_eq!(code, Some(json!("NOT_FOUND")));
}

#[tokio::test]
async fn test_existing_author_lookup_returns_requested_id() {
    let h = harness();
    for author in h.store.list_authors() {
        let query = format!(r#"{{ author(id: "{}") {{ id name bio }} }}"#, author.id);
        let result = data(h.schema.execute(query).await);
        assert_eq!(result["author"]["id"], json!(author.id));
        assert_eq!(result["author"]["name"], json!(author.name));
    }
}

#[tokio::test]
async fn test_book_author_resolves_reference() {
    let h = harness();
    let result = data(h.schema.execute(r#"{ book(id: "2") { title author { name } } }"#).await);
    assert_eq!(
        result,
        json!({ "book": { "title": "City of Glass", "author": { "name": "Paul Auster" } } })
    );
}

#[tokio::test]
async fn test_dangling_author_reference_resolves_to_null() {
    let h = harness();
    let added = add_book(&h.schema, "Orphan", "no-such-author", None).await;

    let query = format!(r#"{{ book(id: "{}") {{ title author {{ id }} }} }}"#, added["id"].as_str().unwrap());
    let result = data(h.schema.execute(query).await);

    assert_eq!(result, json!({ "book": { "title": "Orphan", "author": null } }));
}

#[tokio::test]
async fn test_author_books_matches_author_id_in_insertion_order() {
    let h = harness();
    let storm = add_book(&h.schema, "The Storm", "1", Some(1898)).await;
    add_book(&h.schema, "Oracle Night", "2", Some(2003)).await;
    let bayou = add_book(&h.schema, "Bayou Folk", "1", Some(1894)).await;

    let result = data(h.schema.execute(r#"{ author(id: "1") { books { id } } }"#).await);
    let ids: Vec<&str> = result["author"]["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();

    assert_eq!(
        ids,
        vec!["1", storm["id"].as_str().unwrap(), bayou["id"].as_str().unwrap()]
    );
}

#[tokio::test]
async fn test_author_without_books_has_empty_list() {
    let store = Store::with_records(
        Vec::new(),
        vec![bookshelf::store::AuthorRecord {
            id: "7".to_string(),
            name: "Nobody Yet".to_string(),
            bio: None,
        }],
    );
    let schema = build_schema(store, PubSub::new(), None);

    let result = data(schema.execute(r#"{ author(id: "7") { bio books { id } } }"#).await);
    assert_eq!(result, json!({ "author": { "bio": null, "books": [] } }));
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_add_book_round_trip() {
    let h = harness();
    let added = add_book(&h.schema, "X", "1", Some(2020)).await;
    let id = added["id"].as_str().unwrap();

    let query = format!(r#"{{ book(id: "{}") {{ id title authorId publishedYear }} }}"#, id);
    let result = data(h.schema.execute(query).await);

    assert_eq!(
        result,
        json!({ "book": { "id": id, "title": "X", "authorId": "1", "publishedYear": 2020 } })
    );
    assert_eq!(h.store.list_books().len(), 3);
}

#[tokio::test]
async fn test_add_book_accepts_unvalidated_input() {
    let h = harness();
    let added = add_book(&h.schema, "", "404", Some(-50)).await;

    assert_eq!(added["title"], json!(""));
    assert_eq!(added["authorId"], json!("404"));
    assert_eq!(added["publishedYear"], json!(-50));
}

#[tokio::test]
async fn test_add_book_generates_distinct_ids() {
    let h = harness();
    let first = add_book(&h.schema, "Same", "1", None).await;
    let second = add_book(&h.schema, "Same", "1", None).await;
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_add_book_requires_title() {
    let h = harness();
    let response = h
        .schema
        .execute(r#"mutation { addBook(input: { authorId: "1" }) { id } }"#)
        .await;

    assert!(!response.errors.is_empty());
    assert_eq!(h.store.list_books().len(), 2);
}

#[tokio::test]
async fn test_add_book_with_request_token() {
    let h = harness();
    let request = Request::new(r#"mutation { addBook(input: { title: "Tokened", authorId: "2" }) { title } }"#)
        .data(RequestToken("opaque".to_string()));

    let result = data(h.schema.execute(request).await);
    assert_eq!(result, json!({ "addBook": { "title": "Tokened" } }));
}

#[tokio::test]
async fn test_add_book_publishes_to_store_listeners() {
    let h = harness();
    let mut listener = h.events.subscribe(BOOK_ADDED_TOPIC);

    let added = add_book(&h.schema, "Direct", "2", None).await;
    let event = listener.next().await.unwrap();

    assert_eq!(json!(event.id), added["id"]);
    assert_eq!(event.title, "Direct");
}

// ============================================================================
// Subscriptions
// ============================================================================

const BOOK_ADDED_SUBSCRIPTION: &str = "subscription { bookAdded { id title authorId author { name } } }";

#[tokio::test]
async fn test_subscriber_receives_exactly_one_event_per_add() {
    let h = harness();
    let mut stream = h.schema.execute_stream(BOOK_ADDED_SUBSCRIPTION);

    let first = tokio::spawn(async move {
        let response = stream.next().await;
        (response, stream)
    });
    wait_for_listeners(&h.events, 1).await;

    add_book(&h.schema, "New Title", "2", None).await;

    let (response, mut stream) = timeout(Duration::from_secs(1), first)
        .await
        .expect("event delivered in time")
        .unwrap();
    let event = data(response.expect("stream still open"));
    assert_eq!(event["bookAdded"]["title"], json!("New Title"));
    assert_eq!(event["bookAdded"]["author"]["name"], json!("Paul Auster"));

    assert!(
        timeout(Duration::from_millis(100), stream.next()).await.is_err(),
        "only one event expected"
    );
}

#[tokio::test]
async fn test_late_subscriber_misses_past_events() {
    let h = harness();
    add_book(&h.schema, "Before", "1", None).await;

    let mut late = h.schema.execute_stream(BOOK_ADDED_SUBSCRIPTION);
    assert!(timeout(Duration::from_millis(100), late.next()).await.is_err());
    assert_eq!(h.events.listener_count(BOOK_ADDED_TOPIC), 1);
}

#[tokio::test]
async fn test_every_open_subscriber_is_notified() {
    let h = harness();
    let mut streams = Vec::new();
    for _ in 0..3 {
        let mut stream = h.schema.execute_stream("subscription { bookAdded { title } }");
        streams.push(tokio::spawn(async move { stream.next().await }));
    }
    wait_for_listeners(&h.events, 3).await;

    add_book(&h.schema, "Broadcast", "1", None).await;

    for handle in streams {
        let response = timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
        let event = data(response.unwrap());
        assert_eq!(event, json!({ "bookAdded": { "title": "Broadcast" } }));
    }
}

#[tokio::test]
async fn test_closing_subscription_deregisters_listener() {
    let h = harness();
    let mut stream = h.schema.execute_stream(BOOK_ADDED_SUBSCRIPTION);

    let pending = tokio::spawn(async move {
        let _ = timeout(Duration::from_millis(50), stream.next()).await;
        stream
    });
    wait_for_listeners(&h.events, 1).await;

    let stream = pending.await.unwrap();
    drop(stream);

    assert_eq!(h.events.listener_count(BOOK_ADDED_TOPIC), 0);
    let delivered = h.events.publish(
        BOOK_ADDED_TOPIC,
        h.store.insert_book(NewBook {
            title: "Nobody listening".to_string(),
            published_year: None,
            author_id: "1".to_string(),
        }),
    );
    assert_eq!(delivered, 0);
}

// ============================================================================
// Schema contract
// ============================================================================

#[test]
fn test_sdl_nullability_contract() {
    let sdl = build_schema(Store::empty(), PubSub::new(), None).sdl();

    assert!(sdl.contains("books: [Book!]\n"), "{}", sdl);
    assert!(sdl.contains("authors: [Author!]\n"), "{}", sdl);
    assert!(sdl.contains("book(id: ID!): Book\n"), "{}", sdl);
    assert!(sdl.contains("author(id: ID!): Author\n"), "{}", sdl);
    assert!(sdl.contains("addBook(input: AddBookInput!): Book\n"), "{}", sdl);
    assert!(sdl.contains("bookAdded: Book\n"), "{}", sdl);
    assert!(sdl.contains("publishedYear: Int\n"), "{}", sdl);
    assert!(sdl.contains("authorId: ID!"), "{}", sdl);
}

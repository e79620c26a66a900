//! End-to-end tests of the catalog API over a real socket.

use book_catalog::build_router;
use book_catalog::search::types::{Book, BookDetailsResponse, MessageResponse};
use book_catalog::storage::{CatalogStore, JsonFileStore, MemoryStore, SharedStore};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;

async fn spawn_server(store: SharedStore) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, build_router(store)).await.unwrap();
    });

    format!("http://{}", addr)
}

fn dune_catalog() -> Vec<Book> {
    vec![
        Book::new("1", "Dune").with_category("Science"),
        Book::new("2", "Dune Messiah").with_category("Science"),
        Book::new("3", "The Hobbit").with_category("Fantasy"),
    ]
}

#[tokio::test]
async fn test_search_endpoint() {
    let base = spawn_server(Arc::new(MemoryStore::with_books(dune_catalog()))).await;

    let resp = reqwest::get(format!("{}/api/search?q=dune", base)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let books: Vec<Book> = resp.json().await.unwrap();
    let ids: Vec<String> = books.iter().map(|b| b.id().into_owned()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn test_search_endpoint_refinement() {
    let base = spawn_server(Arc::new(MemoryStore::with_books(dune_catalog()))).await;

    let resp = reqwest::get(format!(
        "{}/api/search?q=e&category=science&sort=desc&limit=1",
        base
    ))
    .await
    .unwrap();

    let books: Vec<Book> = resp.json().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title(), "Dune Messiah");
}

#[tokio::test]
async fn test_search_endpoint_missing_q() {
    let base = spawn_server(Arc::new(MemoryStore::new())).await;

    let resp = reqwest::get(format!("{}/api/search", base)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let body: MessageResponse = resp.json().await.unwrap();
    assert_eq!(body.message, "Missing query parameter q");
}

#[tokio::test]
async fn test_add_then_search_and_detail() {
    let memory = Arc::new(MemoryStore::new());
    let base = spawn_server(memory.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/add", base))
        .json(&json!({ "title": "New Book", "category": "Fiction" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
    assert_eq!(resp.json::<serde_json::Value>().await.unwrap(), json!({ "message": "Book added" }));

    let stored = memory.load_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    let id = stored[0].id().into_owned();

    let found: Vec<Book> = reqwest::get(format!("{}/api/search?q=new", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found, stored);

    let details: BookDetailsResponse = reqwest::get(format!("{}/api/books/{}", base, id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(details.book.title(), "New Book");
    assert!(details.similar_books.is_empty());
}

#[tokio::test]
async fn test_add_invalid_body_is_json_message() {
    let memory = Arc::new(MemoryStore::new());
    let base = spawn_server(memory.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/add", base))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: MessageResponse = resp.json().await.unwrap();
    assert!(!body.message.is_empty());

    let resp = client
        .post(format!("{}/api/add", base))
        .body(r#"{"title":"No Header"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 415);
    let body: MessageResponse = resp.json().await.unwrap();
    assert!(!body.message.is_empty());

    assert!(memory.is_empty().await);
}

#[tokio::test]
async fn test_add_accepts_non_string_members() {
    let memory = Arc::new(MemoryStore::new());
    let base = spawn_server(memory.clone()).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/api/add", base))
        .json(&json!({ "title": "Dune", "isbn": 9780441013593u64, "image": null }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    let stored = memory.load_all().await.unwrap();
    assert_eq!(stored[0].isbn().as_deref(), Some("9780441013593"));
}

#[tokio::test]
async fn test_search_invalid_sort_is_json_message() {
    let base = spawn_server(Arc::new(MemoryStore::with_books(dune_catalog()))).await;

    let resp = reqwest::get(format!("{}/api/search?q=dune&sort=sideways", base))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let body: MessageResponse = resp.json().await.unwrap();
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn test_search_keeps_trailing_space() {
    let base = spawn_server(Arc::new(MemoryStore::with_books(dune_catalog()))).await;

    let books: Vec<Book> = reqwest::get(format!("{}/api/search?q=dune%20", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let ids: Vec<String> = books.iter().map(|b| b.id().into_owned()).collect();
    assert_eq!(ids, vec!["2"]);
}

#[tokio::test]
async fn test_add_wrong_method() {
    let base = spawn_server(Arc::new(MemoryStore::new())).await;

    let resp = reqwest::get(format!("{}/api/add", base)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 405);

    let body: MessageResponse = resp.json().await.unwrap();
    assert_eq!(body.message, "Method not allowed");
}

#[tokio::test]
async fn test_book_detail_not_found() {
    let base = spawn_server(Arc::new(MemoryStore::with_books(dune_catalog()))).await;

    for path in ["/api/books/missing", "/api/books/missing/similar"] {
        let resp = reqwest::get(format!("{}{}", base, path)).await.unwrap();
        assert_eq!(resp.status().as_u16(), 404, "{}", path);

        let body: MessageResponse = resp.json().await.unwrap();
        assert_eq!(body.message, "Book not found");
    }
}

#[tokio::test]
async fn test_similar_endpoint() {
    let base = spawn_server(Arc::new(MemoryStore::with_books(dune_catalog()))).await;

    let books: Vec<Book> = reqwest::get(format!("{}/api/books/1/similar", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let ids: Vec<String> = books.iter().map(|b| b.id().into_owned()).collect();
    assert_eq!(ids, vec!["2"]);
}

#[tokio::test]
async fn test_file_backed_service_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    let store = JsonFileStore::new(&path);
    store.initialize().await.unwrap();

    let base = spawn_server(Arc::new(store)).await;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/add", base))
        .json(&json!({ "title": "Persistent", "published": "2020-02-02" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    let books = JsonFileStore::new(&path).load_all().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title(), "Persistent");
    assert_eq!(books[0].published().as_deref(), Some("2020-02-02"));
}

#[tokio::test]
async fn test_malformed_file_is_server_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(&path, "not json").unwrap();

    let base = spawn_server(Arc::new(JsonFileStore::new(&path))).await;

    let resp = reqwest::get(format!("{}/api/search?q=dune", base)).await.unwrap();
    assert_eq!(resp.status().as_u16(), 500);

    let body: MessageResponse = resp.json().await.unwrap();
    assert!(body.message.contains("not valid"));
}

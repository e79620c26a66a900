//! Book Catalog Service Library
//!
//! A small HTTP/JSON service over a book catalog persisted as one JSON file.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`storage`**: Whole-collection persistence (`load_all` / `save_all`) with a JSON
//!   file backend and an in-memory backend.
//! - **`search`**: Title search, lookup by id and the "similar books" scan.
//! - **`ingestion`**: Appends new books under freshly assigned ids.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: The shared error type and its HTTP mapping.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod search;
pub mod storage;

use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use ingestion::handlers::{handle_add_book, handle_method_not_allowed};
use search::handlers::{handle_get_book, handle_search, handle_similar_books};
use storage::SharedStore;

pub const ROUTE_SEARCH: &str = "/api/search";
pub const ROUTE_ADD: &str = "/api/add";
pub const ROUTE_BOOK: &str = "/api/books/:id";
pub const ROUTE_SIMILAR: &str = "/api/books/:id/similar";

/// Routes of the catalog API, bound to `store`.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route(ROUTE_SEARCH, get(handle_search))
        .route(
            ROUTE_ADD,
            post(handle_add_book).fallback(handle_method_not_allowed),
        )
        .route(ROUTE_BOOK, get(handle_get_book))
        .route(ROUTE_SIMILAR, get(handle_similar_books))
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
}

//! Search Service Module
//!
//! Read-only views over the full catalog.
//!
//! ## Overview
//! Every operation loads the whole collection from the `CatalogStore` and filters it
//! in memory. Nothing is indexed or cached between calls.
//!
//! ## Responsibilities
//! - **Search**: Case-insensitive substring match on titles, in store order.
//! - **Lookup**: Exact match on a book id.
//! - **Similar books**: Other books sharing a title substring or the exact category.
//! - **Refinement**: Optional category filter, title sort and pagination of a result.
//!
//! ## Submodules
//! - **`engine`**: The matching logic, free of any I/O.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The `Book` record and the API's request/response shapes.

pub mod engine;
pub mod handlers;
pub mod types;

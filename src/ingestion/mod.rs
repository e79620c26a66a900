//! Ingestion Service Module
//!
//! Grows the catalog one book at a time.
//!
//! ## Workflow
//! 1. **Assign**: Gives the incoming fields a fresh UUID v4 id.
//! 2. **Append**: Loads the full collection and pushes the new book to the end.
//! 3. **Persist**: Writes the full collection back through the `CatalogStore`.

pub mod handlers;
pub mod service;
pub mod types;

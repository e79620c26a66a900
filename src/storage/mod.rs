//! Catalog Storage Module
//!
//! Whole-collection persistence for the book catalog.
//!
//! ## Core Concepts
//! - **Store contract**: `CatalogStore` exposes only `load_all` and `save_all`. Every
//!   query loads the full collection and every mutation rewrites it.
//! - **File backend**: `JsonFileStore` keeps the catalog as a single JSON array on disk.
//! - **Memory backend**: `MemoryStore` keeps the same contract in process, for tests and
//!   for running without a data file.
//!
//! There is no locking. Concurrent writers can lose updates.

pub mod file;
pub mod memory;
pub mod store;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{CatalogStore, SharedStore};

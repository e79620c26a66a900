use crate::error::Result;
use crate::search::types::Book;
use async_trait::async_trait;
use std::sync::Arc;

/// Whole-collection persistence for the catalog.
///
/// Every read returns the full collection and every write replaces it. There is
/// no locking: two writers that load before either saves will lose one update.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Loads every stored book in insertion order.
    async fn load_all(&self) -> Result<Vec<Book>>;

    /// Replaces the stored collection with `books`.
    async fn save_all(&self, books: &[Book]) -> Result<()>;
}

/// Handle shared with the HTTP handlers through an `Extension` layer.
pub type SharedStore = Arc<dyn CatalogStore>;

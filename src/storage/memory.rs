use super::store::CatalogStore;
use crate::error::Result;
use crate::search::types::Book;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process catalog with the same whole-collection semantics as the file store.
///
/// Callers still get copies: `load_all` clones the collection and `save_all`
/// replaces it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn save_all(&self, books: &[Book]) -> Result<()> {
        *self.books.write().await = books.to_vec();
        Ok(())
    }
}

use super::store::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::search::types::Book;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Catalog backed by one JSON file holding a top-level array of books.
///
/// The file is read in full on every `load_all` and rewritten in full on every
/// `save_all`. Writes go to a sibling `.tmp` file first and are renamed over the
/// target, so a reader sees either the old or the new array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and an empty catalog if the file is missing.
    ///
    /// An existing file is left as it is, even if it is malformed.
    pub async fn initialize(&self) -> Result<()> {
        if fs::try_exists(&self.path)
            .await
            .map_err(|e| self.storage_error(e))?
        {
            tracing::debug!("Catalog file {} already exists", self.path.display());
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error(e))?;
        }

        tracing::info!("Creating empty catalog at {}", self.path.display());
        self.save_all(&[]).await
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn storage_error(&self, source: std::io::Error) -> CatalogError {
        CatalogError::Storage {
            path: self.path.clone(),
            source,
        }
    }

    fn malformed_error(&self, source: serde_json::Error) -> CatalogError {
        CatalogError::Malformed {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl CatalogStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<Book>> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.storage_error(e))?;

        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(|e| self.malformed_error(e))?;
        tracing::debug!("Loaded {} books from {}", books.len(), self.path.display());
        Ok(books)
    }

    async fn save_all(&self, books: &[Book]) -> Result<()> {
        let content = serde_json::to_string_pretty(books).map_err(|e| self.malformed_error(e))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, content)
            .await
            .map_err(|e| self.storage_error(e))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.storage_error(e))?;

        tracing::debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }
}

//! Catalog Errors
//!
//! A single error type shared by the store, the query and ingestion services,
//! and the HTTP layer. Every variant maps to a structured JSON response so that
//! no storage or lookup failure escapes a handler as a panic.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;

use crate::search::types::MessageResponse;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The backing file could not be read, written or renamed.
    #[error("Failed to access catalog file {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a JSON array of books.
    #[error("Catalog file {} is not valid: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Book {0} not found")]
    NotFound(String),

    /// The add request body was not a JSON object.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The search query string could not be decoded.
    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

impl CatalogError {
    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidBody(rejection) => rejection.status(),
            CatalogError::InvalidQuery(rejection) => rejection.status(),
            CatalogError::Storage { .. } | CatalogError::Malformed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            CatalogError::NotFound(id) => {
                tracing::debug!("Book {} not found", id);
                "Book not found".to_string()
            }
            CatalogError::InvalidBody(rejection) => {
                tracing::debug!("Rejected add request body: {}", rejection);
                rejection.body_text()
            }
            CatalogError::InvalidQuery(rejection) => {
                tracing::debug!("Rejected search query: {}", rejection);
                rejection.body_text()
            }
            other => {
                tracing::error!("Catalog storage failure: {}", other);
                other.to_string()
            }
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}

//! Ingestion Data Types
//!
//! The request body accepted by the add endpoint.

use crate::search::types::{Book, FIELD_ID};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields supplied by a client when adding a book.
///
/// Any JSON object is accepted. No member is required and none is checked, so
/// members are stored with whatever names and types the client sent. A
/// client-supplied `id` is always replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookInput {
    pub fields: Map<String, Value>,
}

impl BookInput {
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Builds the stored record for this input under `id`.
    ///
    /// The id goes after the client's members, or in place of a client `id`.
    pub fn into_book(self, id: String) -> Book {
        let mut book = Book {
            fields: self.fields,
        };
        book.set_field(FIELD_ID, id);
        book
    }
}

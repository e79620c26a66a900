use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Category value that means "no filter" when used in a query.
pub const CATEGORY_ALL: &str = "All";

/// Categories offered by the add form. Stored values are not checked against it.
pub const CATEGORIES: [&str; 5] = ["Fiction", "Non-fiction", "Fantasy", "Science", "Biography"];

pub const FIELD_ID: &str = "id";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_AUTHOR: &str = "author";
pub const FIELD_IMAGE: &str = "image";
pub const FIELD_ISBN: &str = "isbn";
pub const FIELD_PUBLISHED: &str = "published";
/// Name the detail page used for the publication date.
pub const FIELD_LAUNCH_DATE: &str = "launchDate";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_CATEGORY: &str = "category";

/// A single catalog record.
///
/// Only `id` carries an invariant (uniqueness). Every member is kept as the JSON
/// value it was stored with, in its original order, so a load/save cycle writes
/// the record back unchanged and an oddly typed member never fails a load.
/// The accessors read members as text: strings as-is, numbers and booleans in
/// their JSON spelling, anything else as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Book {
    pub fields: Map<String, Value>,
}

impl Book {
    /// A book with only an id and a title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::default()
            .with_field(FIELD_ID, id.into())
            .with_field(FIELD_TITLE, title.into())
    }

    pub fn with_category(self, category: impl Into<String>) -> Self {
        self.with_field(FIELD_CATEGORY, category.into())
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set_field(key, value);
        self
    }

    /// Sets `key`, keeping its position if the record already has it.
    pub fn set_field(&mut self, key: &str, value: impl Into<Value>) {
        self.fields.insert(key.to_string(), value.into());
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.fields.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }

    /// Missing or non-scalar ids read as the empty string.
    pub fn id(&self) -> Cow<'_, str> {
        self.text(FIELD_ID).unwrap_or_default()
    }

    /// Missing or non-scalar titles read as the empty string.
    pub fn title(&self) -> Cow<'_, str> {
        self.text(FIELD_TITLE).unwrap_or_default()
    }

    pub fn author(&self) -> Option<Cow<'_, str>> {
        self.text(FIELD_AUTHOR)
    }

    pub fn image(&self) -> Option<Cow<'_, str>> {
        self.text(FIELD_IMAGE)
    }

    pub fn isbn(&self) -> Option<Cow<'_, str>> {
        self.text(FIELD_ISBN)
    }

    /// The publication date, from `published` or else the older `launchDate`.
    pub fn published(&self) -> Option<Cow<'_, str>> {
        self.text(FIELD_PUBLISHED)
            .or_else(|| self.text(FIELD_LAUNCH_DATE))
    }

    pub fn description(&self) -> Option<Cow<'_, str>> {
        self.text(FIELD_DESCRIPTION)
    }

    pub fn category(&self) -> Option<Cow<'_, str>> {
        self.text(FIELD_CATEGORY)
    }
}

/// Sort order applied to search results by title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Optional server-side refinement of a search result.
#[derive(Debug, Clone, Default)]
pub struct RefineOptions {
    pub category: Option<String>,
    pub sort: Option<SortOrder>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort: Option<SortOrder>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl SearchParams {
    pub fn refine_options(&self) -> RefineOptions {
        RefineOptions {
            category: self.category.clone(),
            sort: self.sort,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Body of the detail endpoint: the book plus its similar books.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailsResponse {
    pub book: Book,
    pub similar_books: Vec<Book>,
}

/// `{ "message": ... }` body used by every non-data response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

use super::types::BookInput;
use crate::error::Result;
use crate::search::types::{Book, CATEGORIES, CATEGORY_ALL};
use crate::storage::CatalogStore;

/// Appends a new book to the catalog and returns it with its assigned id.
///
/// This is a plain read-modify-write of the whole collection. Two concurrent
/// calls can both load before either saves, in which case the later save drops
/// the earlier book.
pub async fn add_book(store: &dyn CatalogStore, input: BookInput) -> Result<Book> {
    let book = input.into_book(new_book_id());

    if let Some(category) = book.category() {
        if category == CATEGORY_ALL {
            tracing::warn!(
                "Book {} stored with the wildcard category {:?}",
                book.id(),
                CATEGORY_ALL
            );
        } else if !CATEGORIES.contains(&category.as_ref()) {
            tracing::debug!("Book {} has unlisted category {:?}", book.id(), category);
        }
    }

    let mut books = store.load_all().await?;
    books.push(book.clone());
    store.save_all(&books).await?;

    tracing::info!(
        "Added book {} ({:?}), catalog now holds {} books",
        book.id(),
        book.title(),
        books.len()
    );
    Ok(book)
}

pub fn new_book_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

use super::types::{Book, CATEGORY_ALL, RefineOptions, SortOrder};
use crate::error::{CatalogError, Result};

/// Case-insensitive substring match on the title.
///
/// A blank query matches nothing. Otherwise the query is matched as given,
/// surrounding whitespace included. Results keep store order.
pub fn search(books: &[Book], query: &str) -> Vec<Book> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    books
        .iter()
        .filter(|book| book.title().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn get_by_id(books: &[Book], id: &str) -> Option<Book> {
    books.iter().find(|book| book.id() == id).cloned()
}

/// Every other book whose title contains the target's title, or whose category
/// equals the target's category.
pub fn find_similar(books: &[Book], id: &str) -> Result<Vec<Book>> {
    let target = get_by_id(books, id).ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
    Ok(similar_to(books, &target))
}

/// The title check ignores case. An empty target title is contained in every
/// title, and two books without a category share one.
pub fn similar_to(books: &[Book], target: &Book) -> Vec<Book> {
    let target_id = target.id();
    let needle = target.title().to_lowercase();
    let target_category = target.category();

    books
        .iter()
        .filter(|book| book.id() != target_id)
        .filter(|book| {
            book.title().to_lowercase().contains(&needle) || book.category() == target_category
        })
        .cloned()
        .collect()
}

/// Category filter, title sort and pagination over an already computed result.
pub fn refine(mut results: Vec<Book>, options: &RefineOptions) -> Vec<Book> {
    if let Some(category) = options.category.as_deref() {
        let category = category.trim();
        if !category.is_empty() && !category.eq_ignore_ascii_case(CATEGORY_ALL) {
            let wanted = category.to_lowercase();
            results.retain(|book| book.category().is_some_and(|c| c.to_lowercase() == wanted));
        }
    }

    match options.sort {
        // sort_by is stable, equal titles keep store order
        Some(SortOrder::Asc) => results.sort_by(compare_titles),
        Some(SortOrder::Desc) => results.sort_by(|a, b| compare_titles(b, a)),
        None => {}
    }

    let offset = options.offset.unwrap_or(0);
    let limit = options.limit.unwrap_or(usize::MAX);
    results.into_iter().skip(offset).take(limit).collect()
}

fn compare_titles(a: &Book, b: &Book) -> std::cmp::Ordering {
    let (a, b) = (a.title(), b.title());
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(&b))
}

//! Free-text filtering of the inventory

use crate::types::Book;

/// Records whose title, author or ISBN contains `query`, ignoring case
///
/// Order is preserved. An empty query matches every record.
pub fn search<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    if query.is_empty() {
        return books.iter().collect();
    }

    let needle = query.to_lowercase();
    books
        .iter()
        .filter(|book| book.matches_lowercase(&needle))
        .collect()
}

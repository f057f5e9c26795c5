//! The Book record - a single inventory entry

use super::ValidatedBook;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a book in the inventory
///
/// Fresh ids are random UUIDs. Ids read back from storage are kept verbatim,
/// whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Generate a new random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A book held in the inventory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Store-assigned identifier, never changed after creation
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Publication year
    pub year: i32,

    /// ISBN, the uniqueness key of the inventory
    pub isbn: String,

    /// Unit price, never negative
    pub price: f64,
}

impl Book {
    /// Attach an id to an already validated book
    pub fn from_validated(id: BookId, book: ValidatedBook) -> Self {
        Self {
            id,
            title: book.title,
            author: book.author,
            year: book.year,
            isbn: book.isbn,
            price: book.price,
        }
    }

    /// Whether the title, author or ISBN contains `needle`
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.isbn.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book {
            id: BookId::from("1700000000000"),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            isbn: "978-0-441-01359-3".to_string(),
            price: 15.99,
        }
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(BookId::generate(), BookId::generate());
    }

    #[test]
    fn test_matches_lowercase() {
        let book = dune();
        assert!(book.matches_lowercase("dun"));
        assert!(book.matches_lowercase("herbert"));
        assert!(book.matches_lowercase("01359"));
        assert!(!book.matches_lowercase("foundation"));
    }

    #[test]
    fn test_book_serialization() {
        let book = dune();
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], "1700000000000");
        assert_eq!(json["year"], 1965);

        let deserialized: Book = serde_json::from_value(json).unwrap();
        assert_eq!(book, deserialized);
    }
}

//! Error types for Bookstore Core

use crate::types::{BookId, Field};
use thiserror::Error;

/// Result type alias using BookstoreError
pub type Result<T> = std::result::Result<T, BookstoreError>;

/// Top-level error type for all inventory operations
#[derive(Debug, Error)]
pub enum BookstoreError {
    #[error("Invalid book: {0}")]
    Validation(#[from] ValidationError),

    #[error("A book with ISBN {isbn} is already in your store")]
    DuplicateIsbn { isbn: String },

    /// Soft failure: the inventory is left untouched
    #[error("No book with id {0}")]
    NotFound(BookId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

impl BookstoreError {
    /// Whether the error leaves nothing for the user to fix
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Errors raised while validating a candidate book
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(Field),

    #[error("Year is not a whole number: {0}")]
    InvalidYear(String),

    #[error("Price is not a number: {0}")]
    InvalidPrice(String),

    #[error("Price cannot be negative: {0}")]
    NegativePrice(f64),
}

/// Errors that occur in a persistence backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Errors that occur while encoding or decoding the persisted inventory
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Malformed inventory document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Inventory document breaks an invariant: {0}")]
    Inconsistent(String),
}

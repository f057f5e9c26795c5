//! Bookstore Core Library
//!
//! This crate owns the book inventory: validation of candidate books,
//! ISBN uniqueness, removal, free-text search and aggregate statistics.
//! The inventory is mirrored to a [`storage::KeyValueStore`] after every change
//! and reloaded from it when an [`InventoryStore`] is opened.

pub mod codec;
pub mod config;
pub mod error;
pub mod search;
pub mod stats;
pub mod storage;
pub mod store;
pub mod types;

pub use config::{IsbnMatch, StoreConfig};
pub use error::{BookstoreError, CodecError, Result, StorageError, ValidationError};
pub use search::search;
pub use stats::Statistics;
pub use storage::{KeyValueStore, LocalStorage, MemoryStorage};
pub use store::{Change, InventoryStore};
pub use types::{Book, BookCandidate, BookId, Field, ValidatedBook};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let store = InventoryStore::open(MemoryStorage::new(), StoreConfig::default());
        assert!(store.is_empty());
        assert_eq!(store.statistics(), Statistics::default());
    }
}

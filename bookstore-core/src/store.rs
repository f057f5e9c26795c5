//! The inventory store: owner of the canonical list of books
//!
//! A store is opened once per session over a [`KeyValueStore`]. Every
//! successful mutation is written back to the backend before the call
//! returns. Backend failures never undo or block an in-memory change; they
//! are logged and reported through [`Change::persisted`].

use crate::codec;
use crate::config::StoreConfig;
use crate::error::{BookstoreError, Result};
use crate::search;
use crate::stats::Statistics;
use crate::storage::KeyValueStore;
use crate::types::{Book, BookCandidate, BookId};

/// Outcome of a successful add or remove
#[derive(Debug)]
pub struct Change<'a> {
    /// The book that was added or removed
    pub book: Book,

    /// The inventory after the change
    pub books: &'a [Book],

    /// Whether the new inventory reached the persistence backend
    pub persisted: bool,
}

/// Book inventory bound to a persistence backend
pub struct InventoryStore<S> {
    storage: S,
    config: StoreConfig,
    books: Vec<Book>,
}

impl<S: KeyValueStore> InventoryStore<S> {
    /// Open the store, loading whatever inventory the backend holds
    ///
    /// A missing, unreadable, malformed or inconsistent document yields an
    /// empty inventory.
    pub fn open(storage: S, config: StoreConfig) -> Self {
        let books = load_books(&storage, &config.storage_key);
        Self {
            storage,
            config,
            books,
        }
    }

    /// Validate a candidate and append it to the inventory
    pub fn add(&mut self, candidate: &BookCandidate) -> Result<Change<'_>> {
        let validated = candidate.validate()?;

        let isbn_match = self.config.isbn_match;
        if self
            .books
            .iter()
            .any(|book| isbn_match.same(&book.isbn, &validated.isbn))
        {
            return Err(BookstoreError::DuplicateIsbn {
                isbn: validated.isbn,
            });
        }

        let book = Book::from_validated(self.fresh_id(), validated);
        tracing::info!(id = %book.id, title = %book.title, "Added book");
        self.books.push(book.clone());

        let persisted = self.persist();
        Ok(Change {
            book,
            books: &self.books,
            persisted,
        })
    }

    /// Remove the book with the given id
    ///
    /// An unknown id yields [`BookstoreError::NotFound`] and writes nothing.
    pub fn remove(&mut self, id: &BookId) -> Result<Change<'_>> {
        let index = self
            .books
            .iter()
            .position(|book| &book.id == id)
            .ok_or_else(|| BookstoreError::NotFound(id.clone()))?;

        // Vec::remove shifts the tail, keeping insertion order
        let book = self.books.remove(index);
        tracing::info!(id = %book.id, title = %book.title, "Removed book");

        let persisted = self.persist();
        Ok(Change {
            book,
            books: &self.books,
            persisted,
        })
    }

    /// Encode and save the current inventory, logging any failure
    fn persist(&self) -> bool {
        let key = &self.config.storage_key;
        let result = codec::encode(&self.books)
            .map_err(BookstoreError::from)
            .and_then(|data| self.storage.save(key, &data).map_err(BookstoreError::from));

        match result {
            Ok(()) => {
                tracing::debug!(key = %key, count = self.books.len(), "Saved inventory");
                true
            }
            Err(e) => {
                tracing::warn!(key = %key, "Failed to save inventory: {}", e);
                false
            }
        }
    }

    fn fresh_id(&self) -> BookId {
        loop {
            let id = BookId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

impl<S> InventoryStore<S> {
    /// The inventory in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| &book.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// See [`search::search`]
    pub fn search(&self, query: &str) -> Vec<&Book> {
        search::search(&self.books, query)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_books(&self.books)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn load_books<S: KeyValueStore>(storage: &S, key: &str) -> Vec<Book> {
    let data = match storage.load(key) {
        Ok(Some(data)) => data,
        Ok(None) => {
            tracing::debug!(key = %key, "No saved inventory, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key = %key, "Failed to read saved inventory, starting empty: {}", e);
            return Vec::new();
        }
    };

    match codec::decode(&data) {
        Ok(books) => {
            tracing::debug!(key = %key, count = books.len(), "Loaded inventory");
            books
        }
        Err(e) => {
            tracing::warn!(key = %key, "Discarding malformed inventory: {}", e);
            Vec::new()
        }
    }
}

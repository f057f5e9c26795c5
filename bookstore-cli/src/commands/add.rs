//! Add command implementation

use anyhow::{bail, Context, Result};
use bookstore_core::{BookCandidate, BookstoreError, InventoryStore, LocalStorage};

/// Add a book to the inventory
pub fn add(
    mut store: InventoryStore<LocalStorage>,
    title: String,
    author: String,
    year: String,
    isbn: String,
    price: String,
) -> Result<()> {
    let candidate = BookCandidate {
        title,
        author,
        year,
        isbn,
        price,
    };

    match store.add(&candidate) {
        Ok(change) => {
            println!(
                "Added \"{}\" by {} to the store.",
                change.book.title, change.book.author
            );
            println!("  Id: {}", change.book.id);
            println!("  Books in store: {}", change.books.len());
            if !change.persisted {
                super::warn_unsaved(&store);
            }
            Ok(())
        }
        Err(BookstoreError::DuplicateIsbn { isbn }) => {
            eprintln!("A book with ISBN {} is already in your store.", isbn);
            bail!("Book already exists");
        }
        Err(e) => Err(e).context("Could not add book"),
    }
}

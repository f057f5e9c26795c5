//! Snapshot tests for bookstore-core using insta
//!
//! These tests pin the persisted document format so that stored inventories
//! stay readable across releases.

use bookstore_core::{codec, Book, BookId};

/// Helper to create a sample inventory for testing
fn sample_books() -> Vec<Book> {
    vec![
        Book {
            // Fixed ids for reproducible snapshots
            id: BookId::from("12345678-1234-1234-1234-123456789abc"),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            isbn: "978-0-441-01359-3".to_string(),
            price: 15.99,
        },
        Book {
            id: BookId::from("1718000000000"),
            title: "Foundation".to_string(),
            author: "Isaac Asimov".to_string(),
            year: 1951,
            isbn: "978-0-553-29335-7".to_string(),
            price: 8.5,
        },
    ]
}

#[test]
fn test_inventory_document_snapshot() {
    let json = codec::encode(&sample_books()).unwrap();
    insta::assert_snapshot!(json, @r#"
    [
      {
        "id": "12345678-1234-1234-1234-123456789abc",
        "title": "Dune",
        "author": "Frank Herbert",
        "year": 1965,
        "isbn": "978-0-441-01359-3",
        "price": 15.99
      },
      {
        "id": "1718000000000",
        "title": "Foundation",
        "author": "Isaac Asimov",
        "year": 1951,
        "isbn": "978-0-553-29335-7",
        "price": 8.5
      }
    ]
    "#);
}

#[test]
fn test_empty_inventory_snapshot() {
    let json = codec::encode(&[]).unwrap();
    insta::assert_snapshot!(json, @"[]");
}

#[test]
fn test_snapshot_document_decodes() {
    let books = sample_books();
    let json = codec::encode(&books).unwrap();
    assert_eq!(codec::decode(&json).unwrap(), books);
}

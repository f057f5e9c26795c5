//! Serialized form of the inventory: a JSON array of book records

use crate::error::CodecError;
use crate::types::Book;
use std::collections::HashSet;

/// Encode the inventory, preserving order
pub fn encode(books: &[Book]) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(books)?)
}

/// Decode a previously encoded inventory
///
/// A document that parses but could not have been produced by the store
/// (repeated ids or ISBNs, blank text fields, negative prices) is rejected.
pub fn decode(data: &str) -> Result<Vec<Book>, CodecError> {
    let books: Vec<Book> = serde_json::from_str(data)?;
    check(&books)?;
    Ok(books)
}

fn check(books: &[Book]) -> Result<(), CodecError> {
    let mut ids = HashSet::new();
    let mut isbns = HashSet::new();

    for book in books {
        let id = book.id.as_str();
        if id.is_empty() {
            return Err(CodecError::Inconsistent("record with an empty id".to_string()));
        }
        if !ids.insert(id) {
            return Err(CodecError::Inconsistent(format!("duplicate id {}", id)));
        }

        // Stored ISBNs are compared exactly, whatever the active match policy
        if !isbns.insert(book.isbn.as_str()) {
            return Err(CodecError::Inconsistent(format!(
                "duplicate ISBN {}",
                book.isbn
            )));
        }

        let blank = [
            ("title", &book.title),
            ("author", &book.author),
            ("isbn", &book.isbn),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());
        if let Some((field, _)) = blank {
            return Err(CodecError::Inconsistent(format!("book {} has an empty {}", id, field)));
        }

        if !book.price.is_finite() || book.price < 0.0 {
            return Err(CodecError::Inconsistent(format!(
                "book {} has price {}",
                id, book.price
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_legacy_document() {
        // Ids were millisecond timestamps in earlier documents
        let data = r#"[{"id":"1718000000000","title":"Dune","author":"Frank Herbert","year":1965,"isbn":"978-0-441-01359-3","price":15.99}]"#;
        let books = decode(data).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id.as_str(), "1718000000000");
        assert_eq!(books[0].price, 15.99);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("{not json").is_err());
        assert!(decode(r#"{"id":"1"}"#).is_err());
        assert!(decode(r#"[{"id":"1","title":"Dune"}]"#).is_err());
    }

    #[test]
    fn test_decode_rejects_broken_invariants() {
        let cases = [
            // Shared id
            r#"[{"id":"1","title":"A","author":"X","year":1,"isbn":"I1","price":1},
                {"id":"1","title":"B","author":"Y","year":2,"isbn":"I2","price":2}]"#,
            // Shared ISBN
            r#"[{"id":"1","title":"A","author":"X","year":1,"isbn":"X","price":1},
                {"id":"2","title":"B","author":"Y","year":2,"isbn":"X","price":2}]"#,
            // Blank title
            r#"[{"id":"1","title":"  ","author":"X","year":1,"isbn":"I1","price":1}]"#,
            // Negative price
            r#"[{"id":"1","title":"A","author":"X","year":1,"isbn":"I1","price":-5}]"#,
            // Empty id
            r#"[{"id":"","title":"A","author":"X","year":1,"isbn":"I1","price":1}]"#,
        ];

        for data in cases {
            assert!(
                matches!(decode(data), Err(CodecError::Inconsistent(_))),
                "document should be rejected: {}",
                data
            );
        }
    }

    #[test]
    fn test_decode_accepts_isbns_differing_in_format() {
        let data = r#"[{"id":"1","title":"A","author":"X","year":1,"isbn":"978-0","price":1},
                       {"id":"2","title":"B","author":"Y","year":2,"isbn":"9780","price":0}]"#;
        assert_eq!(decode(data).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_inventory() {
        let data = encode(&[]).unwrap();
        assert!(decode(&data).unwrap().is_empty());
    }
}

//! Store configuration

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "bookstore-books";

/// How ISBNs are compared when checking for duplicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsbnMatch {
    /// Byte-for-byte equality
    #[default]
    Exact,

    /// Ignore hyphens, whitespace and ASCII case
    Normalized,
}

impl IsbnMatch {
    /// Whether two ISBNs identify the same book under this policy
    pub fn same(self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::Normalized => normalize_isbn(a) == normalize_isbn(b),
        }
    }
}

/// Strip separators and uppercase the check digit `x`
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Configuration for an [`InventoryStore`](crate::store::InventoryStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key under which the whole inventory is persisted
    pub storage_key: String,

    /// Duplicate detection policy
    pub isbn_match: IsbnMatch,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            isbn_match: IsbnMatch::default(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the duplicate detection policy
    pub fn with_isbn_match(mut self, isbn_match: IsbnMatch) -> Self {
        self.isbn_match = isbn_match;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(IsbnMatch::Exact.same("978-0-441-01359-3", "978-0-441-01359-3"));
        assert!(!IsbnMatch::Exact.same("978-0-441-01359-3", "9780441013593"));
    }

    #[test]
    fn test_normalized_match() {
        assert!(IsbnMatch::Normalized.same("978-0-441-01359-3", "978 0441013593"));
        assert!(IsbnMatch::Normalized.same("0-306-40615-x", "030640615X"));
        assert!(!IsbnMatch::Normalized.same("978-0-441-01359-3", "978-0-441-01359-4"));
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "bookstore-books");
        assert_eq!(config.isbn_match, IsbnMatch::Exact);
    }
}

//! Aggregate figures over the inventory

use crate::types::Book;
use serde::Serialize;

/// Count, total value and average price of a set of books
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub total_value: f64,
    /// Zero for an empty inventory
    pub average_price: f64,
}

impl Statistics {
    pub fn from_books<'a, I>(books: I) -> Self
    where
        I: IntoIterator<Item = &'a Book>,
    {
        let (count, total_value) = books
            .into_iter()
            .fold((0usize, 0.0f64), |(n, sum), book| (n + 1, sum + book.price));

        let average_price = if count > 0 {
            total_value / count as f64
        } else {
            0.0
        };

        Self {
            count,
            total_value,
            average_price,
        }
    }
}

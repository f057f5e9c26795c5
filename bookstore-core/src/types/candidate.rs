//! Candidate books: raw user input awaiting validation

use crate::error::ValidationError;
use std::fmt;

/// A field of the add-book form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Year,
    Isbn,
    Price,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
            Self::Isbn => "isbn",
            Self::Price => "price",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Book data as typed into the form, all fields as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookCandidate {
    pub title: String,
    pub author: String,
    pub year: String,
    pub isbn: String,
    pub price: String,
}

/// A candidate whose fields passed validation, not yet given an id
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: String,
    pub price: f64,
}

impl BookCandidate {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        isbn: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            isbn: isbn.into(),
            price: price.into(),
        }
    }

    /// Trim every field, reject empty ones, and parse the numeric fields
    ///
    /// Fields are checked in form order and all emptiness checks run before
    /// any parsing, so the first reported error is the one the user sees first.
    pub fn validate(&self) -> Result<ValidatedBook, ValidationError> {
        let title = required(Field::Title, &self.title)?;
        let author = required(Field::Author, &self.author)?;
        let year = required(Field::Year, &self.year)?;
        let isbn = required(Field::Isbn, &self.isbn)?;
        let price = required(Field::Price, &self.price)?;

        let year: i32 = year
            .parse()
            .map_err(|_| ValidationError::InvalidYear(year.to_string()))?;

        let price = parse_price(price)?;

        Ok(ValidatedBook {
            title: title.to_string(),
            author: author.to_string(),
            year,
            isbn: isbn.to_string(),
            price,
        })
    }
}

fn required(field: Field, value: &str) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let price: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?;

    // "NaN" and "inf" parse successfully but are not amounts
    if !price.is_finite() {
        return Err(ValidationError::InvalidPrice(raw.to_string()));
    }
    if price < 0.0 {
        return Err(ValidationError::NegativePrice(price));
    }

    // Normalise -0.0 so it never shows up as "-0.00"
    Ok(price + 0.0)
}

//! Core types for the book inventory

mod book;
mod candidate;

pub use book::{Book, BookId};
pub use candidate::{BookCandidate, Field, ValidatedBook};

//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the persistence layer and the UI layer.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Oldest publication year the catalog accepts
pub const MIN_YEAR: i32 = 1000;

/// The current calendar year, used as the upper bound for publication years
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Session-stable identifier for a book record
///
/// Ids are handed out by the library when a record is loaded or added and
/// are never written to disk. The UI addresses rows by id rather than by
/// position, so a row action cannot hit the wrong record after the list
/// has been filtered, sorted, or shortened by a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BookId(pub u64);

/// A single book record in the catalog
///
/// Exactly the five public fields are serialized; the id only exists for
/// the lifetime of the session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    #[serde(skip)]
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

/// Why a submitted book was rejected before any mutation happened
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required!")]
    MissingTitle,
    #[error("Author is required!")]
    MissingAuthor,
    #[error("Publication year must be a number!")]
    YearNotNumeric,
    #[error("Publication year must be between 1000 and {max}!")]
    YearOutOfRange { max: i32 },
}

impl Book {
    /// Check the required-field and year-range invariants.
    ///
    /// `current_year` is passed in rather than read from the clock so the
    /// bound is decided once per user action.
    pub fn validate(&self, current_year: i32) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::MissingAuthor);
        }
        if self.year < MIN_YEAR || self.year > current_year {
            return Err(ValidationError::YearOutOfRange { max: current_year });
        }
        Ok(())
    }

    /// Case-insensitive match on the (title, author) pair.
    /// This is the identity used for duplicate detection at add time.
    pub fn matches_key(&self, title: &str, author: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
            && self.author.to_lowercase() == author.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book {
            id: BookId::default(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            genre: "Sci-Fi".to_string(),
            read: false,
        }
    }

    #[test]
    fn valid_book_passes() {
        assert_eq!(dune().validate(2026), Ok(()));
    }

    #[test]
    fn blank_title_rejected() {
        let mut book = dune();
        book.title = "   ".to_string();
        assert_eq!(book.validate(2026), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn empty_author_rejected() {
        let mut book = dune();
        book.author = String::new();
        assert_eq!(book.validate(2026), Err(ValidationError::MissingAuthor));
    }

    #[test]
    fn year_bounds_enforced() {
        let mut book = dune();
        book.year = 999;
        assert_eq!(
            book.validate(2026),
            Err(ValidationError::YearOutOfRange { max: 2026 })
        );

        book.year = 2027;
        assert_eq!(
            book.validate(2026),
            Err(ValidationError::YearOutOfRange { max: 2026 })
        );

        book.year = 1000;
        assert_eq!(book.validate(2026), Ok(()));
        book.year = 2026;
        assert_eq!(book.validate(2026), Ok(()));
    }

    #[test]
    fn key_match_ignores_case() {
        let book = dune();
        assert!(book.matches_key("DUNE", "frank herbert"));
        assert!(!book.matches_key("Dune", "Brian Herbert"));
    }
}

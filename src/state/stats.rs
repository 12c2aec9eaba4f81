//! Read-only aggregates for the Statistics page
//!
//! Computed fresh from the collection on every render; nothing in here
//! mutates the store.

use std::collections::BTreeMap;

use super::data::Book;

/// Read/unread counts for a single genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreSplit {
    pub genre: String,
    pub read: usize,
    pub unread: usize,
}

/// Everything the Statistics page shows
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    /// Share of the library that has been read, 0.0 for an empty library
    pub percentage_read: f32,
    /// Genre counts, most common first
    pub genres: Vec<(String, usize)>,
    /// Books per publication decade (`year / 10 * 10`), oldest first
    pub decades: Vec<(i32, usize)>,
    /// Up to five authors with the most books, most prolific first
    pub top_authors: Vec<(String, usize)>,
    /// Per-genre read/unread split
    pub read_by_genre: Vec<GenreSplit>,
}

impl LibraryStats {
    pub fn compute(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|book| book.read).count();
        let unread = total - read;
        let percentage_read = if total > 0 {
            read as f32 / total as f32 * 100.0
        } else {
            0.0
        };

        // BTreeMaps keep the tie-break order deterministic (name ascending)
        let mut genres: BTreeMap<String, usize> = BTreeMap::new();
        let mut decades: BTreeMap<i32, usize> = BTreeMap::new();
        let mut authors: BTreeMap<String, usize> = BTreeMap::new();
        let mut splits: BTreeMap<String, (usize, usize)> = BTreeMap::new();

        for book in books {
            *genres.entry(book.genre.clone()).or_default() += 1;
            *decades.entry(book.year / 10 * 10).or_default() += 1;
            *authors.entry(book.author.clone()).or_default() += 1;

            let split = splits.entry(book.genre.clone()).or_default();
            if book.read {
                split.0 += 1;
            } else {
                split.1 += 1;
            }
        }

        let mut genres: Vec<_> = genres.into_iter().collect();
        genres.sort_by(|a, b| b.1.cmp(&a.1));

        let decades: Vec<_> = decades.into_iter().collect();

        let mut top_authors: Vec<_> = authors.into_iter().collect();
        top_authors.sort_by(|a, b| b.1.cmp(&a.1));
        top_authors.truncate(5);

        let read_by_genre = splits
            .into_iter()
            .map(|(genre, (read, unread))| GenreSplit { genre, read, unread })
            .collect();

        LibraryStats {
            total,
            read,
            unread,
            percentage_read,
            genres,
            decades,
            top_authors,
            read_by_genre,
        }
    }

    /// Whether the per-genre split is worth showing: at least one genre
    /// has both a read and an unread book.
    pub fn has_mixed_genre(&self) -> bool {
        self.read_by_genre
            .iter()
            .any(|split| split.read > 0 && split.unread > 0)
    }
}

//! Pure queries over the book collection
//!
//! Everything in here is side-effect free: each function takes a slice of
//! books and returns a fresh vector, leaving the store untouched. The UI
//! runs these at render time for the Library page and on submit for the
//! Search page.

use std::fmt;

use super::data::Book;

/// Read-status filter for the Library page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl ReadFilter {
    pub const ALL: [ReadFilter; 3] = [ReadFilter::All, ReadFilter::Read, ReadFilter::Unread];
}

impl fmt::Display for ReadFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReadFilter::All => "All Books",
            ReadFilter::Read => "Read Books",
            ReadFilter::Unread => "Unread Books",
        })
    }
}

/// Sort key for the Library page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Title,
    Author,
    Year,
    Genre,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Title,
        SortField::Author,
        SortField::Year,
        SortField::Genre,
    ];
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Title => "Title",
            SortField::Author => "Author",
            SortField::Year => "Year",
            SortField::Genre => "Genre",
        })
    }
}

/// Text field a substring search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Author,
    Genre,
}

/// Field selector for the Search page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
    Year,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Author,
        SearchField::Genre,
        SearchField::Year,
    ];

    /// The text field this search targets, or `None` for the numeric year
    pub fn as_text_field(self) -> Option<TextField> {
        match self {
            SearchField::Title => Some(TextField::Title),
            SearchField::Author => Some(TextField::Author),
            SearchField::Genre => Some(TextField::Genre),
            SearchField::Year => None,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
            SearchField::Genre => "Genre",
            SearchField::Year => "Year",
        })
    }
}

/// Keep only the books matching the read-status filter, in input order.
pub fn filter_by_read_status(books: &[Book], filter: ReadFilter) -> Vec<Book> {
    books
        .iter()
        .filter(|book| match filter {
            ReadFilter::All => true,
            ReadFilter::Read => book.read,
            ReadFilter::Unread => !book.read,
        })
        .cloned()
        .collect()
}

/// Keep the books where `needle` occurs anywhere in the chosen field,
/// compared case-insensitively.
pub fn filter_by_field(books: &[Book], field: TextField, needle: &str) -> Vec<Book> {
    let needle = needle.to_lowercase();

    books
        .iter()
        .filter(|book| {
            let haystack = match field {
                TextField::Title => &book.title,
                TextField::Author => &book.author,
                TextField::Genre => &book.genre,
            };
            haystack.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keep the books published exactly in `year`.
pub fn filter_by_year(books: &[Book], year: i32) -> Vec<Book> {
    books
        .iter()
        .filter(|book| book.year == year)
        .cloned()
        .collect()
}

/// Return the books ordered by `field`.
///
/// Text fields sort case-insensitively ascending; Year sorts descending
/// so the newest books come first. The sort is stable, so ties keep
/// their input order.
pub fn sort_by_field(books: &[Book], field: SortField) -> Vec<Book> {
    let mut sorted = books.to_vec();

    match field {
        SortField::Title => sorted.sort_by_key(|book| book.title.to_lowercase()),
        SortField::Author => sorted.sort_by_key(|book| book.author.to_lowercase()),
        SortField::Genre => sorted.sort_by_key(|book| book.genre.to_lowercase()),
        SortField::Year => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::BookId;

    fn book(title: &str, author: &str, year: i32, genre: &str, read: bool) -> Book {
        Book {
            id: BookId::default(),
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
            read,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("Dune", "Frank Herbert", 1965, "Sci-Fi", false),
            book("persuasion", "Jane Austen", 1817, "Romance", true),
            book("Hyperion", "Dan Simmons", 1989, "Sci-Fi", true),
            book("Emma", "jane austen", 1815, "Romance", false),
        ]
    }

    #[test]
    fn filter_all_is_identity() {
        let books = shelf();
        assert_eq!(filter_by_read_status(&books, ReadFilter::All), books);
    }

    #[test]
    fn read_and_unread_partition_the_shelf() {
        let books = shelf();

        let read: Vec<_> = filter_by_read_status(&books, ReadFilter::Read);
        let unread: Vec<_> = filter_by_read_status(&books, ReadFilter::Unread);

        assert_eq!(read.len() + unread.len(), books.len());
        assert!(read.iter().all(|book| book.read));
        assert!(unread.iter().all(|book| !book.read));
    }

    #[test]
    fn substring_search_ignores_case() {
        let books = shelf();

        let hits = filter_by_field(&books, TextField::Author, "herbert");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Dune");
    }

    #[test]
    fn substring_matches_anywhere_in_the_field() {
        let books = shelf();

        let hits = filter_by_field(&books, TextField::Title, "ERS");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "persuasion");
        assert_eq!(hits[1].title, "Hyperion");
    }

    #[test]
    fn genre_search_works_on_free_text() {
        let hits = filter_by_field(&shelf(), TextField::Genre, "sci");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn year_search_is_an_exact_match() {
        let books = shelf();

        let hits = filter_by_year(&books, 1965);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Dune");

        assert!(filter_by_year(&books, 1964).is_empty());
    }

    #[test]
    fn title_sort_is_case_insensitive_ascending() {
        let sorted = sort_by_field(&shelf(), SortField::Title);
        let titles: Vec<_> = sorted.iter().map(|book| book.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Emma", "Hyperion", "persuasion"]);
    }

    #[test]
    fn author_sort_is_case_insensitive_ascending() {
        let sorted = sort_by_field(&shelf(), SortField::Author);
        let authors: Vec<_> = sorted.iter().map(|book| book.author.as_str()).collect();
        assert_eq!(
            authors,
            vec!["Dan Simmons", "Frank Herbert", "Jane Austen", "jane austen"]
        );
    }

    #[test]
    fn year_sort_is_newest_first() {
        let sorted = sort_by_field(&shelf(), SortField::Year);
        let years: Vec<_> = sorted.iter().map(|book| book.year).collect();
        assert_eq!(years, vec![1989, 1965, 1817, 1815]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let books = vec![
            book("B-side", "Same", 1990, "", false),
            book("A-side", "Same", 1990, "", false),
        ];

        let sorted = sort_by_field(&books, SortField::Year);

        assert_eq!(sorted[0].title, "B-side");
        assert_eq!(sorted[1].title, "A-side");
    }
}

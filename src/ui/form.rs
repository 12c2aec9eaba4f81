//! The shared book form
//!
//! The same field set backs both the Add page and the inline edit block
//! on the Library page. The year is kept as raw text while the user
//! types and only parsed on submit.

use iced::widget::{checkbox, column, text_input, Column};

use crate::state::data::{Book, BookId, ValidationError};
use crate::Message;

/// In-progress form input, not yet a valid book
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl BookForm {
    /// Pre-fill the form from an existing record for editing
    pub fn from_book(book: &Book) -> Self {
        BookForm {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.to_string(),
            genre: book.genre.clone(),
            read: book.read,
        }
    }

    /// Turn the raw input into a book record.
    ///
    /// Only the year parse happens here; range and required-field checks
    /// are the library's job so they run on every mutation path.
    pub fn to_book(&self) -> Result<Book, ValidationError> {
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationError::YearNotNumeric)?;

        Ok(Book {
            id: BookId::default(),
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            year,
            genre: self.genre.trim().to_string(),
            read: self.read,
        })
    }
}

/// The input fields, shared between the Add and Edit forms
pub fn fields<'a>(form: &'a BookForm, current_year: i32) -> Column<'a, Message> {
    column![
        text_input("Title", &form.title)
            .on_input(Message::TitleChanged)
            .padding(8),
        text_input("Author", &form.author)
            .on_input(Message::AuthorChanged)
            .padding(8),
        text_input(&format!("Publication Year (1000-{current_year})"), &form.year)
            .on_input(Message::YearChanged)
            .padding(8),
        text_input("Genre", &form.genre)
            .on_input(Message::GenreChanged)
            .padding(8),
        checkbox("Have you read this book?", form.read).on_toggle(Message::ReadToggled),
    ]
    .spacing(10)
    .max_width(480)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_round_trips_a_book() {
        let book = Book {
            id: BookId(7),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            genre: "Sci-Fi".to_string(),
            read: true,
        };

        let parsed = BookForm::from_book(&book).to_book().unwrap();

        assert_eq!(parsed.title, book.title);
        assert_eq!(parsed.author, book.author);
        assert_eq!(parsed.year, book.year);
        assert_eq!(parsed.genre, book.genre);
        assert_eq!(parsed.read, book.read);
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let form = BookForm {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: "ninety".to_string(),
            ..BookForm::default()
        };

        assert_eq!(form.to_book(), Err(ValidationError::YearNotNumeric));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let form = BookForm {
            title: "  Dune ".to_string(),
            author: " Frank Herbert".to_string(),
            year: " 1965 ".to_string(),
            genre: "Sci-Fi ".to_string(),
            read: false,
        };

        let book = form.to_book().unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.year, 1965);
        assert_eq!(book.genre, "Sci-Fi");
    }
}

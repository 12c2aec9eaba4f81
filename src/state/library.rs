use std::path::PathBuf;

use thiserror::Error;

use super::data::{Book, BookId, ValidationError};
use super::persist::{self, PersistError};

/// The Library holds the ordered book collection for the session.
/// It is loaded once at startup and is the single source of truth;
/// the backing file is rewritten after every mutation.
pub struct Library {
    books: Vec<Book>,
    next_id: u64,
    path: PathBuf,
}

/// Why a mutation was refused; the store is untouched in every case
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("'{title}' by {author} already exists in your library!")]
    Duplicate { title: String, author: String },
    #[error("That book is no longer in the library.")]
    UnknownBook,
}

impl Library {
    /// Load the catalog from `path`.
    ///
    /// A read or parse failure is not fatal: the session starts with an
    /// empty library and the error is handed back for the UI to display.
    pub fn open(path: PathBuf) -> (Self, Option<PersistError>) {
        let (mut books, error) = match persist::load(&path) {
            Ok(books) => (books, None),
            Err(err) => (Vec::new(), Some(err)),
        };

        // Ids are session-only; hand them out in storage order
        for (index, book) in books.iter_mut().enumerate() {
            book.id = BookId(index as u64 + 1);
        }
        let next_id = books.len() as u64 + 1;

        (Library { books, next_id, path }, error)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Validate and append a new book, assigning it a fresh id.
    ///
    /// Rejects a case-insensitive duplicate of an existing
    /// (title, author) pair. This check runs only here, not on update.
    pub fn add(&mut self, mut book: Book, current_year: i32) -> Result<BookId, LibraryError> {
        book.validate(current_year)?;

        if self
            .books
            .iter()
            .any(|existing| existing.matches_key(&book.title, &book.author))
        {
            return Err(LibraryError::Duplicate {
                title: book.title,
                author: book.author,
            });
        }

        let id = BookId(self.next_id);
        self.next_id += 1;
        book.id = id;
        self.books.push(book);

        Ok(id)
    }

    /// Replace the record with id `id` wholesale, keeping its id.
    /// Fails with `UnknownBook` when the id is stale.
    pub fn update(&mut self, id: BookId, mut book: Book, current_year: i32) -> Result<(), LibraryError> {
        book.validate(current_year)?;

        let index = self.index_of(id).ok_or(LibraryError::UnknownBook)?;
        book.id = id;
        self.books[index] = book;

        Ok(())
    }

    /// Remove the record with id `id`; later records shift down by one.
    pub fn remove(&mut self, id: BookId) -> Result<Book, LibraryError> {
        let index = self.index_of(id).ok_or(LibraryError::UnknownBook)?;
        Ok(self.books.remove(index))
    }

    /// Write the full collection to the backing file.
    ///
    /// On failure the in-memory state keeps the attempted change; memory
    /// and disk stay divergent until the next successful save.
    pub fn persist(&self) -> Result<(), PersistError> {
        persist::save(&self.path, &self.books)
    }

    /// Get the path to the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn index_of(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.books.len())
            .field("path", &self.path)
            .finish()
    }
}

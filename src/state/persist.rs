//! File-backed persistence for the book catalog
//!
//! The whole collection is stored as one human-readable JSON document:
//! an array of objects with `title`, `author`, `year`, `genre` and `read`
//! fields. Saves go through a sibling temp file that is renamed into
//! place, so an interrupted write never leaves a half-written catalog.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::data::Book;

/// What went wrong while talking to the backing file
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not read the library file: {0}")]
    Read(#[source] std::io::Error),
    #[error("the library file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not write the library file: {0}")]
    Write(#[source] std::io::Error),
}

/// Where the backing file lives.
///
/// - Linux: ~/.local/share/library-manager/library.json
/// - macOS: ~/Library/Application Support/library-manager/library.json
/// - Windows: %APPDATA%\library-manager\library.json
pub fn library_path() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push("library-manager");
    path.push("library.json");
    path
}

/// Read the full collection from `path`.
///
/// A missing file is a normal first run and yields an empty collection;
/// an unreadable or unparsable file is reported to the caller, which
/// falls back to an empty library for the session.
pub fn load(path: &Path) -> Result<Vec<Book>, PersistError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path).map_err(PersistError::Read)?;
    let books = serde_json::from_str(&contents)?;
    Ok(books)
}

/// Overwrite the backing file with the full serialized collection.
///
/// The JSON is written to `<file>.tmp` first and renamed over the real
/// file, so readers only ever see a complete document.
pub fn save(path: &Path, books: &[Book]) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(PersistError::Write)?;
    }

    let json = serde_json::to_string_pretty(books)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json.as_bytes()).map_err(PersistError::Write)?;
    fs::rename(&tmp, path).map_err(PersistError::Write)?;

    Ok(())
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

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "library-manager-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn missing_file_is_an_empty_library() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let books = load(&path).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn save_load_round_trip_is_idempotent() {
        let path = temp_path("roundtrip");
        let books = vec![
            book("Dune", "Frank Herbert", 1965, "Sci-Fi", false),
            book("Persuasion", "Jane Austen", 1817, "Romance", true),
        ];

        save(&path, &books).unwrap();
        let first = load(&path).unwrap();
        save(&path, &first).unwrap();
        let second = load(&path).unwrap();

        assert_eq!(first, books);
        assert_eq!(first, second);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn backing_file_has_only_public_fields() {
        let path = temp_path("fields");
        save(&path, &[book("Dune", "Frank Herbert", 1965, "Sci-Fi", true)]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"title\""));
        assert!(contents.contains("\"author\""));
        assert!(contents.contains("\"year\""));
        assert!(contents.contains("\"genre\""));
        assert!(contents.contains("\"read\""));
        assert!(!contents.contains("\"id\""));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_reports_parse_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "not a library").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(PersistError::Parse(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn no_temp_file_left_behind() {
        let path = temp_path("tmpfile");
        save(&path, &[book("Dune", "Frank Herbert", 1965, "Sci-Fi", false)]).unwrap();

        assert!(!path.with_extension("json.tmp").exists());

        let _ = fs::remove_file(&path);
    }
}

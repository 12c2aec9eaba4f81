use chrono::Local;
use iced::widget::{container, row, scrollable};
use iced::{Element, Length, Task, Theme};

// Declare the state and view modules
mod state;
mod ui;

use state::data::{self, BookId};
use state::library::{Library, LibraryError};
use state::query::{self, ReadFilter, SearchField, SortField};
use state::stats::LibraryStats;
use ui::form::BookForm;
use ui::Notice;

/// The four navigable pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Library,
    AddBook,
    Search,
    Statistics,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Library, Page::AddBook, Page::Search, Page::Statistics];

    pub fn title(self) -> &'static str {
        match self {
            Page::Library => "Library",
            Page::AddBook => "Add Book",
            Page::Search => "Search",
            Page::Statistics => "Statistics",
        }
    }
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a page in the sidebar
    PageSelected(Page),
    // Shared form input
    TitleChanged(String),
    AuthorChanged(String),
    YearChanged(String),
    GenreChanged(String),
    ReadToggled(bool),
    /// Submit on the Add Book page
    AddBook,
    /// Edit action on a book card
    EditBook(BookId),
    /// Submit on the inline edit form
    UpdateBook,
    CancelEdit,
    /// Delete action on a book card, effective immediately
    DeleteBook(BookId),
    // Library page controls
    SortSelected(SortField),
    FilterSelected(ReadFilter),
    // Search page
    SearchFieldSelected(SearchField),
    SearchQueryChanged(String),
    SearchSubmitted,
    /// Global save action in the sidebar
    SaveLibrary,
}

/// Main application state
struct LibraryManager {
    /// The book collection, the single source of truth for the session
    library: Library,
    /// Which page is active
    page: Page,
    /// Shared form input for the Add and Edit flows
    form: BookForm,
    /// Id of the book being edited, if any
    editing: Option<BookId>,
    /// Inline feedback from the last form or search action
    notice: Option<Notice>,
    sort_by: SortField,
    show_only: ReadFilter,
    search_field: SearchField,
    search_query: String,
    /// Ids of the last search's hits; None before the first search
    search_results: Option<Vec<BookId>>,
    /// Timestamp of the last successful save
    last_saved: Option<String>,
    /// Status message to display in the sidebar
    status: String,
}

impl LibraryManager {
    /// Create a new instance of the application.
    ///
    /// The catalog is loaded once here; a broken backing file is reported
    /// in the status line and the session starts with an empty library.
    fn new() -> (Self, Task<Message>) {
        let path = state::persist::library_path();
        let (library, load_error) = Library::open(path);

        println!("📚 Library initialized with {} books", library.len());
        println!("📁 Backing file: {}", library.path().display());

        let status = match load_error {
            Some(err) => format!("Error loading library: {err}"),
            None => format!("Ready. {} books in library.", library.len()),
        };

        (
            LibraryManager {
                library,
                page: Page::default(),
                form: BookForm::default(),
                editing: None,
                notice: None,
                sort_by: SortField::default(),
                show_only: ReadFilter::default(),
                search_field: SearchField::default(),
                search_query: String::new(),
                search_results: None,
                last_saved: None,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state.
    ///
    /// Every user action runs to completion here, including the file
    /// write that follows each mutation.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageSelected(page) => {
                self.page = page;
                self.notice = None;
            }
            Message::TitleChanged(value) => self.form.title = value,
            Message::AuthorChanged(value) => self.form.author = value,
            Message::YearChanged(value) => self.form.year = value,
            Message::GenreChanged(value) => self.form.genre = value,
            Message::ReadToggled(value) => self.form.read = value,
            Message::AddBook => match self.try_add() {
                Ok((title, author)) => {
                    self.notice = Some(Notice::Success(format!(
                        "'{title}' by {author} added to your library!"
                    )));
                }
                Err(message) => self.notice = Some(Notice::Error(message)),
            },
            Message::EditBook(id) => match self.library.get(id) {
                Some(book) => {
                    self.form = BookForm::from_book(book);
                    self.editing = Some(id);
                    // The edit form lives on the Library page, also when
                    // the action came from a search result
                    self.page = Page::Library;
                    self.notice = None;
                }
                None => self.notice = Some(Notice::Error(LibraryError::UnknownBook.to_string())),
            },
            Message::UpdateBook => {
                if let Some(id) = self.editing {
                    match self.try_update(id) {
                        Ok(()) => {
                            self.editing = None;
                            self.form = BookForm::default();
                            self.notice = None;
                        }
                        Err(message) => self.notice = Some(Notice::Error(message)),
                    }
                }
            }
            Message::CancelEdit => {
                self.editing = None;
                self.form = BookForm::default();
                self.notice = None;
            }
            Message::DeleteBook(id) => match self.library.remove(id) {
                Ok(book) => {
                    if self.editing == Some(id) {
                        self.editing = None;
                        self.form = BookForm::default();
                    }
                    if let Some(results) = &mut self.search_results {
                        results.retain(|result| *result != id);
                    }
                    self.status = format!("Removed '{}' by {}.", book.title, book.author);
                    self.persist_after_change();
                }
                Err(err) => self.notice = Some(Notice::Error(err.to_string())),
            },
            Message::SortSelected(field) => self.sort_by = field,
            Message::FilterSelected(filter) => self.show_only = filter,
            Message::SearchFieldSelected(field) => {
                self.search_field = field;
                self.search_results = None;
            }
            Message::SearchQueryChanged(value) => self.search_query = value,
            Message::SearchSubmitted => self.run_search(),
            Message::SaveLibrary => match self.library.persist() {
                Ok(()) => {
                    let stamp = Local::now().format("%H:%M:%S").to_string();
                    self.status = format!("Library saved at {stamp}");
                    self.last_saved = Some(stamp);
                }
                Err(err) => self.status = format!("Failed to save library: {err}"),
            },
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let current_year = data::current_year();

        let content: Element<Message> = match self.page {
            Page::Library => ui::library::view(
                self.library.books(),
                self.sort_by,
                self.show_only,
                self.editing.map(|_| &self.form),
                self.notice.as_ref(),
                current_year,
            ),
            Page::AddBook => ui::add::view(&self.form, self.notice.as_ref(), current_year),
            Page::Search => {
                // Resolve hit ids against the live store, so results
                // reflect edits and skip anything deleted meanwhile
                let results = self.search_results.as_ref().map(|ids| {
                    ids.iter()
                        .filter_map(|id| self.library.get(*id))
                        .collect::<Vec<_>>()
                });

                ui::search::view(
                    self.search_field,
                    &self.search_query,
                    results,
                    self.notice.as_ref(),
                )
            }
            Page::Statistics => ui::stats::view(&LibraryStats::compute(self.library.books())),
        };

        row![
            ui::sidebar(self.page, self.last_saved.as_deref(), &self.status),
            scrollable(container(content).width(Length::Fill)).height(Length::Fill),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Validate the form and append a new book, returning its title and
    /// author for the success message.
    fn try_add(&mut self) -> Result<(String, String), String> {
        let book = self.form.to_book().map_err(|err| err.to_string())?;
        let title = book.title.clone();
        let author = book.author.clone();

        self.library
            .add(book, data::current_year())
            .map_err(|err| err.to_string())?;

        self.persist_after_change();
        self.form = BookForm::default();

        Ok((title, author))
    }

    /// Validate the form and replace the record being edited.
    fn try_update(&mut self, id: BookId) -> Result<(), String> {
        let book = self.form.to_book().map_err(|err| err.to_string())?;

        self.library
            .update(id, book, data::current_year())
            .map_err(|err| err.to_string())?;

        self.persist_after_change();
        Ok(())
    }

    /// Write the collection to disk after a mutation.
    ///
    /// A failed write keeps the in-memory change; the status line shows
    /// the error and disk catches up on the next successful save.
    fn persist_after_change(&mut self) {
        match self.library.persist() {
            Ok(()) => {
                self.last_saved = Some(Local::now().format("%H:%M:%S").to_string());
            }
            Err(err) => {
                self.status = format!("Failed to save library: {err}");
            }
        }
    }

    /// Run the Search page query against the current collection.
    fn run_search(&mut self) {
        let query_text = self.search_query.trim().to_string();
        if query_text.is_empty() {
            self.notice = Some(Notice::Error("Please enter a search term".to_string()));
            self.search_results = None;
            return;
        }

        let books = self.library.books();
        let found = match self.search_field.as_text_field() {
            Some(field) => query::filter_by_field(books, field, &query_text),
            None => match query_text.parse::<i32>() {
                Ok(year) => query::filter_by_year(books, year),
                Err(_) => {
                    self.notice =
                        Some(Notice::Error("Publication year must be a number!".to_string()));
                    self.search_results = None;
                    return;
                }
            },
        };

        self.notice = None;
        self.search_results = Some(found.into_iter().map(|book| book.id).collect());
    }
}

fn main() -> iced::Result {
    iced::application(
        "Personal Library Manager",
        LibraryManager::update,
        LibraryManager::view,
    )
    .theme(LibraryManager::theme)
    .centered()
    .run_with(LibraryManager::new)
}

use iced::widget::{button, column, pick_list, row, text};
use iced::{Alignment, Element};

use crate::state::data::Book;
use crate::state::query::{self, ReadFilter, SortField};
use crate::ui::form::{self, BookForm};
use crate::ui::{card, notice_line, Notice};
use crate::Message;

/// The Library page.
///
/// Shows the full collection filtered and sorted by the user's current
/// selection. While a book is being edited, the shared form appears
/// above the list, pre-filled with that record.
pub fn view<'a>(
    books: &[Book],
    sort_by: SortField,
    show_only: ReadFilter,
    editing: Option<&'a BookForm>,
    notice: Option<&'a Notice>,
    current_year: i32,
) -> Element<'a, Message> {
    let mut page = column![text("My Library").size(28)].spacing(16).padding(20);

    if let Some(book_form) = editing {
        let mut edit_block = column![
            text("Edit Book").size(22),
            form::fields(book_form, current_year),
            row![
                button("Update Book").on_press(Message::UpdateBook),
                button("Cancel")
                    .on_press(Message::CancelEdit)
                    .style(button::secondary),
            ]
            .spacing(10),
        ]
        .spacing(10);

        if let Some(notice) = notice {
            edit_block = edit_block.push(notice_line(notice));
        }

        page = page.push(edit_block);
    } else if let Some(notice) = notice {
        page = page.push(notice_line(notice));
    }

    if books.is_empty() {
        return page
            .push(text(
                "Your library is empty. Go to the 'Add Book' page to add some books!",
            ))
            .into();
    }

    let controls = row![
        text("Sort by"),
        pick_list(&SortField::ALL[..], Some(sort_by), Message::SortSelected),
        text("Show only"),
        pick_list(&ReadFilter::ALL[..], Some(show_only), Message::FilterSelected),
    ]
    .spacing(10)
    .align_y(Alignment::Center);
    page = page.push(controls);

    // Pure queries derive the visible list; the store itself stays in
    // insertion order
    let visible = query::sort_by_field(&query::filter_by_read_status(books, show_only), sort_by);

    let mut rows = column![].spacing(10);
    for book in &visible {
        rows = rows.push(card::book_card(book, true));
    }

    page.push(rows).into()
}

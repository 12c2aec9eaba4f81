use iced::widget::{button, column, text};
use iced::Element;

use crate::ui::form::{self, BookForm};
use crate::ui::{notice_line, Notice};
use crate::Message;

/// The Add Book page: the shared form plus a submit button and any
/// inline validation or duplicate feedback from the last attempt.
pub fn view<'a>(
    book_form: &'a BookForm,
    notice: Option<&'a Notice>,
    current_year: i32,
) -> Element<'a, Message> {
    let mut page = column![
        text("Add a New Book").size(28),
        form::fields(book_form, current_year),
        button("Add Book").on_press(Message::AddBook),
    ]
    .spacing(16)
    .padding(20);

    if let Some(notice) = notice {
        page = page.push(notice_line(notice));
    }

    page.into()
}

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::state::data::Book;
use crate::Message;

/// One book rendered as a card with its details and row actions.
///
/// The Edit and Delete buttons carry the book's session id, so the same
/// card works on the Library page and in search results.
pub fn book_card(book: &Book, show_actions: bool) -> Element<'static, Message> {
    let status = if book.read {
        "Status: Read"
    } else {
        "Status: Unread"
    };

    let details = column![
        text(book.title.clone()).size(20),
        text(format!("Author: {}", book.author)),
        text(format!("Year: {}", book.year)),
        text(format!("Genre: {}", book.genre)),
        text(status),
    ]
    .spacing(2)
    .width(Length::Fill);

    let content = if show_actions {
        let actions = column![
            button("Edit")
                .on_press(Message::EditBook(book.id))
                .width(90),
            button("Delete")
                .on_press(Message::DeleteBook(book.id))
                .style(button::danger)
                .width(90),
        ]
        .spacing(6);

        row![details, actions]
    } else {
        row![details]
    }
    .spacing(12)
    .align_y(Alignment::Center);

    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

use iced::widget::{button, column, pick_list, row, text, text_input};
use iced::Element;

use crate::state::data::Book;
use crate::state::query::SearchField;
use crate::ui::{card, notice_line, Notice};
use crate::Message;

/// The Search page: field selector, query input, and the result list.
///
/// `results` is `None` before the first search of the session; an empty
/// vector means a search ran and found nothing.
pub fn view<'a>(
    field: SearchField,
    query: &'a str,
    results: Option<Vec<&'a Book>>,
    notice: Option<&'a Notice>,
) -> Element<'a, Message> {
    let placeholder = format!("Enter {}", field.to_string().to_lowercase());

    let controls = row![
        pick_list(&SearchField::ALL[..], Some(field), Message::SearchFieldSelected),
        text_input(&placeholder, query)
            .on_input(Message::SearchQueryChanged)
            .on_submit(Message::SearchSubmitted)
            .padding(8),
        button("Search").on_press(Message::SearchSubmitted),
    ]
    .spacing(10);

    let mut page = column![text("Search Your Library").size(28), controls]
        .spacing(16)
        .padding(20);

    if let Some(notice) = notice {
        page = page.push(notice_line(notice));
    }

    match results {
        Some(found) if found.is_empty() => {
            page = page.push(text(format!(
                "No books found matching '{}' in {}",
                query,
                field.to_string().to_lowercase()
            )));
        }
        Some(found) => {
            page = page.push(text(format!("Found {} results", found.len())).size(22));

            let mut rows = column![].spacing(10);
            for book in found {
                rows = rows.push(card::book_card(book, true));
            }
            page = page.push(rows);
        }
        None => {}
    }

    page.into()
}

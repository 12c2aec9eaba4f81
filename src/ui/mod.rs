/// View layer module
///
/// One module per page plus the shared pieces:
/// - The Library page with inline editing (library.rs)
/// - The Add Book form (add.rs)
/// - The Search page (search.rs)
/// - The Statistics page (stats.rs)
/// - The shared book form fields (form.rs) and book card (card.rs)

pub mod add;
pub mod card;
pub mod form;
pub mod library;
pub mod search;
pub mod stats;

use iced::widget::{button, column, container, horizontal_rule, text};
use iced::{Element, Length, Theme};

use crate::{Message, Page};

/// Inline feedback shown next to a form or the search box
#[derive(Debug, Clone)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub fn notice_line(notice: &Notice) -> Element<'_, Message> {
    match notice {
        Notice::Success(message) => text(message).style(text::success).into(),
        Notice::Error(message) => text(message).style(text::danger).into(),
    }
}

/// The persistent navigation sidebar.
///
/// Carries the page buttons, the global Save Library action with its
/// timestamped acknowledgment, and the status line.
pub fn sidebar<'a>(active: Page, last_saved: Option<&'a str>, status: &'a str) -> Element<'a, Message> {
    let mut nav = column![text("Navigation").size(22)]
        .spacing(8)
        .padding(16)
        .width(230);

    for page in Page::ALL {
        let style: fn(&Theme, button::Status) -> button::Style = if page == active {
            button::primary
        } else {
            button::secondary
        };

        nav = nav.push(
            button(page.title())
                .on_press(Message::PageSelected(page))
                .style(style)
                .width(Length::Fill),
        );
    }

    nav = nav.push(horizontal_rule(1));
    nav = nav.push(
        button("Save Library")
            .on_press(Message::SaveLibrary)
            .style(button::success)
            .width(Length::Fill),
    );

    if let Some(stamp) = last_saved {
        nav = nav.push(text(format!("Last saved at {stamp}")).size(13).style(text::success));
    }
    if !status.is_empty() {
        nav = nav.push(text(status).size(13));
    }

    nav = nav.push(horizontal_rule(1));
    nav = nav.push(text("Personal Library Manager v1.0").size(12).style(text::secondary));

    container(nav)
        .height(Length::Fill)
        .style(container::bordered_box)
        .into()
}

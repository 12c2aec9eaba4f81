use iced::widget::{column, container, progress_bar, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::stats::LibraryStats;
use crate::Message;

/// The Statistics page: metric tiles, the reading-progress bar, and the
/// distribution charts rendered as labeled horizontal bars.
pub fn view(stats: &LibraryStats) -> Element<'static, Message> {
    let mut page = column![text("Library Statistics").size(28)]
        .spacing(16)
        .padding(20);

    if stats.total == 0 {
        return page
            .push(text("Your library is empty. Add some books to see statistics!"))
            .into();
    }

    page = page.push(
        row![
            metric("Total Books", stats.total),
            metric("Books Read", stats.read),
            metric("Books Unread", stats.unread),
        ]
        .spacing(12),
    );

    page = page.push(
        column![
            text("Reading Progress").size(22),
            progress_bar(0.0..=100.0, stats.percentage_read).height(18),
            text(format!(
                "{:.1}% of your library has been read",
                stats.percentage_read
            )),
        ]
        .spacing(8),
    );

    let genre_max = stats.genres.iter().map(|(_, count)| *count).max().unwrap_or(1);
    page = page.push(text("Genre Distribution").size(22));
    page = page.push(bar_rows(
        stats
            .genres
            .iter()
            .map(|(genre, count)| (genre_label(genre).to_string(), *count)),
        genre_max,
    ));

    let decade_max = stats.decades.iter().map(|(_, count)| *count).max().unwrap_or(1);
    page = page.push(text("Books by Publication Decade").size(22));
    page = page.push(bar_rows(
        stats
            .decades
            .iter()
            .map(|(decade, count)| (format!("{decade}s"), *count)),
        decade_max,
    ));

    let author_max = stats
        .top_authors
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(1);
    page = page.push(text("Top Authors").size(22));
    page = page.push(bar_rows(
        stats
            .top_authors
            .iter()
            .map(|(author, count)| (author.clone(), *count)),
        author_max,
    ));

    if stats.has_mixed_genre() {
        page = page.push(text("Read vs Unread by Genre").size(22));

        let mut rows = column![].spacing(6);
        for split in &stats.read_by_genre {
            let total = split.read + split.unread;
            rows = rows.push(
                row![
                    text(genre_label(&split.genre).to_string()).width(160),
                    progress_bar(0.0..=total as f32, split.read as f32).height(14),
                    text(format!("{} read / {} unread", split.read, split.unread)).width(180),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            );
        }
        page = page.push(rows);
    }

    page.into()
}

fn genre_label(genre: &str) -> &str {
    if genre.is_empty() {
        "(none)"
    } else {
        genre
    }
}

/// A single metric tile with a big number over its label
fn metric(label: &'static str, value: usize) -> Element<'static, Message> {
    container(
        column![text(value.to_string()).size(36), text(label).size(14)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

/// Labeled count bars scaled to the largest entry
fn bar_rows<'a>(entries: impl Iterator<Item = (String, usize)>, max: usize) -> Column<'a, Message> {
    let mut rows = column![].spacing(6);

    for (label, count) in entries {
        rows = rows.push(
            row![
                text(label).width(160),
                progress_bar(0.0..=max as f32, count as f32).height(14),
                text(count.to_string()).width(40),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        );
    }

    rows
}

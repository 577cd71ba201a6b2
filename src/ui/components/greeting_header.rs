//! Card header: title, recipient and date

use iced::widget::{column, row, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::features::settings::GreetingSettings;
use crate::ui::theme::{self, BOLD_WEIGHT, SEMIBOLD_WEIGHT};

const TITLE_SIZE: f32 = 34.0;
/// Ordinal suffix ("th" in "25th") is set smaller and raised
const SUPERSCRIPT_SIZE: f32 = 18.0;

/// Split a title around its first ordinal suffix: `"Happy 25th Birthday"`
/// becomes `("Happy 25", "th", " Birthday")`.
fn split_ordinal(title: &str) -> Option<(&str, &str, &str)> {
    let bytes = title.as_bytes();
    for (start, _) in title.match_indices(|c: char| c.is_ascii_digit()) {
        let end = start + 1;
        if bytes.get(end).is_some_and(u8::is_ascii_digit) {
            continue;
        }
        let Some(suffix) = title.get(end..end + 2) else {
            continue;
        };
        let is_ordinal = matches!(
            suffix.to_ascii_lowercase().as_str(),
            "st" | "nd" | "rd" | "th"
        );
        let word_ends = !title[end + 2..]
            .chars()
            .next()
            .is_some_and(char::is_alphanumeric);
        if is_ordinal && word_ends {
            return Some((&title[..end], suffix, &title[end + 2..]));
        }
    }
    None
}

fn title_text<'a>(content: String, size: f32) -> iced::widget::Text<'a> {
    text(content)
        .size(size)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
}

fn title(greeting: &GreetingSettings) -> Element<'_, Message> {
    match split_ordinal(&greeting.title) {
        Some((before, suffix, after)) => row![
            title_text(format!("\"{before}"), TITLE_SIZE),
            title_text(suffix.to_string(), SUPERSCRIPT_SIZE),
            title_text(format!("{after}\""), TITLE_SIZE),
        ]
        .align_y(Alignment::Start)
        .into(),
        None => title_text(format!("\"{}\"", greeting.title), TITLE_SIZE).into(),
    }
}

pub fn view(greeting: &GreetingSettings) -> Element<'_, Message> {
    let recipient = text(&greeting.recipient)
        .size(24)
        .font(iced::Font {
            weight: SEMIBOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_accent(theme)),
        });

    let date = text(&greeting.date).size(18).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    column![title(greeting), recipient, date]
        .spacing(6)
        .align_x(Alignment::Center)
        .into()
}

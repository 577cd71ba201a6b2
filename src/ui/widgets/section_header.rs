//! Section header widget
//!
//! Bold heading above a row of card elements.
//! Generic over Message so it can be reused by any component.

use iced::widget::{container, text};
use iced::{Element, Padding};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a section header element
pub fn view<'a, Message: 'a>(title: &'a str) -> Element<'a, Message> {
    let title_text = text(title)
        .size(18)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    container(title_text)
        .padding(Padding::ZERO.bottom(8))
        .into()
}

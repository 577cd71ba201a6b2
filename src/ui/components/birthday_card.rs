//! The birthday card: header, candles, balloons and the celebrate action

use iced::widget::{column, container, mouse_area};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::CelebrationWidget;
use crate::features::settings::GreetingSettings;
use crate::ui::animation::ItemAnimation;
use crate::ui::components::{balloon_row, candle_row, celebrate_button, greeting_header};
use crate::ui::theme;
use crate::ui::widgets::section_header;

/// Card width once the entrance animation completes (max-w-md)
pub const CARD_MAX_WIDTH: f32 = 448.0;

/// Everything the card needs to render one frame
pub struct CardView<'a> {
    pub greeting: &'a GreetingSettings,
    pub widget: &'a CelebrationWidget,
    pub candles: &'a [ItemAnimation],
    pub balloons: &'a [ItemAnimation],
    /// Entrance progress (0.0 - 1.0)
    pub entrance: f32,
    pub hovered: bool,
}

pub fn view(card: CardView<'_>) -> Element<'_, Message> {
    let CardView {
        greeting,
        widget,
        candles,
        balloons,
        entrance,
        hovered,
    } = card;

    let candles_section = column![
        section_header::view(&greeting.candles_heading),
        candle_row::view(widget, candles),
    ]
    .align_x(Alignment::Center);

    let balloons_section = column![
        section_header::view(&greeting.balloons_heading),
        balloon_row::view(widget, balloons),
    ]
    .align_x(Alignment::Center);

    let content = column![
        greeting_header::view(greeting),
        candles_section,
        balloons_section,
        celebrate_button::view(&greeting.celebrate_label, widget.celebrate_enabled()),
    ]
    .spacing(24)
    .padding(24)
    .width(Fill)
    .align_x(Alignment::Center);

    // scale 0.9 -> 1.0 and fade in
    let entrance = entrance.clamp(0.0, 1.0);
    let card = container(content)
        .width(Fill)
        .max_width(CARD_MAX_WIDTH * (0.9 + 0.1 * entrance))
        .style(move |theme| theme::card(theme, entrance, hovered));

    mouse_area(card)
        .on_enter(Message::HoverCard(true))
        .on_exit(Message::HoverCard(false))
        .into()
}

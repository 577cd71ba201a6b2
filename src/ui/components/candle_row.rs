//! Row of clickable candles
//!
//! Every candle routes its click to `Message::LightCandle(i)`; the card
//! decides whether the click counts.

use iced::mouse::Interaction;
use iced::widget::{mouse_area, row};
use iced::{Alignment, Element};

use crate::app::{CardItem, Message};
use crate::features::CelebrationWidget;
use crate::ui::animation::ItemAnimation;
use crate::ui::primitives::{CandleIcon, candle_icon};
use crate::ui::theme;

pub const ICON_SIZE: f32 = 36.0;

pub fn view<'a>(widget: &CelebrationWidget, animations: &[ItemAnimation]) -> Element<'a, Message> {
    let candles = (0..widget.config().total_candles).map(|index| {
        let lit = widget.candle_is_lit(index);
        let color = theme::element_color(widget.candle_color(index));

        // Lit candles grow in; unlit ones sit at full size in neutral gray
        let (presence, hover) = animations
            .get(index)
            .map(|a| (a.presence.value(), a.hover_factor()))
            .unwrap_or((1.0, 1.0));
        let scale = if lit { presence * hover } else { hover };

        let item = CardItem::Candle(index);
        mouse_area(candle_icon::view(CandleIcon::new(color, lit).scale(scale), ICON_SIZE))
            .on_press(Message::LightCandle(index))
            .on_enter(Message::HoverItem(item, true))
            .on_exit(Message::HoverItem(item, false))
            .interaction(Interaction::Pointer)
            .into()
    });

    row(candles).spacing(8).align_y(Alignment::Center).into()
}

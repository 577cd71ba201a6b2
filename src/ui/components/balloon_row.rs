//! Row of clickable balloons
//!
//! Popped balloons shrink to nothing but stay in the row (and stay clickable),
//! so the row never reflows.

use iced::mouse::Interaction;
use iced::widget::{mouse_area, row};
use iced::{Alignment, Element};

use crate::app::{CardItem, Message};
use crate::features::CelebrationWidget;
use crate::ui::animation::ItemAnimation;
use crate::ui::primitives::{BalloonIcon, balloon_icon};
use crate::ui::theme;

pub const ICON_SIZE: f32 = 36.0;

pub fn view<'a>(widget: &CelebrationWidget, animations: &[ItemAnimation]) -> Element<'a, Message> {
    let balloons = (0..widget.config().total_balloons).map(|index| {
        let color = theme::element_color(widget.balloon_color(index));
        let scale = animations
            .get(index)
            .map(|a| a.presence.value() * a.hover_factor())
            .unwrap_or(if widget.balloon_is_popped(index) { 0.0 } else { 1.0 });

        let item = CardItem::Balloon(index);
        mouse_area(balloon_icon::view(BalloonIcon::new(color).scale(scale), ICON_SIZE))
            .on_press(Message::PopBalloon(index))
            .on_enter(Message::HoverItem(item, true))
            .on_exit(Message::HoverItem(item, false))
            .interaction(Interaction::Pointer)
            .into()
    });

    row(balloons).spacing(8).align_y(Alignment::Center).into()
}

//! "Now Celebrate!" action

use iced::widget::{Space, button, row, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::ui::primitives::{GiftIcon, gift_icon};
use crate::ui::theme;

/// Disabled (no `on_press`) while celebrating, so it cannot be re-entered
pub fn view(label: &str, enabled: bool) -> Element<'_, Message> {
    let content = row![
        text(label).size(15),
        Space::new().width(8),
        gift_icon::view(GiftIcon { enabled }, 16.0),
    ]
    .align_y(Alignment::Center);

    button(content)
        .padding([10, 20])
        .style(theme::celebrate_button)
        .on_press_maybe(enabled.then_some(Message::Celebrate))
        .into()
}

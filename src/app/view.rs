// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, container, stack};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::{self, CardView};
use crate::ui::primitives::confetti_canvas;
use crate::ui::theme;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let card = components::birthday_card::view(CardView {
            greeting: &self.core.settings.greeting,
            widget: &self.core.widget,
            candles: &self.ui.candles,
            balloons: &self.ui.balloons,
            entrance: self.ui.card_entrance.value(),
            hovered: self.ui.card_hovered,
        });

        let page = container(card)
            .center(Fill)
            .padding(16)
            .style(theme::page);

        // Confetti overlays the whole page once started; nothing to draw
        // into a collapsed (minimized) window
        let confetti_layer: Element<'_, Message> = match &self.ui.confetti {
            Some(field) if !self.core.widget.viewport().is_empty() => {
                confetti_canvas::view(field)
            }
            _ => Space::new().width(0).height(0).into(),
        };

        stack![page, confetti_layer].into()
    }
}

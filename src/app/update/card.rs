//! Candle, balloon and celebration message handlers

use std::time::{Duration, Instant};

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ConfettiField;
use crate::ui::animation::CANDLE_STAGGER;

impl App {
    /// Handle card interaction messages
    pub fn handle_card(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            &Message::LightCandle(index) => {
                if !self.core.widget.light_candle(index) {
                    tracing::debug!("Ignoring candle {} (out of order)", index);
                }
                self.sync_card_visuals(Instant::now());
                Some(Task::none())
            }

            &Message::PopBalloon(index) => {
                if !self.core.widget.pop_balloon(index) {
                    tracing::debug!("Ignoring balloon {} (out of order)", index);
                }
                self.sync_card_visuals(Instant::now());
                Some(Task::none())
            }

            Message::Celebrate => {
                match self.core.widget.celebrate() {
                    Some(id) => tracing::info!(
                        "Celebration timer {} started ({:?} cadence)",
                        id.raw(),
                        self.core.widget.timer_period()
                    ),
                    None if self.core.widget.state().celebrating => {
                        tracing::debug!("Celebration already running");
                    }
                    None => {}
                }
                self.sync_card_visuals(Instant::now());
                Some(Task::none())
            }

            &Message::CelebrationTick(id) => {
                if !self.core.widget.tick(id) {
                    tracing::debug!("Dropping stale celebration tick {}", id.raw());
                }
                self.sync_card_visuals(Instant::now());
                Some(Task::none())
            }

            &Message::HoverItem(item, hovered) => {
                let target = if hovered { 1.0 } else { 0.0 };
                if let Some(animation) = self.ui.item_mut(item) {
                    animation.hover.set_target(target, Duration::ZERO, Instant::now());
                }
                Some(Task::none())
            }

            &Message::HoverCard(hovered) => {
                self.ui.card_hovered = hovered;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Bring animation targets and the confetti field in line with the card state
    pub(super) fn sync_card_visuals(&mut self, now: Instant) {
        let widget = &self.core.widget;
        let celebrating = widget.state().celebrating;

        for (index, animation) in self.ui.candles.iter_mut().enumerate() {
            if widget.candle_is_lit(index) {
                // While celebrating each candle's pop-in waits index * 0.5s
                let delay = if celebrating {
                    CANDLE_STAGGER * index as u32
                } else {
                    Duration::ZERO
                };
                animation.presence.set_target(1.0, delay, now);
            }
        }

        for (index, animation) in self.ui.balloons.iter_mut().enumerate() {
            let target = if widget.balloon_is_popped(index) { 0.0 } else { 1.0 };
            animation.presence.set_target(target, Duration::ZERO, now);
        }

        if self.ui.confetti.is_none()
            && let Some(params) = widget.confetti_params()
        {
            self.ui.confetti = Some(ConfettiField::new(params));
            self.ui.last_frame = None;
        }
    }
}

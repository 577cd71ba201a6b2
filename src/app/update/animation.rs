//! Animation frame handler

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.tick_animations(now);

                if let Some(field) = &mut self.ui.confetti {
                    if let Some(last) = self.ui.last_frame {
                        field.advance(now.saturating_duration_since(last));
                    }
                }

                // Reset the frame clock once idle so the next run starts fresh
                self.ui.last_frame = self.ui.has_active_animations().then_some(now);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

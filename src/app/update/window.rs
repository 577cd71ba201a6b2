//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ViewportSize;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                let viewport = ViewportSize::from_logical(size.width, size.height);
                self.core.widget.resize(viewport);
                if let Some(field) = &mut self.ui.confetti {
                    field.resize(viewport.width, viewport.height);
                }
                Some(Task::none())
            }

            Message::RequestClose => {
                if self.core.widget.teardown() {
                    tracing::info!("Cancelled pending celebration timer on close");
                }
                self.ui.last_frame = None;
                tracing::info!("Closing card window");
                Some(iced::exit())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CoreState, UiState};
    use crate::features::{SequenceConfig, Settings};

    fn test_app() -> App {
        let core = CoreState::new(Settings::default(), SequenceConfig::default());
        let ui = UiState::new(core.widget.config());
        App { core, ui }
    }

    #[test]
    fn test_resize_reaches_confetti_field() {
        let mut app = test_app();
        let _ = app.update(Message::WindowResized(iced::Size::new(800.0, 600.0)));
        let _ = app.update(Message::Celebrate);
        let _ = app.update(Message::WindowResized(iced::Size::new(1200.0, 900.0)));

        assert_eq!(app.core.widget.viewport(), ViewportSize::new(1200, 900));
        let params = app.ui.confetti.as_ref().unwrap().params();
        assert_eq!((params.width, params.height), (1200, 900));
    }

    #[test]
    fn test_reported_window_size_replaces_requested() {
        let mut app = test_app();
        // Mount uses the size asked for in settings
        app.core.widget.resize(ViewportSize::from_logical(800.0, 600.0));

        // The opened window reports what the window manager actually gave it
        let _ = app.update(Message::WindowResized(iced::Size::new(1024.0, 700.0)));
        assert_eq!(app.core.widget.viewport(), ViewportSize::new(1024, 700));

        let _ = app.update(Message::Celebrate);
        let params = app.ui.confetti.as_ref().unwrap().params();
        assert_eq!((params.width, params.height), (1024, 700));
    }

    #[test]
    fn test_close_cancels_pending_timer() {
        let mut app = test_app();
        let _ = app.update(Message::Celebrate);
        let id = app.core.widget.live_timer().unwrap();
        let _ = app.update(Message::CelebrationTick(id));

        let _ = app.update(Message::RequestClose);
        assert_eq!(app.core.widget.live_timer(), None);

        // A tick already queued before close must not mutate anything
        let before = app.core.widget.state();
        let _ = app.update(Message::CelebrationTick(id));
        assert_eq!(app.core.widget.state(), before);
    }
}

//! Main application module

mod message;
mod state;
mod update;
mod view;

use std::time::{Duration, Instant};

use iced::{Task, Theme};

use crate::features::{SequenceConfig, Settings, ViewportSize};
pub use message::{CardItem, Message};
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings (greeting text, theme, window size)
        let settings = Settings::load();
        let (width, height) = settings.window.size();

        // 2. Initialize sub-states
        let config = SequenceConfig::default();
        let mut core = CoreState::new(settings, config);
        let mut ui = UiState::new(core.widget.config());

        // 3. Mount: initial viewport and entrance animation
        core.widget.resize(ViewportSize::from_logical(width, height));
        ui.card_entrance.set_target(1.0, Duration::ZERO, Instant::now());

        let app = Self { core, ui };

        // 4. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(width, height),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "birthday-wish".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening card window with id: {:?}", window_id);

        // The window manager may not honor the requested size, so replace the
        // mount estimate with the real drawing area once the window exists
        let boot = open_window
            .then(iced::window::size)
            .map(Message::WindowResized);

        (app, boot)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!("Happy Birthday, {}!", self.core.settings.greeting.recipient)
    }

    /// Subscriptions for the celebration timer, animations, resize and close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let widget = &self.core.widget;

        // 1. Celebration timer: exists only while the card holds a live run.
        //    Dropping it is what stops the ticks.
        let live_timer = widget.live_timer();
        let celebration_sub = match live_timer {
            Some(id)
                if subscription_logic::needs_celebration_timer(
                    live_timer,
                    widget.is_torn_down(),
                ) =>
            {
                iced::time::every(widget.timer_period())
                    .with(id)
                    .map(|(id, _instant)| Message::CelebrationTick(id))
            }
            _ => iced::Subscription::none(),
        };

        // 2. Animation frames (~60fps when needed)
        let animation_sub = if subscription_logic::needs_animation_frames(
            self.ui.has_active_animations(),
            widget.is_torn_down(),
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 3. Window events
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        iced::Subscription::batch([celebration_sub, animation_sub, resize_sub, close_request_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use crate::features::TimerId;

    pub fn needs_animation_frames(has_animations: bool, torn_down: bool) -> bool {
        has_animations && !torn_down
    }

    pub fn needs_celebration_timer(live_timer: Option<TimerId>, torn_down: bool) -> bool {
        live_timer.is_some() && !torn_down
    }
}

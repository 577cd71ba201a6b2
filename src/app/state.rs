//! Application state

use std::time::Instant;

use crate::features::{
    CelebrationWidget, ConfettiField, SequenceConfig, Settings, TracingObserver,
};
use crate::ui::animation::{
    BALLOON_DURATION, CANDLE_DURATION, CARD_ENTRANCE_DURATION, ItemAnimation, Transition,
};

use super::message::CardItem;

/// Main application state
pub struct App {
    /// Settings and card logic
    pub core: CoreState,
    /// Animation and rendering state
    pub ui: UiState,
}

pub struct CoreState {
    pub settings: Settings,
    pub widget: CelebrationWidget,
}

impl CoreState {
    pub fn new(settings: Settings, config: SequenceConfig) -> Self {
        let mut widget = CelebrationWidget::new(config);
        widget.subscribe(TracingObserver);
        Self { settings, widget }
    }
}

pub struct UiState {
    /// Card scale/fade-in at mount
    pub card_entrance: Transition,
    pub card_hovered: bool,
    /// One entry per candle; presence 0 -> 1 when lit
    pub candles: Vec<ItemAnimation>,
    /// One entry per balloon; presence 1 -> 0 when popped
    pub balloons: Vec<ItemAnimation>,
    /// Created on first need, kept for the rest of the session
    pub confetti: Option<ConfettiField>,
    /// Previous animation frame, for simulation time steps
    pub last_frame: Option<Instant>,
}

impl UiState {
    pub fn new(config: &SequenceConfig) -> Self {
        Self {
            card_entrance: Transition::new(0.0, CARD_ENTRANCE_DURATION),
            card_hovered: false,
            candles: (0..config.total_candles)
                .map(|_| ItemAnimation::new(Transition::new(0.0, CANDLE_DURATION)))
                .collect(),
            balloons: (0..config.total_balloons)
                .map(|_| ItemAnimation::new(Transition::new(1.0, BALLOON_DURATION)))
                .collect(),
            confetti: None,
            last_frame: None,
        }
    }

    pub fn item_mut(&mut self, item: CardItem) -> Option<&mut ItemAnimation> {
        match item {
            CardItem::Candle(i) => self.candles.get_mut(i),
            CardItem::Balloon(i) => self.balloons.get_mut(i),
        }
    }

    /// Check if any transition or the confetti simulation still needs frames
    pub fn has_active_animations(&self) -> bool {
        self.card_entrance.is_animating()
            || self.candles.iter().any(ItemAnimation::is_animating)
            || self.balloons.iter().any(ItemAnimation::is_animating)
            || self
                .confetti
                .as_ref()
                .is_some_and(|field| !field.is_finished())
    }

    /// Tick every transition forward
    pub fn tick_animations(&mut self, now: Instant) {
        self.card_entrance.tick(now);
        for item in self.candles.iter_mut().chain(self.balloons.iter_mut()) {
            item.tick(now);
        }
    }
}

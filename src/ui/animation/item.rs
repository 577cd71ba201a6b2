//! Per-element animation state for candles and balloons

use std::time::Instant;

use super::transition::{HOVER_DURATION, Transition};

/// Scale added at full hover (hover:scale-110)
const HOVER_SCALE: f32 = 0.1;

#[derive(Debug)]
pub struct ItemAnimation {
    /// Appearance progress: candles grow in when lit, balloons shrink away when popped
    pub presence: Transition,
    pub hover: Transition,
}

impl ItemAnimation {
    pub fn new(presence: Transition) -> Self {
        Self {
            presence,
            hover: Transition::new(0.0, HOVER_DURATION),
        }
    }

    /// Hover multiplier in `[1.0, 1.1]`
    pub fn hover_factor(&self) -> f32 {
        1.0 + HOVER_SCALE * self.hover.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.presence.is_animating() || self.hover.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.presence.tick(now);
        self.hover.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation::BALLOON_DURATION;

    #[test]
    fn test_hover_factor_range() {
        let item = ItemAnimation::new(Transition::new(1.0, BALLOON_DURATION));
        assert_eq!(item.hover_factor(), 1.0);
        assert!(!item.is_animating());
    }
}

//! Delayed value transitions using iced_anim
//!
//! Each card element owns one transition per animated property (scale, hover).
//! A target change may be delayed, which gives the staggered candle lead-in
//! during celebration.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Lit candle pops in over 0.5s
pub const CANDLE_DURATION: Duration = Duration::from_millis(500);
/// Delay between successive candles while celebrating
pub const CANDLE_STAGGER: Duration = Duration::from_millis(500);
/// Balloon shrinks over 0.3s
pub const BALLOON_DURATION: Duration = Duration::from_millis(300);
/// Card fades and scales in over 0.5s
pub const CARD_ENTRANCE_DURATION: Duration = Duration::from_millis(500);
/// Hover scale-up
pub const HOVER_DURATION: Duration = Duration::from_millis(150);

#[derive(Debug)]
pub struct Transition {
    animation: Animated<f32>,
    target: f32,
    /// Target waiting for its delay to elapse
    pending: Option<(f32, Instant)>,
}

impl Transition {
    /// Transition resting at `initial`
    pub fn new(initial: f32, duration: Duration) -> Self {
        Self {
            animation: Animated::transition(initial, Easing::EASE_OUT.with_duration(duration)),
            target: initial,
            pending: None,
        }
    }

    /// Move toward `target`, starting after `delay`.
    /// Re-setting the current target is a no-op so running animations are not restarted.
    pub fn set_target(&mut self, target: f32, delay: Duration, now: Instant) {
        if self.target == target {
            return;
        }
        self.target = target;
        if delay.is_zero() {
            self.pending = None;
            self.animation.update(target.into());
        } else {
            self.pending = Some((target, now + delay));
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || self.animation.is_animating()
    }

    /// Tick forward; must be called on each animation frame
    pub fn tick(&mut self, now: Instant) {
        if let Some((target, start_at)) = self.pending
            && now >= start_at
        {
            self.pending = None;
            self.animation.update(target.into());
        }
        self.animation.tick(now);
    }
}

//! Birthday card interaction state
//!
//! Two ordered click sequences (candles, balloons), a timer-driven
//! celebration that lights the remaining candles, and the confetti gate that
//! opens when both sequences complete or when celebration starts.
//!
//! This module has no UI dependency. The iced layer feeds it clicks, timer
//! ticks and resize notifications, and reads the rendering queries back.

use std::time::Duration;

use super::observer::{CardEvent, CardObserver};
use super::palette::{self, PaletteColor};
use super::timer::{RepeatingTimer, TimerId};
use super::viewport::ViewportSize;

/// Number of confetti pieces emitted once confetti starts
pub const CONFETTI_PARTICLE_COUNT: u32 = 500;

/// Celebration cadence
pub const CELEBRATION_INTERVAL: Duration = Duration::from_millis(500);

/// Read-only sequence configuration, injected at construction
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceConfig {
    pub total_candles: usize,
    pub total_balloons: usize,
    pub candle_palette: &'static [PaletteColor],
    pub balloon_palette: &'static [PaletteColor],
    pub confetti_palette: &'static [PaletteColor],
    pub tick_interval: Duration,
    pub confetti_particle_count: u32,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            total_candles: 6,
            total_balloons: 6,
            candle_palette: palette::CANDLE_PALETTE,
            balloon_palette: palette::BALLOON_PALETTE,
            confetti_palette: palette::CONFETTI_PALETTE,
            tick_interval: CELEBRATION_INTERVAL,
            confetti_particle_count: CONFETTI_PARTICLE_COUNT,
        }
    }
}

/// Interaction progress
///
/// Counts only grow; both flags only go from `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub lit_count: usize,
    pub popped_count: usize,
    pub celebrating: bool,
    pub confetti_active: bool,
}

/// Parameters handed to the confetti renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiParams {
    pub width: u32,
    pub height: u32,
    pub recycle: bool,
    pub particle_count: u32,
    pub colors: &'static [PaletteColor],
}

pub struct CelebrationWidget {
    config: SequenceConfig,
    state: InteractionState,
    viewport: ViewportSize,
    timer: RepeatingTimer,
    observers: Vec<Box<dyn CardObserver>>,
    torn_down: bool,
}

impl std::fmt::Debug for CelebrationWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CelebrationWidget")
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("timer", &self.timer)
            .field("observers", &self.observers.len())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl Default for CelebrationWidget {
    fn default() -> Self {
        Self::new(SequenceConfig::default())
    }
}

impl CelebrationWidget {
    pub fn new(config: SequenceConfig) -> Self {
        let timer = RepeatingTimer::new(config.tick_interval);
        Self {
            config,
            state: InteractionState::default(),
            viewport: ViewportSize::default(),
            timer,
            observers: Vec::new(),
            torn_down: false,
        }
    }

    /// Register a change observer
    pub fn subscribe(&mut self, observer: impl CardObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Light candle `index`. Only the next unlit candle is accepted.
    ///
    /// Returns whether the click had an effect.
    pub fn light_candle(&mut self, index: usize) -> bool {
        if self.torn_down
            || index != self.state.lit_count
            || self.state.lit_count >= self.config.total_candles
        {
            return false;
        }
        self.state.lit_count += 1;
        self.emit(CardEvent::CandleLit { index });
        self.check_completion();
        true
    }

    /// Pop balloon `index`. Only the next intact balloon is accepted.
    pub fn pop_balloon(&mut self, index: usize) -> bool {
        if self.torn_down
            || index != self.state.popped_count
            || self.state.popped_count >= self.config.total_balloons
        {
            return false;
        }
        self.state.popped_count += 1;
        self.emit(CardEvent::BalloonPopped { index });
        self.check_completion();
        true
    }

    /// Enter celebration mode.
    ///
    /// Confetti starts immediately. If candles remain unlit, a repeating timer
    /// is started and its id returned; the host must deliver ticks for that id
    /// to [`Self::tick`] every [`Self::timer_period`]. Re-invocation while
    /// celebrating does nothing.
    pub fn celebrate(&mut self) -> Option<TimerId> {
        if self.torn_down || self.state.celebrating {
            return None;
        }
        self.state.celebrating = true;
        self.emit(CardEvent::CelebrationStarted);
        self.trigger_confetti();

        if self.state.lit_count >= self.config.total_candles {
            self.emit(CardEvent::CelebrationFinished);
            return None;
        }
        self.timer.start()
    }

    /// Handle one celebration timer tick.
    ///
    /// Ticks for a cancelled or unknown timer are ignored. The timer is
    /// released on the tick that lights the last candle.
    pub fn tick(&mut self, id: TimerId) -> bool {
        if self.torn_down || !self.timer.accepts(id) {
            return false;
        }

        if self.state.lit_count < self.config.total_candles {
            self.state.lit_count += 1;
            self.emit(CardEvent::CelebrationTick {
                lit_count: self.state.lit_count,
            });
            self.check_completion();
        }

        if self.state.lit_count >= self.config.total_candles && self.timer.cancel() {
            self.emit(CardEvent::CelebrationFinished);
        }
        true
    }

    /// Refresh the drawing-area size
    pub fn resize(&mut self, viewport: ViewportSize) {
        if self.torn_down || self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.emit(CardEvent::Resized(viewport));
    }

    /// Release the pending celebration timer and stop accepting input.
    ///
    /// Safe to call repeatedly; returns `true` if a live timer was cancelled.
    pub fn teardown(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let cancelled = self.timer.cancel();
        self.torn_down = true;
        self.emit(CardEvent::TornDown);
        self.observers.clear();
        cancelled
    }

    // ========================================================================
    // Timer queries
    // ========================================================================

    pub fn live_timer(&self) -> Option<TimerId> {
        self.timer.live()
    }

    pub fn timer_period(&self) -> Duration {
        self.timer.period()
    }

    // ========================================================================
    // Rendering queries
    // ========================================================================

    /// Candle `index` is drawn lit.
    ///
    /// While celebrating, the candle about to be lit by the next tick is
    /// already drawn lit (`index <= lit_count`), giving the animation its
    /// lead-in.
    pub fn candle_is_lit(&self, index: usize) -> bool {
        if index >= self.config.total_candles {
            return false;
        }
        if self.state.celebrating {
            index <= self.state.lit_count
        } else {
            index < self.state.lit_count
        }
    }

    /// Palette color for a lit candle; `None` means neutral (unlit)
    pub fn candle_color(&self, index: usize) -> Option<PaletteColor> {
        if self.candle_is_lit(index) {
            palette::cyclic(self.config.candle_palette, index)
        } else {
            None
        }
    }

    pub fn balloon_is_popped(&self, index: usize) -> bool {
        index < self.state.popped_count
    }

    /// Palette color for an intact balloon; `None` means neutral (popped)
    pub fn balloon_color(&self, index: usize) -> Option<PaletteColor> {
        if index >= self.config.total_balloons || self.balloon_is_popped(index) {
            None
        } else {
            palette::cyclic(self.config.balloon_palette, index)
        }
    }

    /// Whether the celebrate control is actionable
    pub fn celebrate_enabled(&self) -> bool {
        !self.state.celebrating && !self.torn_down
    }

    /// Renderer parameters, present only once confetti is active
    pub fn confetti_params(&self) -> Option<ConfettiParams> {
        self.state.confetti_active.then(|| ConfettiParams {
            width: self.viewport.width,
            height: self.viewport.height,
            recycle: false,
            particle_count: self.config.confetti_particle_count,
            colors: self.config.confetti_palette,
        })
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn check_completion(&mut self) {
        if self.state.lit_count == self.config.total_candles
            && self.state.popped_count == self.config.total_balloons
        {
            self.trigger_confetti();
        }
    }

    fn trigger_confetti(&mut self) {
        if !self.state.confetti_active {
            self.state.confetti_active = true;
            self.emit(CardEvent::ConfettiTriggered);
        }
    }

    fn emit(&mut self, event: CardEvent) {
        let state = self.state;
        for observer in &mut self.observers {
            observer.notify(&event, &state);
        }
    }
}

impl Drop for CelebrationWidget {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recorded(widget: &mut CelebrationWidget) -> Rc<RefCell<Vec<CardEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        widget.subscribe(move |event: &CardEvent, _state: &InteractionState| {
            sink.borrow_mut().push(*event);
        });
        events
    }

    fn light_all(widget: &mut CelebrationWidget) {
        for i in 0..widget.config().total_candles {
            assert!(widget.light_candle(i));
        }
    }

    fn pop_all(widget: &mut CelebrationWidget) {
        for i in 0..widget.config().total_balloons {
            assert!(widget.pop_balloon(i));
        }
    }

    mod ordered_sequences {
        use super::*;

        #[test]
        fn test_out_of_order_candle_is_noop() {
            let mut widget = CelebrationWidget::default();
            for i in 1..10 {
                assert!(!widget.light_candle(i));
                assert_eq!(widget.state().lit_count, 0);
            }
        }

        #[test]
        fn test_in_order_candle_increments_by_one() {
            let mut widget = CelebrationWidget::default();
            for i in 0..6 {
                assert!(widget.light_candle(i));
                assert_eq!(widget.state().lit_count, i + 1);
            }
            assert!(!widget.light_candle(6), "no candle beyond the total");
            assert_eq!(widget.state().lit_count, 6);
        }

        #[test]
        fn test_repeated_click_rejected() {
            let mut widget = CelebrationWidget::default();
            assert!(widget.light_candle(0));
            assert!(!widget.light_candle(0));
            assert_eq!(widget.state().lit_count, 1);
        }

        #[test]
        fn test_balloons_are_symmetric() {
            let mut widget = CelebrationWidget::default();
            assert!(!widget.pop_balloon(2));
            assert_eq!(widget.state().popped_count, 0);
            assert!(widget.pop_balloon(0));
            assert!(!widget.pop_balloon(0));
            assert_eq!(widget.state().popped_count, 1);
            for i in 1..6 {
                assert!(widget.pop_balloon(i));
            }
            assert!(!widget.pop_balloon(6));
            assert_eq!(widget.state().popped_count, 6);
        }

        #[test]
        fn test_sequences_are_independent() {
            let mut widget = CelebrationWidget::default();
            widget.light_candle(0);
            widget.light_candle(1);
            widget.pop_balloon(0);
            let state = widget.state();
            assert_eq!(state.lit_count, 2);
            assert_eq!(state.popped_count, 1);
        }
    }

    mod confetti_gate {
        use super::*;

        #[test]
        fn test_confetti_after_both_sequences_candles_last() {
            let mut widget = CelebrationWidget::default();
            pop_all(&mut widget);
            for i in 0..5 {
                widget.light_candle(i);
                assert!(!widget.state().confetti_active);
            }
            widget.light_candle(5);
            assert!(widget.state().confetti_active);
        }

        #[test]
        fn test_confetti_after_both_sequences_balloons_last() {
            let mut widget = CelebrationWidget::default();
            light_all(&mut widget);
            for i in 0..5 {
                widget.pop_balloon(i);
                assert!(!widget.state().confetti_active);
            }
            widget.pop_balloon(5);
            assert!(widget.state().confetti_active);
            assert!(!widget.state().celebrating);
        }

        #[test]
        fn test_confetti_triggered_once() {
            let mut widget = CelebrationWidget::default();
            let events = recorded(&mut widget);
            light_all(&mut widget);
            pop_all(&mut widget);
            widget.celebrate();

            let triggers = events
                .borrow()
                .iter()
                .filter(|e| **e == CardEvent::ConfettiTriggered)
                .count();
            assert_eq!(triggers, 1);
            assert!(widget.state().confetti_active);
        }

        #[test]
        fn test_confetti_params_only_when_active() {
            let mut widget = CelebrationWidget::default();
            widget.resize(ViewportSize::new(800, 600));
            assert_eq!(widget.confetti_params(), None);

            widget.celebrate();
            let params = widget.confetti_params().unwrap();
            assert_eq!((params.width, params.height), (800, 600));
            assert!(!params.recycle);
            assert_eq!(params.particle_count, 500);
            assert_eq!(params.colors.len(), 7);
        }
    }

    mod celebration {
        use super::*;

        #[test]
        fn test_celebrate_sets_flags_immediately() {
            let mut widget = CelebrationWidget::default();
            let id = widget.celebrate();
            assert!(id.is_some());
            let state = widget.state();
            assert!(state.celebrating);
            assert!(state.confetti_active);
            assert_eq!(state.lit_count, 0);
            assert!(!widget.celebrate_enabled());
        }

        #[test]
        fn test_second_celebrate_has_no_effect() {
            let mut widget = CelebrationWidget::default();
            let first = widget.celebrate();
            let events = recorded(&mut widget);

            assert_eq!(widget.celebrate(), None);
            assert_eq!(widget.live_timer(), first);
            assert!(events.borrow().is_empty());
        }

        #[test]
        fn test_ticks_light_remaining_candles_then_stop() {
            let mut widget = CelebrationWidget::default();
            let id = widget.celebrate().unwrap();

            for expected in 1..=6 {
                assert!(widget.tick(id));
                assert_eq!(widget.state().lit_count, expected);
            }
            assert_eq!(widget.live_timer(), None, "timer released at total");
            assert!(!widget.tick(id));
            assert_eq!(widget.state().lit_count, 6);
        }

        #[test]
        fn test_celebrate_from_five_lit() {
            let mut widget = CelebrationWidget::default();
            for i in 0..5 {
                widget.light_candle(i);
            }
            let id = widget.celebrate().unwrap();
            assert!(widget.state().celebrating);
            assert!(widget.state().confetti_active);

            assert!(widget.tick(id));
            assert_eq!(widget.state().lit_count, 6);
            assert_eq!(widget.live_timer(), None);

            assert!(!widget.tick(id));
            assert_eq!(widget.state().lit_count, 6);
        }

        #[test]
        fn test_celebrate_with_all_lit_starts_no_timer() {
            let mut widget = CelebrationWidget::default();
            let events = recorded(&mut widget);
            light_all(&mut widget);
            assert_eq!(widget.celebrate(), None);
            assert_eq!(widget.live_timer(), None);
            assert!(events.borrow().contains(&CardEvent::CelebrationFinished));
        }

        #[test]
        fn test_celebration_leaves_balloons_manual() {
            let mut widget = CelebrationWidget::default();
            let id = widget.celebrate().unwrap();
            while widget.live_timer().is_some() {
                widget.tick(id);
            }
            assert_eq!(widget.state().popped_count, 0);
            assert!(widget.pop_balloon(0));
            assert_eq!(widget.state().popped_count, 1);
        }

        #[test]
        fn test_manual_click_during_celebration_shares_counter() {
            let mut widget = CelebrationWidget::default();
            let id = widget.celebrate().unwrap();
            widget.tick(id);
            assert!(widget.light_candle(1));
            assert_eq!(widget.state().lit_count, 2);
            widget.tick(id);
            assert_eq!(widget.state().lit_count, 3);
        }
    }

    mod teardown {
        use super::*;

        #[test]
        fn test_teardown_cancels_pending_timer() {
            let mut widget = CelebrationWidget::default();
            let id = widget.celebrate().unwrap();
            widget.tick(id);

            assert!(widget.teardown());
            assert_eq!(widget.live_timer(), None);

            let before = widget.state();
            assert!(!widget.tick(id), "queued tick must not fire after teardown");
            assert_eq!(widget.state(), before);
        }

        #[test]
        fn test_teardown_is_idempotent() {
            let mut widget = CelebrationWidget::default();
            let events = recorded(&mut widget);
            widget.celebrate();
            assert!(widget.teardown());
            assert!(!widget.teardown());

            let torn = events
                .borrow()
                .iter()
                .filter(|e| **e == CardEvent::TornDown)
                .count();
            assert_eq!(torn, 1);
        }

        #[test]
        fn test_no_mutation_after_teardown() {
            let mut widget = CelebrationWidget::default();
            widget.teardown();
            assert!(!widget.light_candle(0));
            assert!(!widget.pop_balloon(0));
            assert_eq!(widget.celebrate(), None);
            widget.resize(ViewportSize::new(10, 10));
            assert_eq!(widget.state(), InteractionState::default());
            assert_eq!(widget.viewport(), ViewportSize::default());
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn test_candle_lit_outside_celebration() {
            let mut widget = CelebrationWidget::default();
            widget.light_candle(0);
            widget.light_candle(1);
            assert!(widget.candle_is_lit(0));
            assert!(widget.candle_is_lit(1));
            assert!(!widget.candle_is_lit(2));
            assert_eq!(widget.candle_color(1), Some(PaletteColor::Red));
            assert_eq!(widget.candle_color(2), None);
        }

        #[test]
        fn test_candle_lookahead_during_celebration() {
            let mut widget = CelebrationWidget::default();
            widget.light_candle(0);
            widget.light_candle(1);
            widget.celebrate();
            assert!(widget.candle_is_lit(2), "next candle leads in while celebrating");
            assert!(!widget.candle_is_lit(3));
            assert_eq!(widget.candle_color(2), Some(PaletteColor::Yellow));
        }

        #[test]
        fn test_candle_out_of_range_never_lit() {
            let mut widget = CelebrationWidget::default();
            light_all(&mut widget);
            widget.celebrate();
            assert!(!widget.candle_is_lit(6));
        }

        #[test]
        fn test_balloon_rendering() {
            let mut widget = CelebrationWidget::default();
            widget.pop_balloon(0);
            assert!(widget.balloon_is_popped(0));
            assert_eq!(widget.balloon_color(0), None);
            assert!(!widget.balloon_is_popped(1));
            assert_eq!(widget.balloon_color(1), Some(PaletteColor::Red));
            assert_eq!(widget.balloon_color(6), None);
        }
    }

    mod viewport {
        use super::*;

        #[test]
        fn test_resize_updates_confetti_params() {
            let mut widget = CelebrationWidget::default();
            let events = recorded(&mut widget);
            widget.resize(ViewportSize::new(800, 600));
            widget.celebrate();
            widget.resize(ViewportSize::new(1200, 900));

            assert_eq!(widget.viewport(), ViewportSize::new(1200, 900));
            let params = widget.confetti_params().unwrap();
            assert_eq!((params.width, params.height), (1200, 900));
            assert!(
                events
                    .borrow()
                    .contains(&CardEvent::Resized(ViewportSize::new(1200, 900)))
            );
        }

        #[test]
        fn test_same_size_does_not_notify() {
            let mut widget = CelebrationWidget::default();
            widget.resize(ViewportSize::new(800, 600));
            let events = recorded(&mut widget);
            widget.resize(ViewportSize::new(800, 600));
            assert!(events.borrow().is_empty());
        }
    }

    #[test]
    fn test_observer_sees_post_change_state() {
        let mut widget = CelebrationWidget::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        widget.subscribe(move |_event: &CardEvent, state: &InteractionState| {
            sink.borrow_mut().push(state.lit_count);
        });
        widget.light_candle(0);
        widget.light_candle(5);
        widget.light_candle(1);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }
}

//! Change notification for the celebration card
//!
//! Every state mutation that has an effect is reported to the subscribed
//! observers together with the post-change state. Rejected inputs
//! (out-of-order clicks, repeated celebrate, stale ticks) notify nothing.

use super::celebration::InteractionState;
use super::viewport::ViewportSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// A user click lit candle `index`
    CandleLit { index: usize },
    /// A user click popped balloon `index`
    BalloonPopped { index: usize },
    /// Celebration mode entered
    CelebrationStarted,
    /// The celebration timer lit one more candle
    CelebrationTick { lit_count: usize },
    /// The celebration timer finished and was released
    CelebrationFinished,
    /// Confetti gate opened
    ConfettiTriggered,
    /// Host drawing area changed
    Resized(ViewportSize),
    /// Widget torn down; pending timer (if any) cancelled
    TornDown,
}

pub trait CardObserver {
    fn notify(&mut self, event: &CardEvent, state: &InteractionState);
}

impl<F> CardObserver for F
where
    F: FnMut(&CardEvent, &InteractionState),
{
    fn notify(&mut self, event: &CardEvent, state: &InteractionState) {
        self(event, state)
    }
}

/// Logs every card event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CardObserver for TracingObserver {
    fn notify(&mut self, event: &CardEvent, state: &InteractionState) {
        match event {
            CardEvent::CelebrationStarted
            | CardEvent::CelebrationFinished
            | CardEvent::ConfettiTriggered
            | CardEvent::TornDown => {
                tracing::info!("Card event {:?} (state: {:?})", event, state);
            }
            _ => {
                tracing::debug!("Card event {:?} (state: {:?})", event, state);
            }
        }
    }
}

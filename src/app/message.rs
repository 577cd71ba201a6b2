//! Application messages

use crate::features::TimerId;

/// A hoverable element on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardItem {
    Candle(usize),
    Balloon(usize),
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Card ============
    /// Candle clicked (ordinal index)
    LightCandle(usize),
    /// Balloon clicked (ordinal index)
    PopBalloon(usize),
    /// "Now Celebrate!" pressed
    Celebrate,
    /// Celebration timer tick for the given timer run
    CelebrationTick(TimerId),
    /// Pointer entered (true) or left (false) a candle or balloon
    HoverItem(CardItem, bool),
    /// Pointer entered or left the card
    HoverCard(bool),

    // ============ Window ============
    /// Window drawing area changed
    WindowResized(iced::Size),
    /// Window close requested
    RequestClose,

    // ============ Animation ============
    /// Frame tick while something is animating
    AnimationTick,
}

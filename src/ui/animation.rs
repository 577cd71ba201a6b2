//! Card animations
//!
//! CSS-like transitions built on `iced_anim`: card entrance, candle pop-in
//! (staggered while celebrating), balloon shrink, and hover scale.

mod item;
mod transition;

pub use item::ItemAnimation;
pub use transition::{
    BALLOON_DURATION, CANDLE_DURATION, CANDLE_STAGGER, CARD_ENTRANCE_DURATION, Transition,
};

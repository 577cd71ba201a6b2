//! Primitive UI elements - atomic building blocks
//!
//! Canvas programs with generic Message types and no business logic.
//!
//! # Contents
//!
//! - [`CandleIcon`] - Cake with a candle, lit or unlit
//! - [`BalloonIcon`] - Balloon that shrinks away when popped
//! - [`GiftIcon`] - Gift box glyph
//! - [`confetti_canvas`] - Full-window confetti particle renderer

pub mod balloon_icon;
pub mod candle_icon;
pub mod confetti_canvas;
pub mod gift_icon;

pub use balloon_icon::BalloonIcon;
pub use candle_icon::CandleIcon;
pub use gift_icon::GiftIcon;

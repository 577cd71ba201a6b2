//! UI Components - card sections with Message handling
//!
//! Components combine widgets and primitives with application logic.
//! They are the only layer that imports from `crate::app`.

pub mod balloon_row;
pub mod birthday_card;
pub mod candle_row;
pub mod celebrate_button;
pub mod greeting_header;

pub use birthday_card::CardView;

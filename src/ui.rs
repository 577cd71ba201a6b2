//! UI module for the birthday card
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Canvas programs (candle, balloon, gift, confetti)
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Card sections with Message handling

pub mod animation;
pub mod components;
pub mod primitives;
pub mod theme;
pub mod widgets;

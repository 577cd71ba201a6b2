//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets must not import from `crate::app`; they take generic Message types.

pub mod section_header;

//! Huebar engine crate.
//!
//! This crate owns the toolkit-independent pieces used by the widget layer:
//! geometry, the color/gradient model, input state and the draw stream.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;

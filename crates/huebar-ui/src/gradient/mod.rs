//! Gradient editor widget.
//!
//! [`GradientWidget`] owns a [`Gradient`](huebar_engine::paint::Gradient) and
//! the editing session around it (selection, drag, pending delete, modes).
//! Call [`GradientWidget::show`] once per frame; it reads the pointer through
//! the [`Painter`](crate::painter::Painter), edits the gradient, and records
//! the bar and marks into the frame's draw list.
//!
//! Gestures:
//! - click on the bar away from any mark: add a mark there and open the color picker
//! - click a mark: select it and start dragging it
//! - double-click a mark: select it and open the color picker
//! - middle-click a mark: delete it
//! - drag a mark far enough below the bar, then release: delete it
//! - Delete / Backspace: delete the selected mark

mod controls;
mod draw;
mod placement;
mod settings;
mod state;
mod widget;

pub use controls::{Control, Controls};
pub use placement::position_where_to_add_next_mark;
pub use settings::{GradientFlags, GradientSettings};
pub use state::GradientState;
pub use widget::{GradientResponse, GradientWidget};

//! Huebar UI: an immediate-mode gradient editor on top of `huebar-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use huebar_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let mut editor = GradientWidget::new();
//!
//! // Every frame:
//! let input = UiInput::from_engine(&input_state, &input_frame);
//! let response = scene.frame(Vec2::new(16.0, 16.0), 320.0, &input, |painter| {
//!     editor.show(painter, "Gradient", &controls)
//! });
//! if response.modified {
//!     upload(editor.gradient());
//! }
//! // Hand `scene.draw_list()` to your renderer and open any popup in
//! // `scene.popup_requests()`.
//! ```

pub mod gradient;
pub mod input;
pub mod painter;
pub mod scene;

/// Everything a host needs to embed the editor.
pub mod prelude {
    pub use crate::gradient::{
        position_where_to_add_next_mark, Control, Controls, GradientFlags, GradientResponse,
        GradientSettings, GradientState, GradientWidget,
    };
    pub use crate::input::{ButtonInput, UiInput};
    pub use crate::painter::Painter;
    pub use crate::scene::{PopupId, UiScene, COLOR_PICKER_POPUP};

    pub use huebar_engine::coords::{Rect, Vec2};
    pub use huebar_engine::paint::{
        Gradient, Interpolation, Mark, MarkId, Paint, RelativePosition, Rgba, WrapMode,
    };
    pub use huebar_engine::scene::{DrawCmd, DrawList};
}

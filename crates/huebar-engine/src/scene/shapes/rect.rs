use crate::coords::Rect;
use crate::paint::{Paint, Rgba};
use crate::scene::{DrawCmd, DrawList};

/// Filled rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
    /// Corner radius in logical pixels; `0.0` for sharp corners.
    pub rounding: f32,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint, rounding: f32) -> Self {
        Self { rect, paint, rounding }
    }
}

impl DrawList {
    /// Records a filled rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, paint: Paint, rounding: f32) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, paint, rounding)));
    }

    /// Records a solid rectangle with sharp corners.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Rgba) {
        self.push_rect(rect, Paint::Solid(color), 0.0);
    }
}

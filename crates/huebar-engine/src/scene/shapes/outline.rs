use crate::coords::Rect;
use crate::paint::Rgba;
use crate::scene::{DrawCmd, DrawList};

/// Rectangle stroke payload. The stroke is centered on the rectangle edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RectOutlineCmd {
    pub rect: Rect,
    pub color: Rgba,
    pub thickness: f32,
    pub rounding: f32,
}

impl DrawList {
    /// Records a rectangle outline draw command.
    #[inline]
    pub fn push_rect_outline(&mut self, rect: Rect, color: Rgba, thickness: f32, rounding: f32) {
        self.push(DrawCmd::RectOutline(RectOutlineCmd { rect, color, thickness, rounding }));
    }
}

use crate::coords::Vec2;
use crate::paint::Rgba;
use crate::scene::{DrawCmd, DrawList};

/// Filled triangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub color: Rgba,
}

impl DrawList {
    /// Records a filled triangle draw command.
    #[inline]
    pub fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        self.push(DrawCmd::Triangle(TriangleCmd { points: [a, b, c], color }));
    }
}

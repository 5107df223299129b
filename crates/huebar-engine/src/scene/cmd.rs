use crate::scene::shapes::outline::RectOutlineCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// One primitive the editor asks the host renderer to draw.
///
/// Each variant's payload and `DrawList::push_*` helper live together in
/// `scene::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled rectangle: the bar segments, swatches and mark frames.
    Rect(RectCmd),
    /// Filled triangle: mark arrows.
    Triangle(TriangleCmd),
    /// Stroked rectangle: bar and widget borders, selection outline.
    RectOutline(RectOutlineCmd),
    Text(TextCmd),
}

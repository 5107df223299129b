//! Colors, the gradient model and its sampling modes, and the fills the
//! editor hands to the renderer.

pub mod color;
pub mod gradient;
pub mod mode;
pub mod position;

pub use color::Rgba;
pub use gradient::{Gradient, Mark, MarkId};
pub use mode::{Interpolation, ModeError, WrapMode};
pub use position::RelativePosition;

/// Paint source for filling geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Blends from `left` at the left edge to `right` at the right edge.
    HorizontalGradient { left: Rgba, right: Rgba },
}

impl Paint {
    #[inline]
    pub fn horizontal(left: Rgba, right: Rgba) -> Self {
        Paint::HorizontalGradient { left, right }
    }
}

impl From<Rgba> for Paint {
    #[inline]
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

use crate::coords::Vec2;
use crate::paint::Rgba;
use crate::scene::{DrawCmd, DrawList};

/// Label payload. Glyph shaping and font choice belong to the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Top-left of the first line, in logical pixels.
    pub origin: Vec2,
    pub color: Rgba,
}

impl DrawList {
    /// Records a text draw command.
    #[inline]
    pub fn push_text(&mut self, text: impl Into<String>, origin: Vec2, color: Rgba) {
        self.push(DrawCmd::Text(TextCmd { text: text.into(), origin, color }));
    }
}

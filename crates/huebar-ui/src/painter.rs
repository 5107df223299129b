use huebar_engine::coords::{Rect, Vec2};
use huebar_engine::paint::{Paint, Rgba};
use huebar_engine::scene::DrawList;

use crate::input::UiInput;
use crate::scene::PopupId;

/// Drawing and layout surface handed to widgets for one frame.
///
/// Wraps the frame's `DrawList` with a high-level API, exposes the frame's
/// input so widgets can hit-test their own regions, and keeps an
/// immediate-mode layout cursor that widgets advance as they reserve space.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    popups: &'a mut Vec<PopupId>,
    input: &'a UiInput,
    /// Left edge and width of the region widgets lay out into.
    region_left: f32,
    region_width: f32,
    cursor: Vec2,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        popups: &'a mut Vec<PopupId>,
        input: &'a UiInput,
        origin: Vec2,
        width: f32,
    ) -> Self {
        Self {
            draw_list,
            popups,
            input,
            region_left: origin.x,
            region_width: width.max(0.0),
            cursor: origin,
        }
    }

    // ── input queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn input(&self) -> &'a UiInput {
        self.input
    }

    #[inline]
    pub fn mouse_pos(&self) -> Option<Vec2> {
        self.input.mouse_pos
    }

    /// Returns `true` if the mouse cursor is inside `rect`. Never true while
    /// the pointer is outside the surface.
    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.input.mouse_pos.is_some_and(|p| rect.contains(p))
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Screen position where the next item goes.
    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    #[inline]
    pub fn set_cursor(&mut self, pos: Vec2) {
        self.cursor = pos;
    }

    /// Width left between the cursor and the right edge of the region.
    #[inline]
    pub fn available_width(&self) -> f32 {
        (self.region_left + self.region_width - self.cursor.x).max(0.0)
    }

    /// Reserves an item of `size` at the cursor and moves the cursor to the
    /// start of the next line. Returns the reserved rectangle.
    pub fn advance(&mut self, size: Vec2) -> Rect {
        let rect = Rect::from_origin_size(self.cursor, size);
        self.cursor = Vec2::new(self.region_left, self.cursor.y + size.y);
        rect
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.draw_list.push_solid_rect(rect, color);
    }

    /// Rectangle with any paint and rounded corners.
    pub fn fill_rounded_rect(&mut self, rect: Rect, rounding: f32, paint: impl Into<Paint>) {
        self.draw_list.push_rect(rect, paint.into(), rounding);
    }

    /// Rectangle blending from `left` to `right` across its width.
    pub fn fill_horizontal_gradient(&mut self, rect: Rect, left: Rgba, right: Rgba) {
        self.draw_list.push_rect(rect, Paint::horizontal(left, right), 0.0);
    }

    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        self.draw_list.push_triangle(a, b, c, color);
    }

    /// Rectangle outline.
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgba, thickness: f32, rounding: f32) {
        self.draw_list.push_rect_outline(rect, color, thickness, rounding);
    }

    /// Text at `origin` (top-left of the first line).
    pub fn text(&mut self, text: impl Into<String>, origin: Vec2, color: Rgba) {
        self.draw_list.push_text(text, origin, color);
    }

    // ── popups ────────────────────────────────────────────────────────────

    /// Asks the host to open the modal popup `id` after this frame.
    pub fn open_popup(&mut self, id: PopupId) {
        if !self.popups.contains(&id) {
            self.popups.push(id);
        }
    }
}

//! Bar, mark glyph and border rendering for the gradient editor.

use huebar_engine::coords::{Rect, Vec2};
use huebar_engine::paint::{Gradient, Interpolation, Rgba};

use crate::painter::Painter;

pub(super) const BORDER_COLOR: Rgba = Rgba::new(0.43, 0.43, 0.50, 1.0);
pub(super) const LABEL_COLOR: Rgba = Rgba::new(0.90, 0.90, 0.92, 1.0);
const MARK_COLOR: Rgba = Rgba::new(0.39, 0.39, 0.41, 1.0);
const HOVERED_MARK_COLOR: Rgba = Rgba::new(0.75, 0.75, 0.78, 1.0);
const SELECTED_MARK_COLOR: Rgba = Rgba::new(0.96, 0.62, 0.12, 1.0);

/// Half width of a mark glyph.
const ARROW_BORDER: f32 = 6.0;
const ARROW_SELECTED: f32 = 4.0;
const SWATCH_HALF: f32 = 3.0;
const INSET: f32 = 1.0;

/// Vertical room the mark glyphs take under the bar before the control rows.
pub(super) const MARKS_SPACE: f32 = 20.0;

/// Outline of the bar, then the gradient itself when there is anything to show.
pub(super) fn draw_bar(painter: &mut Painter<'_>, gradient: &Gradient, interpolation: Interpolation, bar: Rect) {
    painter.stroke_rect(bar.expand(1.0, 1.0), BORDER_COLOR, 1.0, 1.0);
    if !gradient.is_empty() {
        draw_gradient(painter, gradient, interpolation, bar);
    }
}

/// Fills `bar` segment by segment.
///
/// Each mark closes the segment that starts at the previous mark (or the left
/// edge): a blend from the previous color in linear mode, the mark's own color
/// in constant mode. A mark at `0` closes an empty segment and draws nothing.
/// The last color runs on to the right edge.
pub(super) fn draw_gradient(painter: &mut Painter<'_>, gradient: &Gradient, interpolation: Interpolation, bar: Rect) {
    let top = bar.origin.y;
    let bottom = bar.bottom();
    let mut from = bar.origin.x;
    let mut previous: Option<Rgba> = None;

    for mark in gradient.marks() {
        let color = mark.color;
        let to = bar.origin.x + mark.position.get() * bar.size.x;
        if mark.position.get() != 0.0 {
            let segment = Rect::from_min_max(Vec2::new(from, top), Vec2::new(to, bottom));
            match interpolation {
                Interpolation::Linear => {
                    painter.fill_horizontal_gradient(segment, previous.unwrap_or(color), color)
                }
                Interpolation::Constant => painter.fill_rounded_rect(segment, 1.0, color),
            }
        }
        from = to;
        previous = Some(color);
    }

    if let Some(last) = gradient.last() {
        if last.position.get() != 1.0 {
            let tail = Rect::from_min_max(Vec2::new(from, top), Vec2::new(bar.right(), bottom));
            painter.fill_rounded_rect(tail, 1.0, last.color);
        }
    }
}

/// Interactive region of the mark whose tip sits at `tip` (on the bar's bottom edge).
pub(super) fn mark_hitbox(tip: Vec2, bar_height: f32) -> Rect {
    Rect::new(
        tip.x - ARROW_BORDER * 1.5,
        tip.y - bar_height,
        ARROW_BORDER * 3.0,
        bar_height + ARROW_BORDER * 2.0,
    )
}

/// Mark glyph: an arrow pointing at the bar over a framed swatch of the mark color.
pub(super) fn draw_mark(painter: &mut Painter<'_>, tip: Vec2, mark_color: Rgba, hovered: bool, selected: bool) {
    let frame = if hovered { HOVERED_MARK_COLOR } else { MARK_COLOR };
    let inside = ARROW_BORDER - INSET;

    painter.fill_triangle(
        tip - Vec2::y(ARROW_BORDER),
        tip - Vec2::x(ARROW_BORDER),
        tip + Vec2::x(ARROW_BORDER),
        frame,
    );
    painter.fill_rounded_rect(
        Rect::from_min_max(tip - Vec2::x(ARROW_BORDER), tip + Vec2::new(ARROW_BORDER, 2.0 * ARROW_BORDER)),
        1.0,
        frame,
    );

    let inner = Rect::from_min_max(
        tip - Vec2::x(inside) + Vec2::y(INSET),
        tip + Vec2::new(inside, 2.0 * inside + INSET),
    );
    if selected {
        painter.fill_triangle(
            tip - Vec2::y(ARROW_SELECTED + INSET),
            tip + Vec2::new(-ARROW_SELECTED, INSET),
            tip + Vec2::new(ARROW_SELECTED, INSET),
            SELECTED_MARK_COLOR,
        );
        painter.stroke_rect(inner, SELECTED_MARK_COLOR, 1.0, 1.0);
    }

    painter.fill_rounded_rect(
        Rect::from_min_max(
            tip + Vec2::new(-SWATCH_HALF, SWATCH_HALF),
            tip + Vec2::new(SWATCH_HALF, SWATCH_HALF * SWATCH_HALF),
        ),
        1.0,
        mark_color,
    );
}

/// Frame around the whole widget.
pub(super) fn draw_border(painter: &mut Painter<'_>, rect: Rect) {
    painter.stroke_rect(rect, BORDER_COLOR, 1.0, 2.0);
}

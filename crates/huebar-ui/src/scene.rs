use huebar_engine::coords::Vec2;
use huebar_engine::scene::DrawList;

use crate::input::UiInput;
use crate::painter::Painter;

/// Identifies a host-side modal popup a widget asks to open.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PopupId(pub &'static str);

/// Popup showing a full color picker bound to the selected mark.
pub const COLOR_PICKER_POPUP: PopupId = PopupId("SelectedMarkColorPicker");

// ── UiScene ───────────────────────────────────────────────────────────────

/// Frame coordinator owning the output buffers reused across frames.
///
/// Each [`frame`](Self::frame) call clears the draw list and popup requests,
/// runs the caller's widget code against a fresh [`Painter`], and leaves the
/// results readable until the next call.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut editor = GradientWidget::new();
///
/// // In your frame callback:
/// let response = ui.frame(origin, width, &input, |p| editor.show(p, "Ramp", &controls));
/// renderer.draw(ui.draw_list());
/// for popup in ui.popup_requests() { host.open_popup(popup.0); }
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    draw_list: DrawList,
    popups: Vec<PopupId>,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one frame of widget code laid out from `origin` in a region `width` wide.
    pub fn frame<R>(
        &mut self,
        origin: Vec2,
        width: f32,
        input: &UiInput,
        f: impl FnOnce(&mut Painter<'_>) -> R,
    ) -> R {
        self.draw_list.clear();
        self.popups.clear();
        let mut painter = Painter::new(&mut self.draw_list, &mut self.popups, input, origin, width);
        f(&mut painter)
    }

    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Popups requested during the most recent frame, in request order.
    #[inline]
    pub fn popup_requests(&self) -> &[PopupId] {
        &self.popups
    }

    pub fn popup_requested(&self, id: PopupId) -> bool {
        self.popups.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huebar_engine::coords::Rect;
    use huebar_engine::paint::Rgba;

    #[test]
    fn frame_clears_previous_output() {
        let mut ui = UiScene::new();
        let input = UiInput::at(0.0, 0.0);
        ui.frame(Vec2::zero(), 100.0, &input, |p| {
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Rgba::WHITE);
            p.open_popup(COLOR_PICKER_POPUP);
            p.open_popup(COLOR_PICKER_POPUP);
        });
        assert_eq!(ui.draw_list().len(), 1);
        assert_eq!(ui.popup_requests(), &[COLOR_PICKER_POPUP]);

        ui.frame(Vec2::zero(), 100.0, &input, |_| {});
        assert!(ui.draw_list().is_empty());
        assert!(!ui.popup_requested(COLOR_PICKER_POPUP));
    }

    #[test]
    fn advance_moves_to_next_line() {
        let mut ui = UiScene::new();
        let input = UiInput::at(0.0, 0.0);
        let (rect, cursor, avail) = ui.frame(Vec2::new(5.0, 7.0), 100.0, &input, |p| {
            let rect = p.advance(Vec2::new(40.0, 12.0));
            (rect, p.cursor(), p.available_width())
        });
        assert_eq!(rect, Rect::new(5.0, 7.0, 40.0, 12.0));
        assert_eq!(cursor, Vec2::new(5.0, 19.0));
        assert_eq!(avail, 100.0);
    }
}

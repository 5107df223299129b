use huebar_engine::coords::{Rect, Vec2};
use huebar_engine::input::Key;
use huebar_engine::paint::{Gradient, Interpolation, Mark, MarkId, RelativePosition, Rgba, WrapMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::input::UiInput;
use crate::painter::Painter;
use crate::scene::COLOR_PICKER_POPUP;

use super::controls::{Control, Controls};
use super::draw;
use super::placement::position_where_to_add_next_mark;
use super::settings::{GradientFlags, GradientSettings};
use super::state::GradientState;

/// Outcome of one [`GradientWidget::show`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradientResponse {
    /// The gradient or one of the editing modes changed this frame.
    pub modified: bool,
    /// The color picker popup was requested this frame.
    pub open_color_picker: bool,
    /// Screen rectangle of the bar.
    pub bar: Rect,
    /// Where the host should start laying out the control rows.
    pub controls_origin: Vec2,
}

/// Interactive gradient editor.
///
/// One instance per edited gradient; instances share nothing, so any number
/// of editors can live side by side.
///
/// # Example
/// ```rust,ignore
/// let mut editor = GradientWidget::new()
///     .with_flags(GradientFlags::NO_RESET_BUTTON)
///     .with_wrap_mode(WrapMode::MirrorRepeat);
///
/// // every frame
/// let response = ui.frame(origin, width, &input, |p| editor.show(p, "Palette", &controls));
/// ```
#[derive(Debug, Clone)]
pub struct GradientWidget {
    state: GradientState,
    settings: GradientSettings,
    interpolation: Interpolation,
    wrap_mode: WrapMode,
    /// New marks get a random color instead of the color under them.
    random_mode: bool,
    rng: StdRng,
}

impl GradientWidget {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Editor whose random colors are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: GradientState::default(),
            settings: GradientSettings::default(),
            interpolation: Interpolation::default(),
            wrap_mode: WrapMode::default(),
            random_mode: false,
            rng,
        }
    }

    pub fn with_gradient(mut self, gradient: Gradient) -> Self { self.state = GradientState::new(gradient); self }
    pub fn with_settings(mut self, settings: GradientSettings) -> Self { self.settings = settings; self }
    pub fn with_flags(mut self, flags: GradientFlags) -> Self { self.settings.flags = flags; self }
    pub fn with_interpolation(mut self, v: Interpolation) -> Self { self.interpolation = v; self }
    pub fn with_wrap_mode(mut self, v: WrapMode) -> Self { self.wrap_mode = v; self }
    pub fn with_random_mode(mut self, v: bool) -> Self { self.random_mode = v; self }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn gradient(&self) -> &Gradient {
        self.state.gradient()
    }

    #[inline]
    pub fn gradient_mut(&mut self) -> &mut Gradient {
        self.state.gradient_mut()
    }

    #[inline]
    pub fn state(&self) -> &GradientState {
        &self.state
    }

    #[inline]
    pub fn settings(&self) -> &GradientSettings {
        &self.settings
    }

    #[inline]
    pub fn settings_mut(&mut self) -> &mut GradientSettings {
        &mut self.settings
    }

    pub fn interpolation(&self) -> Interpolation { self.interpolation }
    pub fn set_interpolation(&mut self, v: Interpolation) { self.interpolation = v; }
    pub fn wrap_mode(&self) -> WrapMode { self.wrap_mode }
    pub fn set_wrap_mode(&mut self, v: WrapMode) { self.wrap_mode = v; }
    pub fn random_mode(&self) -> bool { self.random_mode }
    pub fn set_random_mode(&mut self, v: bool) { self.random_mode = v; }

    pub fn selected(&self) -> Option<MarkId> {
        self.state.selected()
    }

    pub fn selected_mark(&self) -> Option<&Mark> {
        self.state.selected_mark()
    }

    /// Color of the edited gradient at `position`, using the editor's wrap and
    /// interpolation modes.
    pub fn color_at(&self, position: f32) -> Rgba {
        self.state.gradient().sample(position, self.wrap_mode, self.interpolation)
    }

    /// Whether the host should draw `control`.
    pub fn shows(&self, control: Control) -> bool {
        !self.settings.has(control.flag())
    }

    /// Help text for `control`, unless tooltips are off or the control is hidden.
    pub fn tooltip(&self, control: Control) -> Option<&'static str> {
        if self.settings.has(GradientFlags::NO_TOOLTIP) || !self.shows(control) {
            return None;
        }
        control.help_text()
    }

    // ── operations ────────────────────────────────────────────────────────

    /// Adds a mark at `position` (clamped) and selects it.
    ///
    /// The mark takes the color the bar shows there, or a random opaque color
    /// in random mode.
    pub fn add_mark(&mut self, position: f32) -> MarkId {
        let position = RelativePosition::new(position).get();
        let color = if self.random_mode {
            random_color(&mut self.rng)
        } else {
            self.state.gradient().sample(position, WrapMode::Clamp, self.interpolation)
        };
        let id = self.state.add_mark(Mark::new(position, color));
        self.state.selected = Some(id);
        log::debug!("gradient: added mark {id:?} at {position:.3}");
        id
    }

    /// Adds a mark in the middle of the widest gap.
    pub fn add_mark_at_best_position(&mut self) -> MarkId {
        let position = position_where_to_add_next_mark(self.state.gradient());
        self.add_mark(position)
    }

    /// Removes `id`, dropping any selection, drag or pending delete on it.
    pub fn remove_mark(&mut self, id: MarkId) -> bool {
        let removed = self.state.remove_mark(id).is_some();
        if removed {
            log::debug!("gradient: removed mark {id:?}");
        }
        removed
    }

    /// Removes the selected mark. No-op without a selection.
    pub fn delete_selected(&mut self) -> bool {
        match self.state.selected() {
            Some(id) => self.remove_mark(id),
            None => false,
        }
    }

    /// Recolors the selected mark. Returns whether anything changed.
    pub fn set_selected_color(&mut self, color: Rgba) -> bool {
        match self.state.selected_mark_mut() {
            Some(mark) if mark.color != color => {
                mark.color = color;
                true
            }
            _ => false,
        }
    }

    /// Moves the selected mark to `position` (clamped) and re-sorts.
    pub fn set_selected_position(&mut self, position: f32) -> bool {
        let changed = match self.state.selected_mark_mut() {
            Some(mark) => {
                let before = mark.position;
                mark.position.set(position);
                mark.position != before
            }
            None => false,
        };
        if changed {
            self.state.gradient.sort_marks();
        }
        changed
    }

    /// Discards the session: two-mark default gradient, no selection, default modes.
    pub fn reset(&mut self) {
        self.state.reset();
        self.interpolation = Interpolation::default();
        self.wrap_mode = WrapMode::default();
        self.random_mode = false;
        log::debug!("gradient: reset");
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Runs one frame: draws the editor at the painter's cursor, applies the
    /// pointer gestures and the host's `controls`, and reserves the space used.
    pub fn show(&mut self, painter: &mut Painter<'_>, label: &str, controls: &Controls) -> GradientResponse {
        self.state.prune_handles();
        let settings = self.settings;
        if settings.has(GradientFlags::NO_DRAG_DOWN_TO_DELETE) {
            // A hidden mark returns to the drag once drag-down delete is off.
            if let Some(id) = self.state.hidden.take() {
                log::debug!("gradient: mark {id:?} restored, drag-down delete disabled");
                self.state.dragging = Some(id);
            }
        }
        let input = painter.input();

        let top = painter.cursor();
        if !settings.has(GradientFlags::NO_LABEL) {
            painter.text(label, top, draw::LABEL_COLOR);
            painter.advance(Vec2::new(0.0, settings.label_height + 1.5));
        }

        let margin = settings.horizontal_margin;
        let start = painter.cursor();
        let width = (painter.available_width() - 2.0 * margin).max(1.0);
        let bar = Rect::new(start.x + margin, start.y, width, settings.editor_height);

        let bar_hovered = painter.is_hovered(bar);
        draw::draw_bar(painter, self.state.gradient(), self.interpolation, bar);

        let add_possible = bar_hovered && input.primary.clicked;
        let mut open_picker = false;
        let (hitbox_hovered, mut to_delete) = self.marks(painter, input, bar, &mut open_picker);

        let mut modified = false;
        if let Some(mouse) = input.mouse_pos.filter(|_| add_possible && !hitbox_hovered) {
            self.add_mark((mouse.x - bar.origin.x) / width);
            open_picker = true;
            modified = true;
        }

        modified |= self.mouse_dragging(input, bar);

        // Releasing a mark dragged below the bar deletes it.
        if !settings.has(GradientFlags::NO_DRAG_DOWN_TO_DELETE) && !input.primary.down {
            if let Some(hidden) = self.state.hidden.take() {
                if self.state.dragging == Some(hidden) {
                    self.state.dragging = None;
                }
                to_delete = Some(hidden);
                modified = true;
            }
        }
        if let Some(id) = to_delete {
            self.remove_mark(id);
            modified = true;
        }

        modified |= self.apply_controls(input, controls);

        if open_picker {
            painter.open_popup(COLOR_PICKER_POPUP);
        }

        let controls_origin = Vec2::new(bar.origin.x, bar.bottom() + draw::MARKS_SPACE);
        let bottom = controls_origin.y + settings.control_rows() as f32 * settings.control_row_height;
        if !settings.has(GradientFlags::NO_BORDER) {
            draw::draw_border(
                painter,
                Rect::from_min_max(
                    Vec2::new(bar.origin.x - margin - 4.0, top.y - 4.0),
                    Vec2::new(bar.right() + margin + 4.0, bottom + 4.0),
                ),
            );
        }
        painter.advance(Vec2::new(width + 2.0 * margin, bottom - start.y));

        GradientResponse { modified, open_color_picker: open_picker, bar, controls_origin }
    }

    /// Draws every visible mark and applies clicks on their hit boxes.
    ///
    /// Returns whether any hit box is hovered and the mark to delete, if any.
    fn marks(
        &mut self,
        painter: &mut Painter<'_>,
        input: &UiInput,
        bar: Rect,
        open_picker: &mut bool,
    ) -> (bool, Option<MarkId>) {
        let snapshot: Vec<(MarkId, Mark)> = self.state.gradient().iter().map(|(id, m)| (id, *m)).collect();
        let mut any_hovered = false;
        let mut to_delete = None;

        for (id, mark) in snapshot {
            if self.state.hidden == Some(id) {
                continue;
            }
            let tip = Vec2::new(bar.origin.x + mark.position.get() * bar.size.x, bar.bottom());
            let hovered = painter.is_hovered(draw::mark_hitbox(tip, bar.size.y));
            draw::draw_mark(painter, tip, mark.color, hovered, self.state.selected == Some(id));
            if !hovered {
                continue;
            }

            any_hovered = true;
            if input.primary.clicked {
                self.state.dragging = Some(id);
                self.state.selected = Some(id);
            }
            if input.primary.double_clicked {
                self.state.selected = Some(id);
                *open_picker = true;
            }
            if input.middle.released {
                to_delete = Some(id);
            }
        }
        (any_hovered, to_delete)
    }

    /// Follows the pointer with the dragged mark. Returns whether it moved.
    fn mouse_dragging(&mut self, input: &UiInput, bar: Rect) -> bool {
        if !input.primary.down {
            self.state.dragging = None;
        }
        let Some(id) = self.state.dragging else {
            return false;
        };
        // Without a pointer the mark stays where it was last dragged, pending delete included.
        let Some(mouse) = input.mouse_pos.filter(|_| input.primary.dragging) else {
            return false;
        };

        let target = ((mouse.x - bar.origin.x) / bar.size.x).clamp(0.0, 1.0);
        let mut moved = false;
        if let Some(mark) = self.state.gradient.get_mut(id) {
            if mark.position.get() != target {
                mark.position.set(target);
                moved = true;
            }
        }
        if moved {
            self.state.gradient.sort_marks();
            log::trace!("gradient: dragged mark {id:?} to {target:.3}");
        }

        if !self.settings.has(GradientFlags::NO_DRAG_DOWN_TO_DELETE) {
            let below = mouse.y - bar.bottom();
            let threshold = self.settings.delete_drag_threshold;
            if below >= threshold && self.state.hidden != Some(id) {
                log::debug!("gradient: mark {id:?} pending delete");
                self.state.hidden = Some(id);
            }
            if self.state.hidden.is_some() && below <= threshold {
                self.state.dragging = self.state.hidden.take();
            }
        }
        moved
    }

    fn apply_controls(&mut self, input: &UiInput, controls: &Controls) -> bool {
        let settings = self.settings;
        let mut modified = false;

        if !self.state.gradient().is_empty() {
            let button = !settings.has(GradientFlags::NO_REMOVE_BUTTON) && controls.remove;
            let key = input.key_pressed(Key::Delete) || input.key_pressed(Key::Backspace);
            if button || key {
                modified |= self.delete_selected();
            }
        }
        if !settings.has(GradientFlags::NO_ADD_BUTTON) && controls.add {
            self.add_mark_at_best_position();
            modified = true;
        }
        if !settings.has(GradientFlags::NO_COLOR_EDIT) {
            if let Some(color) = controls.color {
                modified |= self.set_selected_color(color);
            }
        }
        if !settings.has(GradientFlags::NO_POSITION_SLIDER) {
            if let Some(position) = controls.position {
                modified |= self.set_selected_position(position);
            }
        }
        if !settings.has(GradientFlags::NO_INTERPOLATION_COMBO) {
            if let Some(v) = controls.interpolation {
                modified |= replace(&mut self.interpolation, v);
            }
        }
        if !settings.has(GradientFlags::NO_WRAP_MODE_COMBO) {
            if let Some(v) = controls.wrap_mode {
                modified |= replace(&mut self.wrap_mode, v);
            }
        }
        if !settings.has(GradientFlags::NO_RANDOM_MODE_CHANGE) {
            if let Some(v) = controls.random_mode {
                modified |= replace(&mut self.random_mode, v);
            }
        }
        if !settings.has(GradientFlags::NO_RESET_BUTTON) && controls.reset {
            self.reset();
            modified = true;
        }
        if let Some(color) = controls.picker_color {
            modified |= self.set_selected_color(color);
        }
        modified
    }
}

impl Default for GradientWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Stores `value` in `slot`; true if it differed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

fn random_color(rng: &mut StdRng) -> Rgba {
    Rgba::rgb(
        rng.gen_range(0.0f32..1.0),
        rng.gen_range(0.0f32..1.0),
        rng.gen_range(0.0f32..1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ButtonInput;
    use crate::scene::UiScene;
    use huebar_engine::scene::DrawCmd;

    const RED: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
    const GREEN: Rgba = Rgba::rgb(0.0, 1.0, 0.0);
    const BLUE: Rgba = Rgba::rgb(0.0, 0.0, 1.0);

    // Region 220 wide at the origin: bar spans x 10..210, y 0..40.
    fn x_at(position: f32) -> f32 {
        10.0 + 200.0 * position
    }

    struct Harness {
        ui: UiScene,
        widget: GradientWidget,
    }

    impl Harness {
        fn new() -> Self {
            Self::with(GradientWidget::with_seed(7))
        }

        fn with(widget: GradientWidget) -> Self {
            let flags = widget.settings().flags | GradientFlags::NO_LABEL;
            Self { ui: UiScene::new(), widget: widget.with_flags(flags) }
        }

        fn three_marks() -> Self {
            Self::with(GradientWidget::with_seed(7).with_gradient(Gradient::from_marks([
                Mark::new(0.0, RED),
                Mark::new(0.5, GREEN),
                Mark::new(1.0, BLUE),
            ])))
        }

        fn frame(&mut self, input: UiInput) -> GradientResponse {
            self.frame_with(input, Controls::none())
        }

        fn frame_with(&mut self, input: UiInput, controls: Controls) -> GradientResponse {
            let widget = &mut self.widget;
            self.ui.frame(Vec2::zero(), 220.0, &input, |p| widget.show(p, "Gradient", &controls))
        }

        fn idle(&mut self) -> GradientResponse {
            self.frame(UiInput::at(500.0, 500.0))
        }

        fn colors(&self) -> Vec<Rgba> {
            self.widget.gradient().marks().map(|m| m.color).collect()
        }
    }

    fn click(x: f32, y: f32) -> UiInput {
        UiInput::at(x, y).with_primary(ButtonInput::CLICK)
    }

    fn drag(x: f32, y: f32) -> UiInput {
        UiInput::at(x, y).with_primary(ButtonInput::DRAG)
    }

    fn release(x: f32, y: f32) -> UiInput {
        UiInput::at(x, y).with_primary(ButtonInput::RELEASE)
    }

    #[test]
    fn layout_reports_bar_and_controls_origin() {
        let mut h = Harness::new();
        let r = h.idle();
        assert_eq!(r.bar, Rect::new(10.0, 0.0, 200.0, 40.0));
        assert_eq!(r.controls_origin, Vec2::new(10.0, 60.0));
        assert!(!r.modified);
        assert!(!r.open_color_picker);
    }

    #[test]
    fn label_pushes_bar_down() {
        let mut h = Harness::new();
        h.widget.settings_mut().flags = GradientFlags::empty();
        let r = h.idle();
        assert_eq!(r.bar.origin.y, 17.5);
        assert!(h.ui.draw_list().iter().any(|c| matches!(c, DrawCmd::Text(t) if t.text == "Gradient")));
    }

    #[test]
    fn click_on_empty_bar_adds_selected_mark() {
        let mut h = Harness::new();
        let r = h.frame(click(x_at(0.5), 20.0));

        assert!(r.modified);
        assert!(r.open_color_picker);
        assert!(h.ui.popup_requested(COLOR_PICKER_POPUP));
        assert_eq!(h.widget.gradient().len(), 3);

        let mark = h.widget.selected_mark().copied().unwrap();
        assert_eq!(mark.position.get(), 0.5);
        assert_eq!(mark.color, Rgba::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn random_mode_colors_are_opaque() {
        let mut h = Harness::with(GradientWidget::with_seed(42).with_random_mode(true));
        h.frame(click(x_at(0.25), 20.0));
        let c = h.widget.selected_mark().unwrap().color;
        assert_eq!(c.a, 1.0);
        for v in [c.r, c.g, c.b] {
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_random_colors() {
        let mut a = GradientWidget::with_seed(3).with_random_mode(true);
        let mut b = GradientWidget::with_seed(3).with_random_mode(true);
        let ia = a.add_mark(0.5);
        let ib = b.add_mark(0.5);
        assert_eq!(a.gradient().get(ia), b.gradient().get(ib));
    }

    #[test]
    fn click_on_mark_selects_and_starts_drag() {
        let mut h = Harness::new();
        let first = h.widget.gradient().ids().next().unwrap();
        let r = h.frame(click(x_at(0.0), 20.0));

        assert_eq!(h.widget.selected(), Some(first));
        assert_eq!(h.widget.state().dragging(), Some(first));
        assert_eq!(h.widget.gradient().len(), 2);
        assert!(!r.open_color_picker);
        assert!(h.ui.popup_requests().is_empty());
    }

    #[test]
    fn releasing_ends_drag_but_keeps_selection() {
        let mut h = Harness::new();
        h.frame(click(x_at(0.0), 20.0));
        h.frame(release(x_at(0.0), 20.0));
        assert!(h.widget.state().dragging().is_none());
        assert!(h.widget.selected().is_some());
    }

    #[test]
    fn dragging_moves_and_resorts() {
        let mut h = Harness::three_marks();
        h.frame(click(x_at(0.0), 20.0));
        let r = h.frame(drag(x_at(0.75), 20.0));

        assert!(r.modified);
        assert_eq!(h.widget.selected_mark().unwrap().position.get(), 0.75);
        assert_eq!(h.colors(), vec![GREEN, RED, BLUE]);
    }

    #[test]
    fn dragging_past_the_ends_clamps() {
        let mut h = Harness::three_marks();
        h.frame(click(x_at(0.5), 20.0));
        h.frame(drag(-50.0, 20.0));
        assert_eq!(h.widget.selected_mark().unwrap().position.get(), 0.0);
    }

    #[test]
    fn drag_down_hides_and_release_deletes() {
        let mut h = Harness::three_marks();
        h.frame(click(x_at(0.5), 20.0));
        let green = h.widget.selected().unwrap();

        h.frame(drag(x_at(0.5), 145.0));
        assert_eq!(h.widget.state().hidden(), Some(green));
        assert_eq!(h.widget.gradient().len(), 3);

        let r = h.frame(release(x_at(0.5), 145.0));
        assert!(r.modified);
        assert_eq!(h.widget.gradient().len(), 2);
        assert!(!h.widget.gradient().contains(green));
        assert!(h.widget.selected().is_none());
        assert!(h.widget.state().hidden().is_none());
        assert!(h.widget.state().dragging().is_none());
    }

    #[test]
    fn coming_back_up_restores_hidden_mark() {
        let mut h = Harness::three_marks();
        h.frame(click(x_at(0.5), 20.0));
        let green = h.widget.selected().unwrap();

        h.frame(drag(x_at(0.5), 150.0));
        h.frame(drag(x_at(0.6), 60.0));
        assert!(h.widget.state().hidden().is_none());
        assert_eq!(h.widget.state().dragging(), Some(green));
        let position = h.widget.gradient().get(green).unwrap().position.get();
        assert!((position - 0.6).abs() < 1e-5);

        h.frame(release(x_at(0.6), 60.0));
        assert!(h.widget.gradient().contains(green));
    }

    #[test]
    fn drag_down_disabled_by_flag() {
        let widget = GradientWidget::with_seed(1).with_flags(GradientFlags::NO_DRAG_DOWN_TO_DELETE);
        let mut h = Harness::with(widget);
        h.frame(click(x_at(1.0), 20.0));
        h.frame(drag(x_at(1.0), 400.0));
        assert!(h.widget.state().hidden().is_none());
        h.frame(release(x_at(1.0), 400.0));
        assert_eq!(h.widget.gradient().len(), 2);
    }

    #[test]
    fn disabling_drag_down_mid_gesture_restores_hidden_mark() {
        let mut h = Harness::three_marks();
        h.frame(click(x_at(0.5), 20.0));
        let green = h.widget.selected().unwrap();
        h.frame(drag(x_at(0.5), 150.0));
        assert_eq!(h.widget.state().hidden(), Some(green));

        h.widget.settings_mut().flags |= GradientFlags::NO_DRAG_DOWN_TO_DELETE;
        h.frame(drag(x_at(0.5), 150.0));
        assert!(h.widget.state().hidden().is_none());
        assert_eq!(h.widget.state().dragging(), Some(green));

        h.frame(release(x_at(0.5), 150.0));
        assert!(h.widget.gradient().contains(green));
        assert!(h.widget.state().hidden().is_none());
    }

    #[test]
    fn pointer_outside_surface_freezes_drag() {
        let mut h = Harness::three_marks();
        h.frame(click(x_at(0.5), 20.0));
        let green = h.widget.selected().unwrap();
        h.frame(drag(x_at(0.5), 150.0));

        let r = h.frame(UiInput::default().with_primary(ButtonInput::DRAG));
        assert!(!r.modified);
        assert_eq!(h.widget.state().hidden(), Some(green));
        assert_eq!(h.widget.gradient().get(green).unwrap().position.get(), 0.5);

        h.frame(UiInput::default().with_primary(ButtonInput::RELEASE));
        assert!(!h.widget.gradient().contains(green));
    }

    #[test]
    fn click_without_pointer_adds_nothing() {
        let mut h = Harness::new();
        let r = h.frame(UiInput::default().with_primary(ButtonInput::CLICK));
        assert!(!r.modified);
        assert_eq!(h.widget.gradient().len(), 2);
    }

    #[test]
    fn middle_release_deletes_hovered_mark() {
        let mut h = Harness::three_marks();
        h.frame(click(x_at(0.5), 20.0));
        let green = h.widget.selected().unwrap();

        let r = h.frame(UiInput::at(x_at(0.5), 20.0).with_middle(ButtonInput::RELEASE));
        assert!(r.modified);
        assert!(!h.widget.gradient().contains(green));
        assert!(h.widget.selected().is_none());
        assert_eq!(h.colors(), vec![RED, BLUE]);
    }

    #[test]
    fn delete_key_removes_selection() {
        let mut h = Harness::three_marks();
        h.frame(click(x_at(0.5), 20.0));
        h.frame(release(x_at(0.5), 20.0));

        let r = h.frame(UiInput::at(500.0, 500.0).with_key(Key::Delete));
        assert!(r.modified);
        assert_eq!(h.colors(), vec![RED, BLUE]);
        assert!(h.widget.selected().is_none());

        let r = h.frame(UiInput::at(500.0, 500.0).with_key(Key::Backspace));
        assert!(!r.modified);
        assert_eq!(h.widget.gradient().len(), 2);
    }

    #[test]
    fn double_click_opens_picker_without_adding() {
        let mut h = Harness::three_marks();
        let r = h.frame(UiInput::at(x_at(0.5), 20.0).with_primary(ButtonInput::DOUBLE_CLICK));
        assert!(r.open_color_picker);
        assert!(h.ui.popup_requested(COLOR_PICKER_POPUP));
        assert_eq!(h.widget.gradient().len(), 3);
        assert_eq!(h.widget.selected_mark().unwrap().color, GREEN);
    }

    #[test]
    fn add_button_uses_widest_gap() {
        let mut h = Harness::new();
        let r = h.frame_with(UiInput::at(500.0, 500.0), Controls { add: true, ..Controls::none() });
        assert!(r.modified);
        assert!(!r.open_color_picker);
        assert_eq!(h.widget.selected_mark().unwrap().position.get(), 0.5);
    }

    #[test]
    fn hidden_controls_are_ignored() {
        let flags = GradientFlags::NO_ADD_BUTTON | GradientFlags::NO_REMOVE_BUTTON | GradientFlags::NO_RESET_BUTTON;
        let mut h = Harness::with(GradientWidget::with_seed(1).with_flags(flags));
        h.frame(click(x_at(0.0), 20.0));

        let controls = Controls { add: true, remove: true, reset: true, ..Controls::none() };
        let r = h.frame_with(UiInput::at(500.0, 500.0), controls);
        assert!(!r.modified);
        assert_eq!(h.widget.gradient().len(), 2);
        assert!(h.widget.selected().is_some());
        assert!(!h.widget.shows(Control::Add));
        assert!(h.widget.tooltip(Control::Remove).is_none());
    }

    #[test]
    fn remove_button_needs_selection() {
        let mut h = Harness::three_marks();
        let remove = Controls { remove: true, ..Controls::none() };
        assert!(!h.frame_with(UiInput::at(500.0, 500.0), remove).modified);

        h.frame(click(x_at(1.0), 20.0));
        assert!(h.frame_with(UiInput::at(500.0, 500.0), remove).modified);
        assert_eq!(h.colors(), vec![RED, GREEN]);
    }

    #[test]
    fn reset_restores_defaults() {
        let widget = GradientWidget::with_seed(1)
            .with_interpolation(Interpolation::Constant)
            .with_wrap_mode(WrapMode::Repeat)
            .with_random_mode(true);
        let mut h = Harness::with(widget);
        h.frame(click(x_at(0.3), 20.0));
        assert_eq!(h.widget.gradient().len(), 3);

        let r = h.frame_with(UiInput::at(500.0, 500.0), Controls { reset: true, ..Controls::none() });
        assert!(r.modified);
        assert_eq!(h.colors(), vec![Rgba::BLACK, Rgba::WHITE]);
        assert!(h.widget.selected().is_none());
        assert_eq!(h.widget.interpolation(), Interpolation::Linear);
        assert_eq!(h.widget.wrap_mode(), WrapMode::Clamp);
        assert!(!h.widget.random_mode());
    }

    #[test]
    fn position_control_clamps_and_resorts() {
        let mut h = Harness::three_marks();
        h.frame(click(x_at(0.0), 20.0));
        h.frame(release(x_at(0.0), 20.0));

        let at = |p| Controls { position: Some(p), ..Controls::none() };
        assert!(h.frame_with(UiInput::at(500.0, 500.0), at(0.8)).modified);
        assert_eq!(h.colors(), vec![GREEN, RED, BLUE]);

        h.frame_with(UiInput::at(500.0, 500.0), at(-3.0));
        assert_eq!(h.widget.selected_mark().unwrap().position.get(), 0.0);
        assert_eq!(h.colors(), vec![RED, GREEN, BLUE]);
    }

    #[test]
    fn mode_controls_report_changes_once() {
        let mut h = Harness::new();
        let controls = Controls {
            interpolation: Some(Interpolation::Constant),
            wrap_mode: Some(WrapMode::MirrorRepeat),
            random_mode: Some(true),
            ..Controls::none()
        };
        assert!(h.frame_with(UiInput::at(500.0, 500.0), controls).modified);
        assert_eq!(h.widget.interpolation(), Interpolation::Constant);
        assert_eq!(h.widget.wrap_mode(), WrapMode::MirrorRepeat);
        assert!(h.widget.random_mode());

        assert!(!h.frame_with(UiInput::at(500.0, 500.0), controls).modified);
    }

    #[test]
    fn picker_color_ignores_color_edit_flag() {
        let mut h = Harness::with(GradientWidget::with_seed(1).with_flags(GradientFlags::NO_COLOR_EDIT));
        h.frame(click(x_at(1.0), 20.0));

        let edit = Controls { color: Some(RED), ..Controls::none() };
        assert!(!h.frame_with(UiInput::at(500.0, 500.0), edit).modified);

        let picked = Controls { picker_color: Some(BLUE), ..Controls::none() };
        assert!(h.frame_with(UiInput::at(500.0, 500.0), picked).modified);
        assert_eq!(h.widget.selected_mark().unwrap().color, BLUE);
    }

    #[test]
    fn empty_gradient_draws_outline_only_and_accepts_clicks() {
        let mut h = Harness::new();
        h.widget.gradient_mut().clear();
        h.idle();
        assert!(h.ui.draw_list().iter().all(|c| matches!(c, DrawCmd::RectOutline(_))));
        assert_eq!(h.ui.draw_list().len(), 2);

        h.frame(click(x_at(0.4), 20.0));
        assert_eq!(h.widget.gradient().len(), 1);
        assert_eq!(h.widget.selected_mark().unwrap().color, Rgba::BLACK);
    }

    #[test]
    fn handles_to_externally_removed_marks_are_dropped() {
        let mut h = Harness::new();
        h.frame(click(x_at(0.0), 20.0));
        let id = h.widget.selected().unwrap();
        h.widget.gradient_mut().remove(id);

        h.frame(drag(x_at(0.5), 20.0));
        assert!(h.widget.selected().is_none());
        assert!(h.widget.state().dragging().is_none());
    }

    #[test]
    fn tooltips_follow_flags() {
        let w = GradientWidget::with_seed(1);
        assert!(w.tooltip(Control::Add).is_some());
        assert!(w.tooltip(Control::Reset).is_none());

        let w = w.with_flags(GradientFlags::NO_TOOLTIP);
        assert!(w.tooltip(Control::Add).is_none());
        assert!(w.shows(Control::Add));
    }

    #[test]
    fn editors_are_independent() {
        let mut a = GradientWidget::with_seed(1);
        let b = GradientWidget::with_seed(1);
        a.add_mark(0.5);
        assert_eq!(a.gradient().len(), 3);
        assert_eq!(b.gradient().len(), 2);
    }
}

use huebar_engine::paint::{Gradient, Mark, MarkId};

/// Gradient plus the editor's transient handles into it.
///
/// `selected`, `dragging` and `hidden` are non-owning handles. Every removal
/// goes through [`remove_mark`](Self::remove_mark), which clears any handle
/// naming the removed mark before the mark goes away.
#[derive(Debug, Clone, Default)]
pub struct GradientState {
    pub(super) gradient: Gradient,
    pub(super) selected: Option<MarkId>,
    pub(super) dragging: Option<MarkId>,
    /// Mark being dragged below the bar: not drawn, not hit-tested, deleted on release.
    pub(super) hidden: Option<MarkId>,
}

impl GradientState {
    pub fn new(gradient: Gradient) -> Self {
        Self { gradient, ..Self::default() }
    }

    #[inline]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Mutable access for hosts. Handles to marks removed through here are
    /// dropped at the start of the next frame.
    #[inline]
    pub fn gradient_mut(&mut self) -> &mut Gradient {
        &mut self.gradient
    }

    #[inline]
    pub fn selected(&self) -> Option<MarkId> {
        self.selected
    }

    #[inline]
    pub fn dragging(&self) -> Option<MarkId> {
        self.dragging
    }

    #[inline]
    pub fn hidden(&self) -> Option<MarkId> {
        self.hidden
    }

    pub fn selected_mark(&self) -> Option<&Mark> {
        self.selected.and_then(|id| self.gradient.get(id))
    }

    pub fn selected_mark_mut(&mut self) -> Option<&mut Mark> {
        let id = self.selected?;
        self.gradient.get_mut(id)
    }

    /// Selects `id` if it names a live mark. Returns whether it did.
    pub fn select(&mut self, id: MarkId) -> bool {
        if self.gradient.contains(id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub(super) fn add_mark(&mut self, mark: Mark) -> MarkId {
        self.gradient.add_mark(mark)
    }

    /// Removes the mark behind `id`, clearing every handle that names it first.
    pub fn remove_mark(&mut self, id: MarkId) -> Option<Mark> {
        for handle in [&mut self.selected, &mut self.dragging, &mut self.hidden] {
            if *handle == Some(id) {
                *handle = None;
            }
        }
        self.gradient.remove(id)
    }

    /// Drops handles whose mark no longer exists.
    pub(super) fn prune_handles(&mut self) {
        let gradient = &self.gradient;
        for handle in [&mut self.selected, &mut self.dragging, &mut self.hidden] {
            if handle.is_some_and(|id| !gradient.contains(id)) {
                *handle = None;
            }
        }
    }

    /// Back to the two-mark default with no selection, drag or hidden mark.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huebar_engine::paint::Rgba;

    fn state_with_three() -> (GradientState, MarkId) {
        let mut s = GradientState::default();
        let id = s.add_mark(Mark::new(0.5, Rgba::rgb(1.0, 0.0, 0.0)));
        (s, id)
    }

    #[test]
    fn removing_a_mark_clears_all_handles_to_it() {
        let (mut s, id) = state_with_three();
        s.selected = Some(id);
        s.dragging = Some(id);
        s.hidden = Some(id);
        assert!(s.remove_mark(id).is_some());
        assert_eq!((s.selected, s.dragging, s.hidden), (None, None, None));
        assert_eq!(s.gradient().len(), 2);
    }

    #[test]
    fn removing_another_mark_keeps_selection() {
        let (mut s, id) = state_with_three();
        s.select(id);
        let other = s.gradient().ids().next().unwrap();
        s.remove_mark(other);
        assert_eq!(s.selected(), Some(id));
        assert!(s.selected_mark().is_some());
    }

    #[test]
    fn prune_drops_handles_removed_behind_our_back() {
        let (mut s, id) = state_with_three();
        s.select(id);
        s.gradient_mut().remove(id);
        s.prune_handles();
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn select_rejects_dead_ids() {
        let (mut s, id) = state_with_three();
        s.remove_mark(id);
        assert!(!s.select(id));
        assert!(s.selected_mark_mut().is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let (mut s, id) = state_with_three();
        s.select(id);
        s.dragging = Some(id);
        s.reset();
        assert_eq!(s.gradient().len(), 2);
        assert_eq!((s.selected, s.dragging, s.hidden), (None, None, None));
    }
}

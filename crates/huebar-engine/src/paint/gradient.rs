use super::{Interpolation, RelativePosition, Rgba, WrapMode};

/// A gradient stop: a position on the axis and the color found there.
///
/// Equality is structural, so two distinct marks with the same position and
/// color compare equal. Use [`MarkId`] to tell them apart.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Mark {
    pub position: RelativePosition,
    pub color: Rgba,
}

impl Mark {
    #[inline]
    pub fn new(position: f32, color: Rgba) -> Self {
        Self { position: RelativePosition::new(position), color }
    }
}

/// Stable handle to a mark stored in a [`Gradient`].
///
/// Ids are allocated on insertion and never reused by the same gradient, so a
/// handle to a removed mark simply stops resolving.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct MarkId(u32);

#[derive(Debug, Clone)]
struct Slot {
    id: MarkId,
    mark: Mark,
}

/// Ordered collection of marks plus color sampling.
///
/// Invariants:
/// - marks are sorted by ascending position after every call that inserts,
///   and after [`sort_marks`](Self::sort_marks); callers that edit positions
///   through [`get_mut`](Self::get_mut) or [`marks_mut`](Self::marks_mut) must
///   call `sort_marks` afterwards
/// - several marks may share a position; their relative order is the stored order
/// - an empty gradient is valid and samples as opaque black
#[derive(Debug, Clone)]
pub struct Gradient {
    slots: Vec<Slot>,
    next_id: u32,
}

impl Gradient {
    /// Two-mark default: opaque black at 0, opaque white at 1.
    pub fn new() -> Self {
        let mut gradient = Self::empty();
        gradient.fill_default();
        gradient
    }

    pub fn empty() -> Self {
        Self { slots: Vec::new(), next_id: 0 }
    }

    /// Builds a gradient from arbitrary marks, sorting them by position.
    pub fn from_marks(marks: impl IntoIterator<Item = Mark>) -> Self {
        let mut gradient = Self::empty();
        for mark in marks {
            gradient.push(mark);
        }
        gradient.sort_marks();
        gradient
    }

    fn fill_default(&mut self) {
        self.push(Mark::new(0.0, Rgba::BLACK));
        self.push(Mark::new(1.0, Rgba::WHITE));
    }

    fn push(&mut self, mark: Mark) -> MarkId {
        let id = MarkId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.slots.push(Slot { id, mark });
        id
    }

    // ── mutation ──────────────────────────────────────────────────────────

    /// Inserts `mark` and keeps the collection sorted.
    pub fn add_mark(&mut self, mark: Mark) -> MarkId {
        let id = self.push(mark);
        self.sort_marks();
        id
    }

    /// Removes the first mark structurally equal to `mark`.
    ///
    /// Returns `false` and leaves the gradient untouched when none matches.
    pub fn remove_mark(&mut self, mark: &Mark) -> bool {
        match self.slots.iter().position(|s| s.mark == *mark) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the mark behind `id`, if it is still alive.
    pub fn remove(&mut self, id: MarkId) -> Option<Mark> {
        let index = self.index_of(id)?;
        Some(self.slots.remove(index).mark)
    }

    /// Stable sort by ascending position.
    pub fn sort_marks(&mut self) {
        self.slots.sort_by(|a, b| a.mark.position.total_cmp(&b.mark.position));
    }

    /// Restores the two-mark default. Outstanding ids stop resolving.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.fill_default();
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    // ── access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn contains(&self, id: MarkId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.mark)
    }

    pub fn get_mut(&mut self, id: MarkId) -> Option<&mut Mark> {
        self.slots.iter_mut().find(|s| s.id == id).map(|s| &mut s.mark)
    }

    /// Marks with their handles, in stored (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (MarkId, &Mark)> + '_ {
        self.slots.iter().map(|s| (s.id, &s.mark))
    }

    pub fn ids(&self) -> impl Iterator<Item = MarkId> + '_ {
        self.slots.iter().map(|s| s.id)
    }

    pub fn marks(&self) -> impl Iterator<Item = &Mark> + '_ {
        self.slots.iter().map(|s| &s.mark)
    }

    pub fn marks_mut(&mut self) -> impl Iterator<Item = &mut Mark> + '_ {
        self.slots.iter_mut().map(|s| &mut s.mark)
    }

    pub fn first(&self) -> Option<&Mark> {
        self.slots.first().map(|s| &s.mark)
    }

    pub fn last(&self) -> Option<&Mark> {
        self.slots.last().map(|s| &s.mark)
    }

    fn index_of(&self, id: MarkId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }

    // ── sampling ──────────────────────────────────────────────────────────

    /// Linear color at `position` after remapping it with `mode`.
    #[inline]
    pub fn get_color_at(&self, position: f32, mode: WrapMode) -> Rgba {
        self.compute_color_at(RelativePosition::new(mode.apply(position)))
    }

    /// Color at `position` after remapping it with `mode`, using `interpolation`
    /// between neighboring marks.
    pub fn sample(&self, position: f32, mode: WrapMode, interpolation: Interpolation) -> Rgba {
        let position = RelativePosition::new(mode.apply(position));
        match interpolation {
            Interpolation::Linear => self.compute_color_at(position),
            Interpolation::Constant => self.compute_constant_color_at(position),
        }
    }

    /// Linear color at an already-normalized position.
    ///
    /// A mark sitting exactly on `position` wins (first in stored order).
    /// Otherwise the closest marks strictly below and above are blended per
    /// channel; past either end the outermost mark's color is returned.
    pub fn compute_color_at(&self, position: RelativePosition) -> Rgba {
        match self.neighbors(position) {
            Neighbors::Exact(mark) => mark.color,
            Neighbors::Between(lower, upper) => {
                let distance = upper.position.get() - lower.position.get();
                let mix = (position.get() - lower.position.get()) / distance;
                Rgba::lerp(lower.color, upper.color, mix)
            }
            Neighbors::Below(mark) | Neighbors::Above(mark) => mark.color,
            Neighbors::None => Rgba::BLACK,
        }
    }

    fn compute_constant_color_at(&self, position: RelativePosition) -> Rgba {
        match self.neighbors(position) {
            Neighbors::Exact(mark) | Neighbors::Above(mark) | Neighbors::Below(mark) => mark.color,
            Neighbors::Between(_, upper) => upper.color,
            Neighbors::None => Rgba::BLACK,
        }
    }

    fn neighbors(&self, position: RelativePosition) -> Neighbors<'_> {
        let mut lower: Option<&Mark> = None;
        let mut upper: Option<&Mark> = None;
        for mark in self.marks() {
            if mark.position == position {
                return Neighbors::Exact(mark);
            }
            if mark.position > position && upper.is_none_or(|u| mark.position < u.position) {
                upper = Some(mark);
            }
            if mark.position < position && lower.is_none_or(|l| mark.position > l.position) {
                lower = Some(mark);
            }
        }
        match (lower, upper) {
            (Some(l), Some(u)) => Neighbors::Between(l, u),
            // Only marks above the query: `Above` holds the one just above it.
            (None, Some(u)) => Neighbors::Above(u),
            (Some(l), None) => Neighbors::Below(l),
            (None, None) => Neighbors::None,
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new()
    }
}

/// Marks surrounding a query position.
enum Neighbors<'a> {
    Exact(&'a Mark),
    Between(&'a Mark, &'a Mark),
    /// Every mark lies above the query.
    Above(&'a Mark),
    /// Every mark lies below the query.
    Below(&'a Mark),
    None,
}

use core::cmp::Ordering;

/// Normalized coordinate along the gradient axis, always in `[0, 1]`.
///
/// Values are clamped on construction and on [`set`](Self::set); NaN maps to `0`.
/// Comparison goes through the inner float.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct RelativePosition(f32);

impl RelativePosition {
    pub const START: RelativePosition = RelativePosition(0.0);
    pub const END: RelativePosition = RelativePosition(1.0);

    #[inline]
    pub fn new(value: f32) -> Self {
        Self(clamp_unit(value))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, value: f32) {
        self.0 = clamp_unit(value);
    }

    /// Total order over the inner float, for sorting.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f32> for RelativePosition {
    #[inline]
    fn from(value: f32) -> Self {
        RelativePosition::new(value)
    }
}

#[inline]
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

// ── wrap helpers ──────────────────────────────────────────────────────────

/// Fractional part, always in `[0, 1)` even for negative inputs.
#[inline]
pub(crate) fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Positive modulo: result in `[0, m)`.
#[inline]
pub(crate) fn modulo(x: f32, m: f32) -> f32 {
    fract(x / m) * m
}

#[inline]
pub(crate) fn repeat_position(position: f32) -> f32 {
    fract(position)
}

#[inline]
pub(crate) fn mirror_clamp_position(position: f32) -> f32 {
    clamp_unit(position.abs())
}

/// Triangle wave of period 2: rises 0 → 1 over `[0, 1]`, falls back over `[1, 2]`.
#[inline]
pub(crate) fn mirror_repeat_position(position: f32) -> f32 {
    1.0 - (modulo(position, 2.0) - 1.0).abs()
}

use super::Vec2;

/// Axis-aligned rectangle: top-left `origin` and non-negative `size`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_origin_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle spanning two opposite corners, given in any order.
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        let min = Vec2::new(a.x.min(b.x), a.y.min(b.y));
        let max = Vec2::new(a.x.max(b.x), a.y.max(b.y));
        Self::from_origin_size(min, max - min)
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    /// Hit test; the left and top edges are inside, the right and bottom are not.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        (self.origin.x..self.right()).contains(&p.x) && (self.origin.y..self.bottom()).contains(&p.y)
    }

    /// Same center, `dx` wider on each side and `dy` taller on each side.
    #[inline]
    pub fn expand(self, dx: f32, dy: f32) -> Self {
        Self::from_min_max(self.origin - Vec2::new(dx, dy), Vec2::new(self.right() + dx, self.bottom() + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR: Rect = Rect::new(10.0, 0.0, 200.0, 40.0);

    #[test]
    fn corners_in_any_order() {
        let a = Vec2::new(2.0, 8.0);
        let b = Vec2::new(12.0, 3.0);
        assert_eq!(Rect::from_min_max(a, b), Rect::new(2.0, 3.0, 10.0, 5.0));
        assert_eq!(Rect::from_min_max(b, a), Rect::from_min_max(a, b));
    }

    #[test]
    fn hit_test_is_half_open() {
        assert!(BAR.contains(Vec2::new(10.0, 0.0)));
        assert!(BAR.contains(Vec2::new(209.9, 39.9)));
        assert!(!BAR.contains(Vec2::new(210.0, 20.0)));
        assert!(!BAR.contains(Vec2::new(100.0, 40.0)));
        assert!(!BAR.contains(Vec2::new(9.0, 20.0)));
    }

    #[test]
    fn expand_keeps_center() {
        let outline = BAR.expand(1.0, 1.0);
        assert_eq!(outline, Rect::new(9.0, -1.0, 202.0, 42.0));
        assert_eq!(BAR.expand(0.0, 0.0), BAR);
    }
}

use core::ops::{Add, Mul};

/// Straight-alpha linear RGBA color.
///
/// Channels are typically in `[0, 1]` but are not clamped: interpolation and
/// host color pickers may produce values slightly outside the range, and
/// equality is exact per channel.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Per-channel linear interpolation, alpha included.
    ///
    /// `t = 0` yields `a`, `t = 1` yields `b`.
    #[inline]
    pub fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
        a * (1.0 - t) + b * t
    }

    /// Packs the color into bytes, clamping each channel to `[0, 1]` first.
    #[inline]
    pub fn to_u8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Rgba {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Rgba::new(r, g, b, a)
    }
}

impl Add for Rgba {
    type Output = Rgba;
    #[inline]
    fn add(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Mul<f32> for Rgba {
    type Output = Rgba;
    #[inline]
    fn mul(self, rhs: f32) -> Rgba {
        Rgba::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

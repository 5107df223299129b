use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use super::position::{mirror_clamp_position, mirror_repeat_position, repeat_position};

/// Error converting a host-supplied index or name into a mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("unknown {kind} index {index}")]
    UnknownIndex { kind: &'static str, index: usize },
    #[error("unknown {kind} name {name:?}")]
    UnknownName { kind: &'static str, name: String },
}

// ── WrapMode ──────────────────────────────────────────────────────────────

/// Maps an arbitrary query position into `[0, 1]` before sampling.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum WrapMode {
    /// Clamp to `[0, 1]`.
    #[default]
    Clamp,
    /// Fractional part of the position.
    Repeat,
    /// Absolute value, then clamp.
    MirrorClamp,
    /// Reflect back and forth with a period of 2.
    MirrorRepeat,
}

impl WrapMode {
    /// Combo order used by hosts.
    pub const ALL: [WrapMode; 4] = [
        WrapMode::Clamp,
        WrapMode::Repeat,
        WrapMode::MirrorClamp,
        WrapMode::MirrorRepeat,
    ];

    /// Remaps `position` into `[0, 1]`.
    #[inline]
    pub fn apply(self, position: f32) -> f32 {
        match self {
            WrapMode::Clamp => position.clamp(0.0, 1.0),
            WrapMode::Repeat => repeat_position(position),
            WrapMode::MirrorClamp => mirror_clamp_position(position),
            WrapMode::MirrorRepeat => mirror_repeat_position(position),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WrapMode::Clamp => "Clamp",
            WrapMode::Repeat => "Repeat",
            WrapMode::MirrorClamp => "Mirror Clamp",
            WrapMode::MirrorRepeat => "Mirror Repeat",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for WrapMode {
    type Error = ModeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        WrapMode::ALL
            .get(index)
            .copied()
            .ok_or(ModeError::UnknownIndex { kind: "wrap mode", index })
    }
}

impl FromStr for WrapMode {
    type Err = ModeError;

    /// Accepts display names and snake_case (`"Mirror Repeat"`, `"mirror_repeat"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "clamp" => Ok(WrapMode::Clamp),
            "repeat" => Ok(WrapMode::Repeat),
            "mirror_clamp" => Ok(WrapMode::MirrorClamp),
            "mirror_repeat" => Ok(WrapMode::MirrorRepeat),
            _ => Err(ModeError::UnknownName { kind: "wrap mode", name: s.to_owned() }),
        }
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Interpolation ─────────────────────────────────────────────────────────

/// How color varies between two neighboring marks.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Interpolation {
    /// Straight per-channel blend.
    #[default]
    Linear,
    /// Flat segments: each segment takes the color of the mark that ends it.
    Constant,
}

impl Interpolation {
    pub const ALL: [Interpolation; 2] = [Interpolation::Linear, Interpolation::Constant];

    pub fn name(self) -> &'static str {
        match self {
            Interpolation::Linear => "Linear",
            Interpolation::Constant => "Constant",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Interpolation {
    type Error = ModeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Interpolation::ALL
            .get(index)
            .copied()
            .ok_or(ModeError::UnknownIndex { kind: "interpolation", index })
    }
}

impl FromStr for Interpolation {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Interpolation::Linear),
            "constant" => Ok(Interpolation::Constant),
            _ => Err(ModeError::UnknownName { kind: "interpolation", name: s.to_owned() }),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_combo_order() {
        for mode in WrapMode::ALL {
            assert_eq!(WrapMode::try_from(mode.index()), Ok(mode));
        }
        assert_eq!(Interpolation::try_from(1), Ok(Interpolation::Constant));
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        assert_eq!(
            WrapMode::try_from(4),
            Err(ModeError::UnknownIndex { kind: "wrap mode", index: 4 })
        );
        assert!(Interpolation::try_from(2).is_err());
    }

    #[test]
    fn parses_display_and_snake_case_names() {
        assert_eq!("Mirror Repeat".parse::<WrapMode>(), Ok(WrapMode::MirrorRepeat));
        assert_eq!("mirror_clamp".parse::<WrapMode>(), Ok(WrapMode::MirrorClamp));
        assert_eq!(" constant ".parse::<Interpolation>(), Ok(Interpolation::Constant));
        assert!("wobble".parse::<WrapMode>().is_err());
    }

    #[test]
    fn error_message_names_the_mode_kind() {
        let err = "cubic".parse::<Interpolation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown interpolation name \"cubic\"");
    }

    #[test]
    fn clamp_apply() {
        assert_eq!(WrapMode::Clamp.apply(-2.0), 0.0);
        assert_eq!(WrapMode::Clamp.apply(0.3), 0.3);
        assert_eq!(WrapMode::Clamp.apply(9.0), 1.0);
    }
}

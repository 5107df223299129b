use huebar_engine::paint::{Interpolation, Rgba, WrapMode};

use super::settings::GradientFlags;

/// Host-drawn controls that sit under the gradient bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Add,
    Remove,
    ColorEdit,
    PositionSlider,
    InterpolationCombo,
    WrapModeCombo,
    RandomMode,
    Reset,
}

impl Control {
    pub const ALL: [Control; 8] = [
        Control::Add,
        Control::Remove,
        Control::ColorEdit,
        Control::PositionSlider,
        Control::InterpolationCombo,
        Control::WrapModeCombo,
        Control::RandomMode,
        Control::Reset,
    ];

    /// Flag that suppresses this control.
    pub fn flag(self) -> GradientFlags {
        match self {
            Control::Add => GradientFlags::NO_ADD_BUTTON,
            Control::Remove => GradientFlags::NO_REMOVE_BUTTON,
            Control::ColorEdit => GradientFlags::NO_COLOR_EDIT,
            Control::PositionSlider => GradientFlags::NO_POSITION_SLIDER,
            Control::InterpolationCombo => GradientFlags::NO_INTERPOLATION_COMBO,
            Control::WrapModeCombo => GradientFlags::NO_WRAP_MODE_COMBO,
            Control::RandomMode => GradientFlags::NO_RANDOM_MODE_CHANGE,
            Control::Reset => GradientFlags::NO_RESET_BUTTON,
        }
    }

    pub(super) fn help_text(self) -> Option<&'static str> {
        match self {
            Control::Add => Some("Add a mark here\nor click on the gradient to choose its position"),
            Control::Remove => Some("Select a mark to remove it\nor middle click on it\nor drag it down"),
            Control::RandomMode => Some("Add mark with random color"),
            _ => None,
        }
    }
}

/// What the host's controls reported this frame.
///
/// Immediate-mode hosts draw their buttons, combos and pickers and copy the
/// results here before calling `GradientWidget::show`. Entries for controls
/// suppressed by a flag are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Controls {
    /// "+" pressed: add a mark in the widest gap.
    pub add: bool,
    /// "-" pressed: delete the selected mark.
    pub remove: bool,
    /// "Reset" pressed.
    pub reset: bool,
    /// Inline color editor value for the selected mark.
    pub color: Option<Rgba>,
    /// Color from the picker popup. Not tied to any flag.
    pub picker_color: Option<Rgba>,
    /// Position slider value for the selected mark.
    pub position: Option<f32>,
    pub interpolation: Option<Interpolation>,
    pub wrap_mode: Option<WrapMode>,
    pub random_mode: Option<bool>,
}

impl Controls {
    pub fn none() -> Self {
        Self::default()
    }
}

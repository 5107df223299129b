use bitflags::bitflags;

bitflags! {
    /// Parts of the editor a host can switch off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GradientFlags: u32 {
        const NO_TOOLTIP = 1 << 0;
        const NO_LABEL = 1 << 1;
        const NO_BORDER = 1 << 2;
        const NO_ADD_BUTTON = 1 << 3;
        const NO_REMOVE_BUTTON = 1 << 4;
        const NO_POSITION_SLIDER = 1 << 5;
        const NO_COLOR_EDIT = 1 << 6;
        const NO_RESET_BUTTON = 1 << 7;
        const NO_INTERPOLATION_COMBO = 1 << 8;
        const NO_WRAP_MODE_COMBO = 1 << 9;
        const NO_RANDOM_MODE_CHANGE = 1 << 10;
        /// Dragging a mark below the bar no longer deletes it.
        const NO_DRAG_DOWN_TO_DELETE = 1 << 11;

        const NO_COMBO = Self::NO_INTERPOLATION_COMBO.bits() | Self::NO_WRAP_MODE_COMBO.bits();
        const NO_MARK_OPTIONS = Self::NO_ADD_BUTTON.bits()
            | Self::NO_REMOVE_BUTTON.bits()
            | Self::NO_POSITION_SLIDER.bits()
            | Self::NO_COLOR_EDIT.bits();
        const NO_OPTIONS = Self::NO_MARK_OPTIONS.bits()
            | Self::NO_COMBO.bits()
            | Self::NO_RANDOM_MODE_CHANGE.bits()
            | Self::NO_RESET_BUTTON.bits();
    }
}

/// Editor configuration. All lengths are logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSettings {
    pub flags: GradientFlags,
    /// Height of the gradient bar.
    pub editor_height: f32,
    /// How far below the bar a dragged mark must go before it is hidden for deletion.
    pub delete_drag_threshold: f32,
    /// Space kept on both sides of the bar.
    pub horizontal_margin: f32,
    /// Height of one row of host-drawn controls under the bar.
    pub control_row_height: f32,
    /// Height of the label line.
    pub label_height: f32,
}

impl Default for GradientSettings {
    fn default() -> Self {
        Self {
            flags: GradientFlags::empty(),
            editor_height: 40.0,
            delete_drag_threshold: 100.0,
            horizontal_margin: 10.0,
            control_row_height: 20.0,
            label_height: 16.0,
        }
    }
}

impl GradientSettings {
    #[inline]
    pub fn has(&self, flag: GradientFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Number of control rows the host lays out under the bar.
    ///
    /// Row 1: add / remove / color edit / position slider.
    /// Row 2: interpolation and wrap combos, random mode.
    /// Row 3: reset.
    pub fn control_rows(&self) -> u32 {
        let mut rows = 0;
        if !self.flags.contains(GradientFlags::NO_MARK_OPTIONS) {
            rows += 1;
        }
        if !self.flags.contains(GradientFlags::NO_COMBO | GradientFlags::NO_RANDOM_MODE_CHANGE) {
            rows += 1;
        }
        if !self.has(GradientFlags::NO_RESET_BUTTON) {
            rows += 1;
        }
        rows
    }
}

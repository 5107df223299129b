/// Thresholds used to derive double-clicks and drags from raw pointer events.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InputConfig {
    /// Maximum delay between two clicks of a double-click, in seconds.
    pub double_click_time: f64,
    /// Maximum pointer travel between two clicks of a double-click, in logical pixels.
    pub double_click_distance: f32,
    /// Pointer travel from the press origin before a held button counts as dragging.
    pub drag_threshold: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            double_click_time: 0.30,
            double_click_distance: 6.0,
            drag_threshold: 6.0,
        }
    }
}

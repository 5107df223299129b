use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Transitions recorded during one frame.
///
/// Held keys, held buttons and the pointer live on `InputState`; this only
/// holds what changed since the last `begin_frame`.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Events in arrival order.
    pub events: Vec<InputEvent>,
    /// Keys that went down, auto-repeats included.
    pub keys_pressed: HashSet<Key>,
    pub buttons_pressed: HashSet<MouseButton>,
    /// Subset of `buttons_pressed` whose press completed a double-click.
    pub buttons_double_clicked: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
        self.buttons_double_clicked.clear();
        self.buttons_released.clear();
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn double_clicked(&self, button: MouseButton) -> bool {
        self.buttons_double_clicked.contains(&button)
    }

    pub fn released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }
}

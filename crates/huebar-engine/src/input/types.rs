use crate::coords::Vec2;

/// Keys the editor reacts to.
///
/// Hosts map every other key to `Key::Other` with a stable platform code, so
/// held-key bookkeeping still works for them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Other(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Direction of a key or button transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Pressed,
    Released,
}

/// Raw event fed by the host, in logical pixels with +Y down.
///
/// Button events carry the pointer position so a press is located even when
/// no move preceded it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved { pos: Vec2 },
    PointerButton { button: MouseButton, action: Action, pos: Vec2 },
    /// Pointer left the host surface.
    PointerLeft,
    Key {
        key: Key,
        action: Action,
        /// Auto-repeat of a held key.
        repeat: bool,
    },
    /// Host surface gained or lost focus.
    Focused(bool),
}

impl InputEvent {
    pub fn moved(x: f32, y: f32) -> Self {
        InputEvent::PointerMoved { pos: Vec2::new(x, y) }
    }

    pub fn press(button: MouseButton, x: f32, y: f32) -> Self {
        InputEvent::PointerButton { button, action: Action::Pressed, pos: Vec2::new(x, y) }
    }

    pub fn release(button: MouseButton, x: f32, y: f32) -> Self {
        InputEvent::PointerButton { button, action: Action::Released, pos: Vec2::new(x, y) }
    }

    pub fn key_pressed(key: Key) -> Self {
        InputEvent::Key { key, action: Action::Pressed, repeat: false }
    }

    pub fn key_released(key: Key) -> Self {
        InputEvent::Key { key, action: Action::Released, repeat: false }
    }
}

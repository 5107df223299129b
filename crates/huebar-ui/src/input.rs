use huebar_engine::coords::Vec2;
use huebar_engine::input::{InputFrame, InputState, Key, MouseButton};

// ── ButtonInput ───────────────────────────────────────────────────────────

/// One mouse button as seen by a widget during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonInput {
    /// Held this frame.
    pub down: bool,
    /// Went down this frame.
    pub clicked: bool,
    /// Went down this frame as the second click of a double-click.
    pub double_clicked: bool,
    /// Went up this frame.
    pub released: bool,
    /// Held and moved past the drag threshold since it went down.
    pub dragging: bool,
}

impl ButtonInput {
    pub const IDLE: ButtonInput = ButtonInput {
        down: false,
        clicked: false,
        double_clicked: false,
        released: false,
        dragging: false,
    };
    pub const HELD: ButtonInput = ButtonInput { down: true, ..Self::IDLE };
    pub const CLICK: ButtonInput = ButtonInput { down: true, clicked: true, ..Self::IDLE };
    pub const DOUBLE_CLICK: ButtonInput =
        ButtonInput { down: true, clicked: true, double_clicked: true, ..Self::IDLE };
    pub const DRAG: ButtonInput = ButtonInput { down: true, dragging: true, ..Self::IDLE };
    pub const RELEASE: ButtonInput = ButtonInput { released: true, ..Self::IDLE };
}

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Build it from the engine's `InputState` / `InputFrame` each frame, or
/// literally when the host polls input some other way.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Cursor position in logical pixels; `None` while the pointer is outside
    /// the host surface.
    pub mouse_pos: Option<Vec2>,
    /// Primary (left) button.
    pub primary: ButtonInput,
    /// Middle button.
    pub middle: ButtonInput,
    /// Named keys pressed this frame (Delete, Backspace, …).
    pub keys_pressed: Vec<Key>,
}

impl UiInput {
    /// Pointer at `(x, y)` with no button or key activity.
    pub fn at(x: f32, y: f32) -> Self {
        Self { mouse_pos: Some(Vec2::new(x, y)), ..Self::default() }
    }

    pub fn with_primary(mut self, button: ButtonInput) -> Self {
        self.primary = button;
        self
    }

    pub fn with_middle(mut self, button: ButtonInput) -> Self {
        self.middle = button;
        self
    }

    pub fn with_key(mut self, key: Key) -> Self {
        self.keys_pressed.push(key);
        self
    }

    pub fn from_engine(state: &InputState, frame: &InputFrame) -> Self {
        let button = |b: MouseButton| ButtonInput {
            down: state.button_down(b),
            clicked: frame.pressed(b),
            double_clicked: frame.double_clicked(b),
            released: frame.released(b),
            dragging: state.is_dragging(b),
        };
        Self {
            mouse_pos: state.pointer_pos,
            primary: button(MouseButton::Left),
            middle: button(MouseButton::Middle),
            keys_pressed: frame.keys_pressed.iter().copied().collect(),
        }
    }

    /// State of `button`; buttons the editor does not track read as idle.
    pub fn button(&self, button: MouseButton) -> ButtonInput {
        match button {
            MouseButton::Left => self.primary,
            MouseButton::Middle => self.middle,
            _ => ButtonInput::IDLE,
        }
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}

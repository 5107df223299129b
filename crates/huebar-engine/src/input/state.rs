use std::collections::{HashMap, HashSet};

use crate::coords::Vec2;

use super::config::InputConfig;
use super::frame::InputFrame;
use super::types::{Action, InputEvent, Key, MouseButton};

/// A held button: where it went down and how far the pointer has travelled since.
#[derive(Debug, Copy, Clone)]
struct Press {
    origin: Vec2,
    max_distance: f32,
}

/// The last single click of a button, kept to recognise double-clicks.
#[derive(Debug, Copy, Clone)]
struct Click {
    time: f64,
    pos: Vec2,
}

/// Input state carried across frames: held keys and buttons, pointer position,
/// and the press history that turns raw events into clicks and drags.
#[derive(Debug, Default)]
pub struct InputState {
    pub config: InputConfig,
    pub focused: bool,
    /// Last known pointer position; `None` once the pointer leaves the surface.
    pub pointer_pos: Option<Vec2>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,

    /// Seconds accumulated through `begin_frame`.
    time: f64,
    presses: HashMap<MouseButton, Press>,
    last_click: HashMap<MouseButton, Click>,
}

impl InputState {
    pub fn new(config: InputConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Starts a new frame: clears `frame` and advances the clock by `dt` seconds.
    pub fn begin_frame(&mut self, frame: &mut InputFrame, dt: f32) {
        frame.clear();
        self.time += f64::from(dt.max(0.0));
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Folds `ev` into the held state and records its transitions in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::PointerMoved { pos } => self.track_pointer(pos),
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::PointerButton { button, action, pos } => {
                self.track_pointer(pos);
                self.on_button(frame, button, action, pos);
            }
            InputEvent::Key { key, action, repeat } => match action {
                Action::Pressed => {
                    if self.keys_down.insert(key) || repeat {
                        frame.keys_pressed.insert(key);
                    }
                }
                Action::Released => {
                    self.keys_down.remove(&key);
                }
            },
            InputEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Nothing held survives a focus loss; the matching releases never arrive.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                    self.presses.clear();
                }
            }
        }
        frame.events.push(ev);
    }

    fn on_button(&mut self, frame: &mut InputFrame, button: MouseButton, action: Action, pos: Vec2) {
        match action {
            Action::Pressed => {
                if !self.buttons_down.insert(button) {
                    return;
                }
                frame.buttons_pressed.insert(button);
                if self.is_double_click(button, pos) {
                    // A third quick click starts a new pair.
                    frame.buttons_double_clicked.insert(button);
                    self.last_click.remove(&button);
                } else {
                    self.last_click.insert(button, Click { time: self.time, pos });
                }
                self.presses.insert(button, Press { origin: pos, max_distance: 0.0 });
            }
            Action::Released => {
                if self.buttons_down.remove(&button) {
                    frame.buttons_released.insert(button);
                }
                self.presses.remove(&button);
            }
        }
    }

    fn track_pointer(&mut self, pos: Vec2) {
        self.pointer_pos = Some(pos);
        for press in self.presses.values_mut() {
            press.max_distance = press.max_distance.max((pos - press.origin).length());
        }
    }

    fn is_double_click(&self, button: MouseButton, pos: Vec2) -> bool {
        self.last_click.get(&button).is_some_and(|click| {
            self.time - click.time <= self.config.double_click_time
                && (pos - click.pos).length() <= self.config.double_click_distance
        })
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// True while `button` is held and the pointer has, at some point since the
    /// press, been at least the drag threshold away from where it went down.
    pub fn is_dragging(&self, button: MouseButton) -> bool {
        self.button_down(button)
            && self
                .presses
                .get(&button)
                .is_some_and(|p| p.max_distance >= self.config.drag_threshold)
    }

    /// Where the current press of `button` started, if it is held.
    pub fn press_origin(&self, button: MouseButton) -> Option<Vec2> {
        self.presses.get(&button).map(|p| p.origin)
    }
}

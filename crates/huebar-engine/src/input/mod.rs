//! Pointer and keyboard input, independent of any windowing library.
//!
//! Each frame the host calls [`InputState::begin_frame`], feeds its events
//! through [`InputState::apply_event`], and reads clicks, double-clicks and
//! drags back from the state and the [`InputFrame`].

mod config;
mod frame;
mod state;
mod types;

pub use config::InputConfig;
pub use frame::InputFrame;
pub use state::InputState;
pub use types::{Action, InputEvent, Key, MouseButton};

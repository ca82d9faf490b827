//! Keyboard input.
//!
//! Winit types stay behind [`platform`]. The runtime feeds translated
//! [`InputEvent`]s to [`InputState::apply_event`], which records the press and
//! release edges of the current frame in [`InputFrame`].

mod frame;
mod keys;
pub mod platform;
mod state;

pub use frame::InputFrame;
pub use keys::{Key, UnknownKeyName};
pub use state::{InputEvent, InputState, KeyState};

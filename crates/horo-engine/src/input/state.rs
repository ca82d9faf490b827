use std::collections::HashSet;

use super::frame::InputFrame;
use super::keys::Key;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-independent input event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputEvent {
    Key { key: Key, state: KeyState, repeat: bool },
    Focus(bool),
}

/// Held keys and window focus.
#[derive(Debug, Default)]
pub struct InputState {
    focused: bool,
    held: HashSet<Key>,
}

impl InputState {
    /// Updates held keys and records edges in `frame`.
    ///
    /// A key produces one press edge and one release edge however long it is
    /// held. Releases of keys that went down while unfocused are dropped.
    pub fn apply_event(&mut self, frame: &mut InputFrame, event: InputEvent) {
        match event {
            InputEvent::Focus(focused) => {
                self.focused = focused;
                if !focused {
                    self.held.clear();
                }
            }
            InputEvent::Key { repeat: true, .. } => {}
            InputEvent::Key { key, state: KeyState::Pressed, .. } => {
                if self.held.insert(key) {
                    frame.record_press(key);
                }
            }
            InputEvent::Key { key, state: KeyState::Released, .. } => {
                if self.held.remove(&key) {
                    frame.record_release(key);
                }
            }
        }
    }

    #[inline]
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    #[inline]
    pub fn focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    #[test]
    fn held_key_gives_one_edge_each_way() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::Space, KeyState::Pressed, false));
        st.apply_event(&mut fr, key(Key::Space, KeyState::Pressed, true));
        st.apply_event(&mut fr, key(Key::Space, KeyState::Pressed, true));
        assert!(fr.pressed(Key::Space));
        assert!(!fr.released(Key::Space));
        assert!(st.is_held(Key::Space));

        fr.clear();
        st.apply_event(&mut fr, key(Key::Space, KeyState::Released, false));
        assert!(fr.released(Key::Space));
        assert!(!fr.pressed(Key::Space));
        assert!(!st.is_held(Key::Space));
    }

    #[test]
    fn tap_within_one_frame_records_both_edges() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::Char('t'), KeyState::Pressed, false));
        st.apply_event(&mut fr, key(Key::Char('t'), KeyState::Released, false));
        assert!(fr.pressed(Key::Char('t')) && fr.released(Key::Char('t')));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::Enter, KeyState::Released, false));
        assert!(fr.is_empty());
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, InputEvent::Focus(true));
        st.apply_event(&mut fr, key(Key::Space, KeyState::Pressed, false));
        st.apply_event(&mut fr, InputEvent::Focus(false));
        assert!(!st.focused());
        assert!(!st.is_held(Key::Space));

        fr.clear();
        st.apply_event(&mut fr, key(Key::Space, KeyState::Released, false));
        assert!(!fr.released(Key::Space));
    }
}

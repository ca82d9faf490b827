use super::keys::Key;

/// Key edges observed since the previous frame.
///
/// The runtime clears it after every `on_frame` call.
#[derive(Debug, Default, Clone)]
pub struct InputFrame {
    pressed: Vec<Key>,
    released: Vec<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty() && self.released.is_empty()
    }

    /// True if `key` went down this frame.
    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// True if `key` came up this frame.
    #[inline]
    pub fn released(&self, key: Key) -> bool {
        self.released.contains(&key)
    }

    pub(crate) fn record_press(&mut self, key: Key) {
        if !self.pressed.contains(&key) {
            self.pressed.push(key);
        }
    }

    pub(crate) fn record_release(&mut self, key: Key) {
        if !self.released.contains(&key) {
            self.released.push(key);
        }
    }
}

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputEvent, Key, KeyState};

/// Translates a winit window event, or `None` if input does not track it.
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(focused) => Some(InputEvent::Focus(*focused)),
        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };
            Some(InputEvent::Key {
                key: map_key(event.physical_key, event.logical_key.to_text()),
                state,
                repeat: event.repeat,
            })
        }
        _ => None,
    }
}

/// Named keys come from the physical code; everything else from the text it
/// would type, so `Char` follows the active layout.
fn map_key(physical: PhysicalKey, text: Option<&str>) -> Key {
    let code = match physical {
        PhysicalKey::Code(code) => code,
        PhysicalKey::Unidentified(_) => return Key::Other(0),
    };

    match code {
        KeyCode::Space => return Key::Space,
        KeyCode::Enter | KeyCode::NumpadEnter => return Key::Enter,
        KeyCode::Escape => return Key::Escape,
        KeyCode::Tab => return Key::Tab,
        KeyCode::Backspace => return Key::Backspace,
        _ => {}
    }
    if let Some(n) = function_number(code) {
        return Key::Function(n);
    }

    let mut chars = text.unwrap_or_default().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphanumeric() => Key::Char(c.to_ascii_lowercase()),
        _ => Key::Other(code as u32),
    }
}

fn function_number(code: KeyCode) -> Option<u8> {
    const KEYS: [KeyCode; 12] = [
        KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4,
        KeyCode::F5, KeyCode::F6, KeyCode::F7, KeyCode::F8,
        KeyCode::F9, KeyCode::F10, KeyCode::F11, KeyCode::F12,
    ];
    KEYS.iter().position(|k| *k == code).map(|i| i as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_ignore_text() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Space), Some(" ")), Key::Space);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadEnter), Some("\r")), Key::Enter);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::F5), None), Key::Function(5));
    }

    #[test]
    fn printable_keys_use_layout_text() {
        // AZERTY: the physical Q position types 'a'.
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyQ), Some("a")), Key::Char('a'));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyT), Some("T")), Key::Char('t'));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit7), Some("7")), Key::Char('7'));
    }

    #[test]
    fn keys_without_text_keep_their_code() {
        let key = map_key(PhysicalKey::Code(KeyCode::NumLock), None);
        assert_eq!(key, Key::Other(KeyCode::NumLock as u32));
    }
}

use std::fmt;
use std::str::FromStr;

/// Keyboard key a clock binding can refer to.
///
/// Letters and digits are `Char` in lowercase. Keys with no name here keep
/// their platform code in `Other`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Char(char),
    /// Function key `F1..=F12`.
    Function(u8),
    Other(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Space => f.write_str("space"),
            Key::Enter => f.write_str("enter"),
            Key::Escape => f.write_str("escape"),
            Key::Tab => f.write_str("tab"),
            Key::Backspace => f.write_str("backspace"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Function(n) => write!(f, "f{n}"),
            Key::Other(code) => write!(f, "key#{code}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyName(pub String);

impl fmt::Display for UnknownKeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key name `{}`", self.0)
    }
}

impl std::error::Error for UnknownKeyName {}

/// Parses the names produced by `Display`, case-insensitively.
///
/// `key#N` is not accepted; platform codes are not stable across systems.
impl FromStr for Key {
    type Err = UnknownKeyName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let key = match name.as_str() {
            "space" => Key::Space,
            "enter" | "return" => Key::Enter,
            "escape" | "esc" => Key::Escape,
            "tab" => Key::Tab,
            "backspace" => Key::Backspace,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphanumeric() => Key::Char(c),
                    (Some('f'), Some(_)) => match name[1..].parse::<u8>() {
                        Ok(n @ 1..=12) => Key::Function(n),
                        _ => return Err(UnknownKeyName(s.to_owned())),
                    },
                    _ => return Err(UnknownKeyName(s.to_owned())),
                }
            }
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for key in [Key::Space, Key::Enter, Key::Escape, Key::Tab, Key::Char('t'), Key::Char('5'), Key::Function(11)] {
            assert_eq!(key.to_string().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("SPACE".parse::<Key>(), Ok(Key::Space));
        assert_eq!(" T ".parse::<Key>(), Ok(Key::Char('t')));
        assert_eq!("Esc".parse::<Key>(), Ok(Key::Escape));
    }

    #[test]
    fn rejects_unknown_names() {
        for bad in ["", "f0", "f13", "fx", "spacebar", "?", "key#12"] {
            assert!(bad.parse::<Key>().is_err(), "accepted {bad:?}");
        }
    }
}

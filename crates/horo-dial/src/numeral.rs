//! Dial numerals.

use std::fmt;

/// How the twelve hour numerals are written.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DisplayMode {
    /// Arabic digits: 1, 2, ... 12.
    Numerals,
    /// Roman numerals: I, II, ... XII.
    #[default]
    Roman,
}

impl DisplayMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Numerals => DisplayMode::Roman,
            DisplayMode::Roman => DisplayMode::Numerals,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayMode::Numerals => "numerals",
            DisplayMode::Roman => "roman",
        })
    }
}

// Largest value first; the greedy walk below depends on this order.
const ROMAN_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Subtractive Roman encoding of `value`. Zero encodes to an empty string.
pub fn to_roman(value: u32) -> String {
    let mut out = String::new();
    let mut remaining = value;

    for &(amount, symbol) in ROMAN_TABLE.iter() {
        while remaining >= amount {
            out.push_str(symbol);
            remaining -= amount;
        }
    }

    out
}

/// Formats an hour numeral for display in `mode`.
pub fn format_numeral(value: u32, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Numerals => value.to_string(),
        DisplayMode::Roman => to_roman(value),
    }
}

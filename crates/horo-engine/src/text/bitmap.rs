use horo_dial::TextExtent;

/// Edge length of one glyph cell at scale 1.
pub const GLYPH_SIZE: i32 = 8;

// Rows top to bottom, most significant bit leftmost.
const BOX: [u8; 8] = [0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

fn glyph(c: char) -> [u8; 8] {
    match c.to_ascii_uppercase() {
        ' ' => [0; 8],
        '0' => [0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00],
        '1' => [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00],
        '2' => [0x3C, 0x66, 0x06, 0x0C, 0x30, 0x60, 0x7E, 0x00],
        '3' => [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00],
        '4' => [0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00],
        '5' => [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00],
        '6' => [0x3C, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x3C, 0x00],
        '7' => [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00],
        '8' => [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00],
        '9' => [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00],
        ':' => [0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00],
        'C' => [0x3C, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3C, 0x00],
        'D' => [0x78, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0x78, 0x00],
        'I' => [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
        'L' => [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00],
        'M' => [0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x00],
        'V' => [0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00],
        'X' => [0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x00],
        _ => BOX,
    }
}

/// Fixed-cell 8x8 font covering digits and Roman numeral letters.
///
/// Characters outside that set draw as a hollow box. Each font pixel is drawn
/// as a `scale` x `scale` block.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BitmapFont {
    scale: i32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

impl BitmapFont {
    /// Creates a font drawn at `scale` (at least 1).
    pub fn new(scale: u32) -> Self {
        Self { scale: scale.clamp(1, 64) as i32 }
    }

    #[inline]
    pub fn cell(&self) -> i32 {
        GLYPH_SIZE * self.scale
    }

    pub fn measure(&self, text: &str) -> TextExtent {
        let chars = text.chars().count() as i32;
        TextExtent::new(chars * self.cell(), self.cell())
    }

    pub fn rasterize(&self, text: &str, mut plot: impl FnMut(i32, i32, f32)) {
        let s = self.scale;
        for (i, c) in text.chars().enumerate() {
            let left = i as i32 * self.cell();
            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits & (0x80u8 >> col) == 0 {
                        continue;
                    }
                    let (x0, y0) = (left + col * s, row as i32 * s);
                    for dy in 0..s {
                        for dx in 0..s {
                            plot(x0 + dx, y0 + dy, 1.0);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(font: &BitmapFont, text: &str) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        font.rasterize(text, |x, y, _| out.push((x, y)));
        out
    }

    #[test]
    fn measures_fixed_cells() {
        let f = BitmapFont::default();
        assert_eq!(f.measure("VIII"), TextExtent::new(32, 8));
        assert_eq!(BitmapFont::new(2).measure("12"), TextExtent::new(32, 16));
        assert_eq!(BitmapFont::new(0).cell(), 8);
    }

    #[test]
    fn roman_letters_have_glyphs() {
        for c in "IVXLCDM".chars() {
            assert_ne!(glyph(c), BOX, "{c} falls back to the box glyph");
        }
        for c in '0'..='9' {
            assert_ne!(glyph(c), BOX, "{c} falls back to the box glyph");
        }
    }

    #[test]
    fn unknown_character_draws_box() {
        assert_eq!(glyph('?'), BOX);
        assert_eq!(glyph('x'), glyph('X'));
    }

    #[test]
    fn second_character_is_offset_by_one_cell() {
        let f = BitmapFont::default();
        let one = pixels(&f, "I");
        let two = pixels(&f, "II");
        assert_eq!(two.len(), one.len() * 2);
        assert!(two.iter().any(|&(x, _)| x >= 8));
        assert!(two.iter().all(|&(x, y)| (0..16).contains(&x) && (0..8).contains(&y)));
    }

    #[test]
    fn scale_multiplies_pixel_count() {
        let n1 = pixels(&BitmapFont::new(1), "X").len();
        let n3 = pixels(&BitmapFont::new(3), "X").len();
        assert_eq!(n3, n1 * 9);
    }

    #[test]
    fn space_draws_nothing() {
        assert!(pixels(&BitmapFont::default(), " ").is_empty());
    }
}

use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use horo_dial::TextExtent;

/// Error returned by [`OutlineFont::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// TrueType/OpenType font rendered at a fixed pixel size.
pub struct OutlineFont {
    font: fontdue::Font,
    px: f32,
}

impl OutlineFont {
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self, FontLoadError> {
        if !(px.is_finite() && px > 0.0) {
            return Err(FontLoadError(format!("invalid pixel size {px}")));
        }
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font, px })
    }

    #[inline]
    pub fn px(&self) -> f32 {
        self.px
    }

    fn layout(&self, text: &str) -> Layout<()> {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.font], &TextStyle::new(text, self.px, 0));
        layout
    }

    /// Advance width of `text` by line height, both rounded up.
    pub fn measure(&self, text: &str) -> TextExtent {
        let height = self
            .font
            .horizontal_line_metrics(self.px)
            .map_or(self.px, |m| m.ascent - m.descent);

        let layout = self.layout(text);
        let width = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = self.font.metrics_indexed(g.key.glyph_index, self.px);
                g.x - m.xmin as f32 + m.advance_width
            })
            .fold(0.0f32, f32::max);

        TextExtent::new(width.ceil() as i32, height.ceil() as i32)
    }

    pub fn rasterize(&self, text: &str, mut plot: impl FnMut(i32, i32, f32)) {
        let layout = self.layout(text);
        for g in layout.glyphs() {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }
            let (metrics, bitmap) = self.font.rasterize_config(g.key);
            let (x0, y0) = (g.x.round() as i32, g.y.round() as i32);

            for (i, &a) in bitmap.iter().enumerate() {
                if a == 0 {
                    continue;
                }
                let dx = (i % metrics.width) as i32;
                let dy = (i / metrics.width) as i32;
                plot(x0 + dx, y0 + dy, f32::from(a) / 255.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = OutlineFont::from_bytes(b"not a font", 12.0).err().unwrap();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn non_positive_size_is_rejected() {
        assert!(OutlineFont::from_bytes(&[], 0.0).is_err());
    }
}

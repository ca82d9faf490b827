//! Text rasterization for the canvas.
//!
//! [`GlyphSet`] is what the canvas draws text with: the built-in 8x8 bitmap
//! font by default, or an outline font loaded through `fontdue`.

mod bitmap;
mod font;

use std::path::Path;

use anyhow::{Context, Result};
use horo_dial::TextExtent;

pub use bitmap::{BitmapFont, GLYPH_SIZE};
pub use font::{FontLoadError, OutlineFont};

/// Glyph source used by [`crate::raster::Canvas`].
pub enum GlyphSet {
    Bitmap(BitmapFont),
    Outline(OutlineFont),
}

impl Default for GlyphSet {
    fn default() -> Self {
        GlyphSet::Bitmap(BitmapFont::default())
    }
}

impl GlyphSet {
    /// Loads a TrueType/OpenType font file rendered at `px` pixels.
    pub fn from_font_file(path: &Path, px: f32) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read font file {}", path.display()))?;
        let font = OutlineFont::from_bytes(&bytes, px)
            .with_context(|| format!("failed to parse font file {}", path.display()))?;
        log::info!("loaded font {} at {px}px", path.display());
        Ok(GlyphSet::Outline(font))
    }

    pub fn measure(&self, text: &str) -> TextExtent {
        match self {
            GlyphSet::Bitmap(f) => f.measure(text),
            GlyphSet::Outline(f) => f.measure(text),
        }
    }

    /// Calls `plot(dx, dy, coverage)` for every covered pixel of `text`.
    ///
    /// Offsets are relative to the top-left corner of the text box; coverage
    /// is in `(0, 1]`.
    pub fn rasterize(&self, text: &str, plot: impl FnMut(i32, i32, f32)) {
        match self {
            GlyphSet::Bitmap(f) => f.rasterize(text, plot),
            GlyphSet::Outline(f) => f.rasterize(text, plot),
        }
    }
}

impl std::fmt::Debug for GlyphSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphSet::Bitmap(b) => f.debug_tuple("Bitmap").field(b).finish(),
            GlyphSet::Outline(o) => f.debug_tuple("Outline").field(&o.px()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bitmap_8x8() {
        let g = GlyphSet::default();
        assert_eq!(g.measure("XII"), TextExtent::new(24, 8));
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let err = GlyphSet::from_font_file(Path::new("/nonexistent/horo.ttf"), 12.0).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read font file"));
    }
}

//! Drawing capability consumed by the dial renderer.
//!
//! Any host that can draw lines, circle outlines and text, measure text, and
//! clear itself can display a dial. Coordinates are integer pixels.

use crate::geometry::Point;

/// Straight-alpha sRGB color, one byte per channel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREY: Color = Color::rgb(192, 192, 192);
    pub const DARK_GREY: Color = Color::rgb(128, 128, 128);
    pub const VERY_DARK_GREY: Color = Color::rgb(64, 64, 64);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const DARK_RED: Color = Color::rgb(128, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Mixes `self` over `dst` with `coverage` in `[0, 1]` scaled by `self.a`.
    ///
    /// The result is opaque whenever `dst` is.
    pub fn blend_over(self, dst: Color, coverage: f32) -> Color {
        let t = (coverage.clamp(0.0, 1.0) * f32::from(self.a) / 255.0).clamp(0.0, 1.0);
        let mix = |s: u8, d: u8| -> u8 {
            (f32::from(s) * t + f32::from(d) * (1.0 - t)).round() as u8
        };
        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: dst.a.max((t * 255.0).round() as u8),
        }
    }
}

/// Width and height of a laid-out string, in pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
}

impl TextExtent {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Host drawing surface.
///
/// Text is anchored at its top-left corner; callers center it themselves with
/// [`Surface::measure_text`]. Drawing outside the surface must be clipped,
/// never panic.
pub trait Surface {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Draws a one pixel wide line, both endpoints included.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Draws a one pixel wide circle outline.
    fn draw_circle(&mut self, center: Point, radius: i32, color: Color);

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, color: Color);

    /// Extent `text` would cover if drawn with [`Surface::draw_text`].
    fn measure_text(&self, text: &str) -> TextExtent;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self, color: Color) {
        (**self).clear(color)
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        (**self).draw_line(from, to, color)
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) {
        (**self).draw_circle(center, radius, color)
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        (**self).draw_text(origin, text, color)
    }

    fn measure_text(&self, text: &str) -> TextExtent {
        (**self).measure_text(text)
    }
}

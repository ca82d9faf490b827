use horo_dial::{Color, Point, Surface, TextExtent};

use crate::text::GlyphSet;

/// Fixed-size RGBA8 pixel buffer implementing [`Surface`].
///
/// Pixels are stored row-major in straight sRGB, ready for upload to an
/// `Rgba8UnormSrgb` texture. All drawing is clipped to the canvas.
#[derive(Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    glyphs: GlyphSet,
}

impl Canvas {
    /// Creates a black canvas using the built-in bitmap font.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_glyphs(width, height, GlyphSet::default())
    }

    pub fn with_glyphs(width: u32, height: u32, glyphs: GlyphSet) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.to_array(); width as usize * height as usize],
            glyphs,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, `4 * width` per row.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Color at `(x, y)`, `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| {
            let [r, g, b, a] = self.pixels[i];
            Color::rgba(r, g, b, a)
        })
    }

    /// Writes one pixel; out-of-bounds writes are dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.to_array();
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if let Some(i) = self.index(x, y) {
            let [r, g, b, a] = self.pixels[i];
            self.pixels[i] = color.blend_over(Color::rgba(r, g, b, a), coverage).to_array();
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl Surface for Canvas {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_array());
    }

    /// Bresenham line, both endpoints included.
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };

        let (mut x, mut y) = (from.x, from.y);
        let mut err = dx + dy;
        loop {
            self.set_pixel(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Midpoint circle outline. Radius 0 plots the center; negative draws nothing.
    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        if radius == 0 {
            self.set_pixel(center.x, center.y, color);
            return;
        }

        let (cx, cy) = (center.x, center.y);
        let (mut x, mut y) = (0, radius);
        let mut d = 3 - 2 * radius;
        while y >= x {
            for (px, py) in [
                (cx + x, cy - y),
                (cx + y, cy - x),
                (cx + y, cy + x),
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx - y, cy + x),
                (cx - y, cy - x),
                (cx - x, cy - y),
            ] {
                self.set_pixel(px, py, color);
            }

            if d < 0 {
                d += 4 * x + 6;
            } else {
                d += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        // Rasterize into a scratch list first; the glyph set borrows `self`.
        let mut covered = Vec::new();
        self.glyphs.rasterize(text, |dx, dy, coverage| covered.push((dx, dy, coverage)));
        for (dx, dy, coverage) in covered {
            self.blend_pixel(origin.x + dx, origin.y + dy, color, coverage);
        }
    }

    fn measure_text(&self, text: &str) -> TextExtent {
        self.glyphs.measure(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horo_dial::{ClockGeometry, ClockRenderer, ClockTime, DisplayMode};

    fn lit(canvas: &Canvas) -> usize {
        (0..canvas.height() as i32)
            .flat_map(|y| (0..canvas.width() as i32).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) != Some(Color::BLACK))
            .count()
    }

    // ── pixels ────────────────────────────────────────────────────────────

    #[test]
    fn new_canvas_is_black() {
        let c = Canvas::new(4, 3);
        assert_eq!(c.as_bytes().len(), 4 * 4 * 3);
        assert_eq!(c.pixel(3, 2), Some(Color::BLACK));
        assert_eq!(c.pixel(4, 0), None);
        assert_eq!(c.pixel(-1, 0), None);
    }

    #[test]
    fn bytes_are_row_major_rgba() {
        let mut c = Canvas::new(2, 2);
        c.set_pixel(1, 1, Color::RED);
        assert_eq!(&c.as_bytes()[12..16], &[255, 0, 0, 255]);
    }

    #[test]
    fn out_of_bounds_drawing_is_clipped() {
        let mut c = Canvas::new(8, 8);
        c.draw_line(Point::new(-20, -20), Point::new(30, 30), Color::WHITE);
        c.draw_circle(Point::new(100, 100), 5, Color::WHITE);
        c.draw_text(Point::new(-4, 6), "XII", Color::WHITE);
        assert_eq!(c.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(c.pixel(7, 7), Some(Color::WHITE));
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn line_includes_both_endpoints() {
        let mut c = Canvas::new(16, 16);
        c.draw_line(Point::new(2, 3), Point::new(11, 7), Color::WHITE);
        assert_eq!(c.pixel(2, 3), Some(Color::WHITE));
        assert_eq!(c.pixel(11, 7), Some(Color::WHITE));
        // One pixel per step along the major axis.
        assert_eq!(lit(&c), 10);
    }

    #[test]
    fn line_is_direction_independent_for_axis_lines() {
        let mut a = Canvas::new(16, 16);
        let mut b = Canvas::new(16, 16);
        a.draw_line(Point::new(1, 5), Point::new(12, 5), Color::WHITE);
        b.draw_line(Point::new(12, 5), Point::new(1, 5), Color::WHITE);
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_eq!(lit(&a), 12);
    }

    #[test]
    fn degenerate_line_is_a_point() {
        let mut c = Canvas::new(4, 4);
        c.draw_line(Point::new(2, 2), Point::new(2, 2), Color::RED);
        assert_eq!(lit(&c), 1);
    }

    // ── circles ───────────────────────────────────────────────────────────

    #[test]
    fn circle_hits_cardinal_points() {
        let mut c = Canvas::new(32, 32);
        let center = Point::new(16, 16);
        c.draw_circle(center, 10, Color::WHITE);
        for (dx, dy) in [(0, -10), (10, 0), (0, 10), (-10, 0)] {
            assert_eq!(c.pixel(16 + dx, 16 + dy), Some(Color::WHITE));
        }
        assert_eq!(c.pixel(16, 16), Some(Color::BLACK));
    }

    #[test]
    fn circle_radius_zero_and_negative() {
        let mut c = Canvas::new(8, 8);
        c.draw_circle(Point::new(3, 3), -1, Color::WHITE);
        assert_eq!(lit(&c), 0);
        c.draw_circle(Point::new(3, 3), 0, Color::WHITE);
        assert_eq!(lit(&c), 1);
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn text_stays_inside_measured_box() {
        let mut c = Canvas::new(64, 16);
        let extent = c.measure_text("VIII");
        c.draw_text(Point::new(4, 4), "VIII", Color::WHITE);
        for y in 0..16 {
            for x in 0..64 {
                if c.pixel(x, y) != Some(Color::BLACK) {
                    assert!((4..4 + extent.width).contains(&x), "x={x}");
                    assert!((4..4 + extent.height).contains(&y), "y={y}");
                }
            }
        }
        assert!(lit(&c) > 0);
    }

    // ── dial ──────────────────────────────────────────────────────────────

    #[test]
    fn rendering_same_tick_twice_gives_same_pixels() {
        let g = ClockGeometry::new(256, 240).unwrap();
        let r = ClockRenderer::new(g);
        let t = ClockTime::new(9, 0, 0).unwrap();

        let mut c = Canvas::new(256, 240);
        r.render(&mut c, t, DisplayMode::Roman);
        let first = c.as_bytes().to_vec();
        r.render(&mut c, t, DisplayMode::Roman);
        assert_eq!(c.as_bytes(), &first[..]);

        // Face only, drawn twice over the same canvas, is also stable.
        c.clear(Color::BLACK);
        r.draw_face(&mut c, DisplayMode::Numerals);
        let once = c.as_bytes().to_vec();
        r.draw_face(&mut c, DisplayMode::Numerals);
        assert_eq!(c.as_bytes(), &once[..]);
    }

    #[test]
    fn nine_oclock_hour_hand_is_red_left_of_center() {
        let g = ClockGeometry::new(256, 240).unwrap();
        let mut c = Canvas::new(256, 240);
        ClockRenderer::new(g).render(&mut c, ClockTime::new(9, 0, 0).unwrap(), DisplayMode::Roman);

        let center = g.center();
        // Strokes share one row; only the shaded stroke's right end shows.
        assert_eq!(c.pixel(center.x - 40, center.y), Some(Color::RED));
        assert_eq!(c.pixel(center.x - 72, center.y), Some(Color::RED));
        assert_eq!(c.pixel(center.x + 1, center.y), Some(Color::DARK_RED));
        assert_eq!(c.pixel(center.x - 40, center.y - 1), Some(Color::BLACK));
        // Ring at the top of the dial.
        assert_eq!(c.pixel(center.x, center.y - 119), Some(Color::WHITE));
    }
}

//! Recording surface.
//!
//! [`DrawList`] implements [`Surface`] by storing every call as a [`DrawCmd`]
//! in call order. Headless hosts and tests use it to inspect exactly what the
//! renderer asked for without rasterizing anything.

use crate::geometry::Point;
use crate::surface::{Color, Surface, TextExtent};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    Clear(Color),
    Line { from: Point, to: Point, color: Color },
    Circle { center: Point, radius: i32, color: Color },
    Text { origin: Point, text: String, color: Color },
}

/// Recorded draw stream.
///
/// Text is measured on a fixed character cell, 8x8 by default, which matches
/// the engine's built-in bitmap font.
///
/// Recording is unbounded: a host that reuses one list across frames must call
/// [`DrawList::reset`] before each frame.
#[derive(Debug, Clone)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    cell: TextExtent,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::with_cell(8, 8)
    }
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list that measures text as `len * cell_width` by `cell_height`.
    pub fn with_cell(cell_width: i32, cell_height: i32) -> Self {
        Self {
            items: Vec::new(),
            cell: TextExtent::new(cell_width, cell_height),
        }
    }

    /// Returns recorded commands in call order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    /// Drops recorded commands, keeping capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates recorded lines as `(from, to, color)`.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Color)> + '_ {
        self.items.iter().filter_map(|cmd| match cmd {
            DrawCmd::Line { from, to, color } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    /// Iterates recorded text as `(origin, text)`.
    pub fn texts(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.items.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { origin, text, .. } => Some((*origin, text.as_str())),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        self.items.push(DrawCmd::Clear(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.items.push(DrawCmd::Line { from, to, color });
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) {
        self.items.push(DrawCmd::Circle { center, radius, color });
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        self.items.push(DrawCmd::Text { origin, text: text.to_owned(), color });
    }

    fn measure_text(&self, text: &str) -> TextExtent {
        let chars = text.chars().count() as i32;
        TextExtent::new(chars * self.cell.width, self.cell.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut list = DrawList::new();
        list.clear(Color::BLACK);
        list.draw_line(Point::new(0, 0), Point::new(3, 4), Color::WHITE);
        list.draw_text(Point::new(1, 1), "XII", Color::WHITE);

        assert_eq!(list.len(), 3);
        assert_eq!(list.items()[0], DrawCmd::Clear(Color::BLACK));
        assert_eq!(list.lines().count(), 1);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec![(Point::new(1, 1), "XII")]);
    }

    #[test]
    fn measures_on_character_cell() {
        assert_eq!(DrawList::new().measure_text("VIII"), TextExtent::new(32, 8));
        assert_eq!(DrawList::with_cell(6, 10).measure_text("12"), TextExtent::new(12, 10));
        assert_eq!(DrawList::new().measure_text(""), TextExtent::new(0, 8));
    }

    #[test]
    fn reset_empties_list() {
        let mut list = DrawList::new();
        list.draw_circle(Point::new(5, 5), 3, Color::RED);
        list.reset();
        assert!(list.is_empty());
    }

    #[test]
    fn reused_list_grows_until_reset() {
        let mut list = DrawList::new();
        for _ in 0..3 {
            list.clear(Color::BLACK);
            list.draw_line(Point::new(0, 0), Point::new(4, 4), Color::RED);
        }
        assert_eq!(list.len(), 6);

        for _ in 0..3 {
            list.reset();
            list.clear(Color::BLACK);
            list.draw_line(Point::new(0, 0), Point::new(4, 4), Color::RED);
        }
        assert_eq!(list.len(), 2);
    }
}

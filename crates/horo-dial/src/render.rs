//! Dial renderer.
//!
//! Draws the face (graduations, numerals, outer ring) and the three hands onto
//! any [`Surface`]. Output depends only on the geometry, the palette, and the
//! `(tick, mode)` arguments.

use crate::geometry::{ClockGeometry, HandAngles, Point, ThickenAxis};
use crate::numeral::{DisplayMode, format_numeral};
use crate::surface::{Color, Surface};
use crate::time::ClockTime;

/// Degrees between adjacent graduations.
const GRADUATION_STEP: u16 = 6;
/// Degrees between major (five-minute) graduations.
const MAJOR_STEP: u16 = 30;
/// Numerals sit on a circle at this fraction of the midfield radius.
const NUMERAL_RING: f64 = 0.8;

/// Colors used by [`ClockRenderer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DialPalette {
    pub background: Color,
    pub minor_tick: Color,
    pub major_tick: Color,
    pub numerals: Color,
    pub ring: Color,
    pub hour_hand: Color,
    /// Color of the hour-hand stroke on the positive side of its offset axis.
    pub hour_hand_shade: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
}

impl Default for DialPalette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            minor_tick: Color::VERY_DARK_GREY,
            major_tick: Color::DARK_GREY,
            numerals: Color::WHITE,
            ring: Color::WHITE,
            hour_hand: Color::RED,
            hour_hand_shade: Color::DARK_RED,
            minute_hand: Color::GREY,
            second_hand: Color::WHITE,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockRenderer {
    geometry: ClockGeometry,
    palette: DialPalette,
}

impl ClockRenderer {
    pub fn new(geometry: ClockGeometry) -> Self {
        Self::with_palette(geometry, DialPalette::default())
    }

    pub fn with_palette(geometry: ClockGeometry, palette: DialPalette) -> Self {
        Self { geometry, palette }
    }

    #[inline]
    pub fn geometry(&self) -> &ClockGeometry {
        &self.geometry
    }

    #[inline]
    pub fn palette(&self) -> &DialPalette {
        &self.palette
    }

    /// Clears `surface` and draws a full frame for `tick`.
    pub fn render<S>(&self, surface: &mut S, tick: ClockTime, mode: DisplayMode)
    where
        S: Surface + ?Sized,
    {
        surface.clear(self.palette.background);
        self.draw_face(surface, mode);
        self.draw_hands(surface, tick);
    }

    /// Draws graduations, numerals and the outer ring.
    pub fn draw_face<S>(&self, surface: &mut S, mode: DisplayMode)
    where
        S: Surface + ?Sized,
    {
        let g = &self.geometry;
        let radii = g.radii();

        for angle in (0..360).step_by(usize::from(GRADUATION_STEP)) {
            let major = angle % MAJOR_STEP == 0;
            let (mark_inner, color) = if major {
                (radii.inner, self.palette.major_tick)
            } else {
                (radii.midfield, self.palette.minor_tick)
            };

            let angle = f64::from(angle);
            let outer = g.transform(angle, radii.outer - 1.0);
            let inner = g.transform(angle, mark_inner);
            surface.draw_line(outer, inner, color);
        }

        for hour in 1..=12u32 {
            let label = format_numeral(hour, mode);
            let anchor = g.transform(f64::from(hour * 30), radii.midfield * NUMERAL_RING);
            let extent = surface.measure_text(&label);
            let origin = anchor.offset(-extent.width / 2, -extent.height / 2);
            surface.draw_text(origin, &label, self.palette.numerals);
        }

        surface.draw_circle(g.center(), radii.outer as i32, self.palette.ring);
    }

    /// Draws the hour, minute and second hands for `tick`.
    pub fn draw_hands<S>(&self, surface: &mut S, tick: ClockTime)
    where
        S: Surface + ?Sized,
    {
        let g = &self.geometry;
        let radii = g.radii();
        let center = g.center();
        let angles = HandAngles::at(tick);

        let hour_tip = g.transform(angles.hour, radii.hour_hand);
        self.draw_thick_hand(surface, center, hour_tip, ThickenAxis::for_angle(angles.hour));

        let minute_tip = g.transform(angles.minute, radii.inner - 1.0);
        surface.draw_line(center, minute_tip, self.palette.minute_hand);

        let second_tip = g.transform(angles.second, radii.inner - 1.0);
        surface.draw_line(center, second_tip, self.palette.second_hand);
    }

    fn draw_thick_hand<S>(&self, surface: &mut S, from: Point, to: Point, axis: ThickenAxis)
    where
        S: Surface + ?Sized,
    {
        let strokes = [
            (axis.step(1), self.palette.hour_hand_shade),
            (axis.step(0), self.palette.hour_hand),
            (axis.step(-1), self.palette.hour_hand),
        ];
        for (offset, color) in strokes {
            surface.draw_line(from + offset, to + offset, color);
        }
    }
}

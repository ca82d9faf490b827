//! Dial geometry.
//!
//! Pixel space follows the drawing surface: origin top-left, +X right, +Y down.
//! Dial angles are in degrees, measured clockwise from 12 o'clock.

use core::ops::{Add, Sub};

use crate::error::{DialError, MIN_SURFACE_EDGE};
use crate::time::ClockTime;

/// Integer pixel coordinate.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Dial radii in pixels, all derived from the outer radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Radii {
    /// Outer ring; graduations start one pixel inside it.
    pub outer: f64,
    /// Inner end of minor graduations.
    pub midfield: f64,
    /// Inner end of major graduations. Minute and second hands reach `inner - 1`.
    pub inner: f64,
    pub hour_hand: f64,
}

impl Radii {
    pub fn from_outer(outer: f64) -> Self {
        Self {
            outer,
            midfield: outer * 0.96,
            inner: outer * 0.9,
            hour_hand: outer * 0.6,
        }
    }
}

/// Fixed center and radii of a dial laid out on a surface.
///
/// Built once from the surface dimensions and never mutated afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockGeometry {
    center: Point,
    radii: Radii,
}

impl ClockGeometry {
    /// Lays out a dial centered on a `width` x `height` surface.
    pub fn new(width: u32, height: u32) -> Result<Self, DialError> {
        if width < MIN_SURFACE_EDGE || height < MIN_SURFACE_EDGE {
            return Err(DialError::SurfaceTooSmall { width, height });
        }

        let center = Point::new((width / 2) as i32, (height / 2) as i32);
        let outer = f64::from(center.x.min(center.y)) - 1.0;

        Ok(Self { center, radii: Radii::from_outer(outer) })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radii(&self) -> Radii {
        self.radii
    }

    /// Maps a polar `(angle, radius)` around the center to a pixel.
    ///
    /// The float-to-int conversion truncates toward zero, so points that land
    /// near a .5 boundary can sit one pixel closer to the center than rounding
    /// would put them.
    pub fn transform(&self, angle_degrees: f64, radius: f64) -> Point {
        let theta = angle_degrees.to_radians();
        Point::new(
            self.center.x + (theta.sin() * radius) as i32,
            self.center.y + (-theta.cos() * radius) as i32,
        )
    }
}

/// Hand angles in degrees for one tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn at(tick: ClockTime) -> Self {
        // The hour hand creeps half a degree per minute between hour marks.
        let hour = f64::from(tick.hour() % 12) * 30.0 + f64::from(tick.minute()) * 0.5;
        Self {
            hour,
            minute: f64::from(tick.minute()) * 6.0,
            second: f64::from(tick.second()) * 6.0,
        }
    }
}

/// Axis along which the parallel strokes of a thick hand are offset.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ThickenAxis {
    X,
    Y,
}

impl ThickenAxis {
    /// Picks the offset axis for a hand at `angle_degrees`.
    ///
    /// Angles are bucketed into 90° bands centered on 12, 3, 6 and 9 o'clock.
    /// Odd bands (around 3 and 9) count as mostly vertical and offset along X;
    /// even bands offset along Y. Exact 45° multiples fall into the band that
    /// starts there.
    pub fn for_angle(angle_degrees: f64) -> Self {
        let band = ((angle_degrees + 45.0) / 90.0).floor() as i64;
        if band.rem_euclid(2) == 1 { ThickenAxis::X } else { ThickenAxis::Y }
    }

    /// Unit step along this axis, scaled by `n`.
    #[inline]
    pub fn step(self, n: i32) -> Point {
        match self {
            ThickenAxis::X => Point::new(n, 0),
            ThickenAxis::Y => Point::new(0, n),
        }
    }
}

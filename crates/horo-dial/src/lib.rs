//! Analog clock dial for **horo**: geometry, numerals, tick detection and rendering.
//!
//! This crate has no windowing or GPU dependencies. Everything it draws goes
//! through the [`Surface`] capability trait, and wall-clock readings come in
//! through [`TimeSource`], so the full render path can be exercised headless
//! with [`scene::DrawList`] and [`time::FixedTimeSource`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`geometry`] | `Point`, `ClockGeometry` (center, radii, polar transform), `HandAngles`, `ThickenAxis` |
//! | [`numeral`] | `DisplayMode`, `format_numeral`, `to_roman` |
//! | [`time`] | `ClockTime`, `TimeSource`, `TickDetector`, `FixedTimeSource` |
//! | [`surface`] | `Color`, `TextExtent`, the `Surface` trait |
//! | [`scene`] | `DrawCmd`, `DrawList` (recording surface) |
//! | [`render`] | `ClockRenderer`, `DialPalette` |
//! | [`face`] | `ClockFace` update loop, `FrameOutcome` |
//! | [`error`] | `DialError`, `ClockTimeError`, `TimeSourceError` |
//!
//! # Quick start
//!
//! ```rust
//! use horo_dial::{ClockFace, ClockGeometry, ClockTime, DisplayMode, FrameOutcome};
//! use horo_dial::scene::DrawList;
//! use horo_dial::time::FixedTimeSource;
//!
//! let geometry = ClockGeometry::new(256, 240).unwrap();
//! let mut face = ClockFace::new(geometry, DisplayMode::Roman);
//! let mut surface = DrawList::new();
//! let mut source = FixedTimeSource::new([ClockTime::new(9, 0, 0).unwrap()]);
//!
//! let outcome = face.update(&mut surface, &mut source, false).unwrap();
//! assert!(matches!(outcome, FrameOutcome::Redrawn(_)));
//! ```

pub mod error;
pub mod face;
pub mod geometry;
pub mod numeral;
pub mod render;
pub mod scene;
pub mod surface;
pub mod time;

pub use error::{ClockTimeError, DialError, TimeSourceError};
pub use face::{ClockFace, FrameOutcome};
pub use geometry::{ClockGeometry, HandAngles, Point, Radii, ThickenAxis};
pub use numeral::{DisplayMode, format_numeral, to_roman};
pub use render::{ClockRenderer, DialPalette};
pub use surface::{Color, Surface, TextExtent};
pub use time::{ClockTime, TickDetector, TimeSource};

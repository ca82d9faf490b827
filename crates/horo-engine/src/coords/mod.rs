//! Window-space placement of the clock canvas.
//!
//! Physical pixels, origin top-left, +Y down.

mod letterbox;

pub use letterbox::{Rect, Viewport};

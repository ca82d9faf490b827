//! CPU pixel canvas.
//!
//! The dial draws into a small fixed-size [`Canvas`]; the blitter scales it
//! up to the window with nearest sampling.

mod canvas;

pub use canvas::Canvas;

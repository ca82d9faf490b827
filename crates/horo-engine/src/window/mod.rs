//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single clock window, paces frames and
//! wires them to the GPU layer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};

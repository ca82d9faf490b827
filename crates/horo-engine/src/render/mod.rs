//! GPU rendering.
//!
//! The only renderer is [`CanvasBlitter`], which copies the CPU canvas to the
//! window as a pixel-scaled textured quad.
//!
//! Convention:
//! - CPU geometry is in physical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod blit;
mod ctx;

pub use blit::CanvasBlitter;
pub use ctx::{RenderCtx, RenderTarget, clear_color};

//! GPU device and window surface.
//!
//! Creates the wgpu instance, adapter, device and queue for the clock window,
//! keeps the surface configured across resizes and hands out one frame
//! (encoder + view) at a time.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;

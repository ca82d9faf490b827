//! Time subsystem.
//!
//! Two unrelated clocks live here:
//! - `FramePacer` schedules host frames on the monotonic clock
//! - `SystemTimeSource` reads local civil time for the dial

mod frame_pacer;
mod wall_clock;

pub use frame_pacer::{FramePacer, FrameTime};
pub use wall_clock::{SystemTimeSource, reading_from};

//! Contract between the window runtime and the application.

mod ctx;

pub use ctx::{FrameCtx, WindowCtx};

/// Returned by app callbacks to keep running or stop the event loop.
#[must_use]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

impl AppControl {
    #[inline]
    pub fn is_exit(self) -> bool {
        self == AppControl::Exit
    }
}

/// Application driven by [`crate::window::Runtime`].
pub trait App {
    /// Called once per paced frame, after the frame's input was collected.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once as the event loop shuts down.
    fn on_exit(&mut self) {}
}

//! Per-frame update loop.
//!
//! [`ClockFace`] owns the last rendered reading and the display mode. Each
//! host frame calls [`ClockFace::update`], which redraws only when the wall
//! clock moved on or the user asked for the other numeral style.

use crate::error::TimeSourceError;
use crate::geometry::ClockGeometry;
use crate::numeral::DisplayMode;
use crate::render::ClockRenderer;
use crate::surface::Surface;
use crate::time::{ClockTime, TickDetector, TimeSource};

/// What a call to [`ClockFace::update`] did to the surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// Nothing changed; the surface was not touched.
    Idle,
    /// The surface was cleared and redrawn for this reading.
    Redrawn(ClockTime),
}

impl FrameOutcome {
    #[inline]
    pub fn is_redrawn(&self) -> bool {
        matches!(self, FrameOutcome::Redrawn(_))
    }
}

#[derive(Debug, Clone)]
pub struct ClockFace {
    renderer: ClockRenderer,
    detector: TickDetector,
    mode: DisplayMode,
    last_tick: Option<ClockTime>,
    toggle_pending: bool,
}

impl ClockFace {
    pub fn new(geometry: ClockGeometry, mode: DisplayMode) -> Self {
        Self::with_renderer(ClockRenderer::new(geometry), mode)
    }

    pub fn with_renderer(renderer: ClockRenderer, mode: DisplayMode) -> Self {
        Self {
            renderer,
            detector: TickDetector::new(),
            mode,
            last_tick: None,
            toggle_pending: false,
        }
    }

    #[inline]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Reading shown on the surface, `None` before the first redraw.
    #[inline]
    pub fn last_tick(&self) -> Option<ClockTime> {
        self.last_tick
    }

    #[inline]
    pub fn renderer(&self) -> &ClockRenderer {
        &self.renderer
    }

    /// True while a toggle request waits for a successful frame.
    #[inline]
    pub fn toggle_pending(&self) -> bool {
        self.toggle_pending
    }

    /// Forgets the last reading so the next update redraws unconditionally.
    ///
    /// Hosts call this when the surface contents were lost.
    pub fn invalidate(&mut self) {
        self.last_tick = None;
    }

    /// Runs one frame.
    ///
    /// `toggle_requested` is the edge-triggered input for this frame. A time
    /// source failure leaves the surface and `last_tick` untouched and keeps
    /// any toggle request for the next successful frame.
    pub fn update<S, T>(
        &mut self,
        surface: &mut S,
        source: &mut T,
        toggle_requested: bool,
    ) -> Result<FrameOutcome, TimeSourceError>
    where
        S: Surface + ?Sized,
        T: TimeSource + ?Sized,
    {
        self.toggle_pending |= toggle_requested;

        let changed = self.detector.poll(self.last_tick, source)?;
        let tick = match (changed, self.last_tick) {
            (Some(tick), _) => tick,
            (None, Some(tick)) if self.toggle_pending => tick,
            _ => return Ok(FrameOutcome::Idle),
        };

        if self.toggle_pending {
            self.mode = self.mode.toggled();
            self.toggle_pending = false;
            log::debug!("display mode -> {}", self.mode);
        }

        self.renderer.render(surface, tick, self.mode);
        self.last_tick = Some(tick);
        Ok(FrameOutcome::Redrawn(tick))
    }
}

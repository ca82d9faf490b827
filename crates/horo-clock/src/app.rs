use anyhow::{Context, Result};

use horo_dial::{ClockFace, ClockGeometry, ClockRenderer, Color, FrameOutcome, TimeSource};
use horo_engine::coords::Rect;
use horo_engine::core::{App, AppControl, FrameCtx};
use horo_engine::input::Key;
use horo_engine::raster::Canvas;
use horo_engine::render::CanvasBlitter;
use horo_engine::text::GlyphSet;

use crate::config::ClockConfig;

/// Desktop clock: drives a [`ClockFace`] on a CPU canvas and blits it to the window.
pub struct ClockApp<T: TimeSource> {
    face: ClockFace,
    canvas: Canvas,
    source: T,
    blitter: CanvasBlitter,
    toggle_key: Key,
    background: Color,
    /// Canvas changed since it was last presented.
    dirty: bool,
    /// Set while the time source keeps failing, so the warning is logged once.
    time_failing: bool,
    redraws: u64,
}

impl<T: TimeSource> ClockApp<T> {
    pub fn new(config: &ClockConfig, source: T) -> Result<Self> {
        let geometry = ClockGeometry::new(config.canvas_width, config.canvas_height)
            .context("invalid canvas size")?;

        let glyphs = match &config.font {
            Some(font) => GlyphSet::from_font_file(&font.path, font.px)?,
            None => GlyphSet::default(),
        };

        Ok(Self {
            face: ClockFace::with_renderer(
                ClockRenderer::with_palette(geometry, config.palette),
                config.mode,
            ),
            canvas: Canvas::with_glyphs(config.canvas_width, config.canvas_height, glyphs),
            source,
            blitter: CanvasBlitter::new(),
            toggle_key: config.toggle_key,
            background: config.palette.background,
            dirty: false,
            time_failing: false,
            redraws: 0,
        })
    }

    /// Advances the dial by one frame. Returns true if the canvas was redrawn.
    fn advance(&mut self, toggle_requested: bool) -> bool {
        match self.face.update(&mut self.canvas, &mut self.source, toggle_requested) {
            Ok(outcome) => {
                if self.time_failing {
                    log::info!("wall clock readable again");
                    self.time_failing = false;
                }
                if let FrameOutcome::Redrawn(tick) = outcome {
                    log::trace!("redrawn at {tick}");
                    self.dirty = true;
                    self.redraws += 1;
                    return true;
                }
                false
            }
            Err(err) => {
                if !self.time_failing {
                    log::warn!("skipping frame, wall clock unavailable: {err}");
                    self.time_failing = true;
                }
                false
            }
        }
    }
}

impl<T: TimeSource> App for ClockApp<T> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let toggle = ctx.input_frame.released(self.toggle_key);
        self.advance(toggle);

        if !self.dirty && !ctx.invalidated {
            return AppControl::Continue;
        }

        let canvas = &self.canvas;
        let blitter = &mut self.blitter;
        let control = ctx.render(self.background, |rctx, target| {
            blitter.upload(rctx, canvas);
            let dst = Rect::fit_centered(canvas.width(), canvas.height(), rctx.viewport);
            blitter.render(rctx, target, dst);
        });

        // A skipped frame leaves the window invalidated, which re-uploads next time.
        self.dirty = false;
        control
    }

    fn on_exit(&mut self) {
        log::info!(
            "clock stopped after {} redraws, last showing {:?} in {} mode",
            self.redraws,
            self.face.last_tick().map(|t| t.to_string()),
            self.face.mode(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horo_dial::time::FixedTimeSource;
    use horo_dial::{ClockTime, DisplayMode, TimeSourceError};

    fn t(h: u8, m: u8, s: u8) -> ClockTime {
        ClockTime::new(h, m, s).unwrap()
    }

    fn app(readings: &[ClockTime]) -> ClockApp<FixedTimeSource> {
        let source = FixedTimeSource::new(readings.iter().copied());
        ClockApp::new(&ClockConfig::default(), source).unwrap()
    }

    #[test]
    fn first_frame_marks_canvas_dirty() {
        let mut app = app(&[t(9, 0, 0)]);
        assert!(!app.dirty);
        assert!(app.advance(false));
        assert!(app.dirty);
        assert_eq!(app.redraws, 1);
        assert_eq!(app.canvas.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn same_second_is_not_redrawn() {
        let mut app = app(&[t(9, 0, 0), t(9, 0, 0)]);
        app.advance(false);
        app.dirty = false;
        assert!(!app.advance(false));
        assert!(!app.dirty);
    }

    #[test]
    fn toggle_redraws_in_other_mode() {
        let mut app = app(&[t(9, 0, 0)]);
        app.advance(false);
        assert!(app.advance(true));
        assert_eq!(app.face.mode(), DisplayMode::Numerals);
    }

    #[test]
    fn time_failure_skips_and_recovers() {
        let mut app = app(&[]);
        app.source.push_error(TimeSourceError::Unavailable("no clock".into()));
        assert!(!app.advance(false));
        assert!(app.time_failing);

        app.source.push(t(1, 2, 3));
        assert!(app.advance(false));
        assert!(!app.time_failing);
        assert_eq!(app.face.last_tick(), Some(t(1, 2, 3)));
    }

    #[test]
    fn config_mode_and_palette_are_applied() {
        let config = ClockConfig::default().mode(DisplayMode::Numerals).palette(horo_dial::DialPalette {
            background: Color::WHITE,
            ..Default::default()
        });
        let mut app = ClockApp::new(&config, FixedTimeSource::new([t(6, 0, 0)])).unwrap();
        assert_eq!(app.face.mode(), DisplayMode::Numerals);
        app.advance(false);
        assert_eq!(app.canvas.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn configured_toggle_key_is_used() {
        let config = ClockConfig::default().toggle_key(Key::Char('m'));
        let app = ClockApp::new(&config, FixedTimeSource::default()).unwrap();
        assert_eq!(app.toggle_key, Key::Char('m'));
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let config = ClockConfig::default().font("/nonexistent/horo-test.ttf", 12.0);
        assert!(ClockApp::new(&config, FixedTimeSource::default()).is_err());
    }

    #[test]
    fn bad_canvas_size_is_an_error() {
        let config = ClockConfig::default().canvas_size(2, 2);
        assert!(ClockApp::new(&config, FixedTimeSource::default()).is_err());
    }
}

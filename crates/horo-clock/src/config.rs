use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use winit::dpi::LogicalSize;

use horo_dial::{DialPalette, DisplayMode};
use horo_engine::device::GpuInit;
use horo_engine::input::Key;
use horo_engine::window::RuntimeConfig;

pub const ENV_MODE: &str = "HORO_CLOCK_MODE";
pub const ENV_SCALE: &str = "HORO_CLOCK_SCALE";
pub const ENV_FONT: &str = "HORO_CLOCK_FONT";
pub const ENV_KEY: &str = "HORO_CLOCK_KEY";

const DEFAULT_FONT_PX: f32 = 12.0;
const MAX_PIXEL_SCALE: u32 = 16;

/// Outline font used for the numerals instead of the bitmap font.
#[derive(Debug, Clone, PartialEq)]
pub struct FontConfig {
    pub path: PathBuf,
    pub px: f32,
}

/// Clock application settings.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Window pixels per canvas pixel at startup.
    pub pixel_scale: u32,
    pub mode: DisplayMode,
    pub toggle_key: Key,
    pub frame_rate: u32,
    pub vsync: bool,
    pub font: Option<FontConfig>,
    pub palette: DialPalette,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            title: "Classic Clock".to_string(),
            canvas_width: 256,
            canvas_height: 240,
            pixel_scale: 4,
            mode: DisplayMode::Roman,
            toggle_key: Key::Space,
            frame_rate: 60,
            vsync: true,
            font: None,
            palette: DialPalette::default(),
        }
    }
}

impl ClockConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn pixel_scale(mut self, scale: u32) -> Self {
        self.pixel_scale = scale;
        self
    }

    pub fn mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn toggle_key(mut self, key: Key) -> Self {
        self.toggle_key = key;
        self
    }

    pub fn frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = fps;
        self
    }

    pub fn vsync(mut self, on: bool) -> Self {
        self.vsync = on;
        self
    }

    pub fn font(mut self, path: impl Into<PathBuf>, px: f32) -> Self {
        self.font = Some(FontConfig { path: path.into(), px });
        self
    }

    pub fn palette(mut self, palette: DialPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Applies `HORO_CLOCK_*` overrides from the process environment.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Applies overrides from `lookup`. Unset or blank variables are ignored.
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_MODE) {
            self.mode = parse_mode(&v)?;
        }
        if let Some(v) = get(ENV_SCALE) {
            self.pixel_scale = parse_scale(&v)?;
        }
        if let Some(v) = get(ENV_FONT) {
            let px = self.font.as_ref().map_or(DEFAULT_FONT_PX, |f| f.px);
            self.font = Some(FontConfig { path: PathBuf::from(v.trim()), px });
        }
        if let Some(v) = get(ENV_KEY) {
            self.toggle_key = v.parse::<Key>().with_context(|| format!("{ENV_KEY}: bad key"))?;
        }

        Ok(self)
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit::default().vsync(self.vsync)
    }

    /// Window settings derived from the canvas size and pixel scale.
    pub fn runtime_config(&self) -> RuntimeConfig {
        let (w, h) = (f64::from(self.canvas_width), f64::from(self.canvas_height));
        let scale = f64::from(self.pixel_scale.max(1));
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(w * scale, h * scale),
            min_size: Some(LogicalSize::new(w, h)),
            resizable: true,
            frame_rate: self.frame_rate,
        }
    }
}

fn parse_mode(raw: &str) -> Result<DisplayMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "roman" => Ok(DisplayMode::Roman),
        "numerals" => Ok(DisplayMode::Numerals),
        other => bail!("{ENV_MODE}: expected `roman` or `numerals`, got `{other}`"),
    }
}

fn parse_scale(raw: &str) -> Result<u32> {
    let scale: u32 = match raw.trim().parse() {
        Ok(v) => v,
        Err(e) => bail!("{ENV_SCALE}: `{}` is not a whole number ({e})", raw.trim()),
    };
    if !(1..=MAX_PIXEL_SCALE).contains(&scale) {
        bail!("{ENV_SCALE}: {scale} is outside 1..={MAX_PIXEL_SCALE}");
    }
    Ok(scale)
}

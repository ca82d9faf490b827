/// Options for [`super::Gpu::new`].
///
/// Defaults suit a clock: vsync, an sRGB target for the sRGB canvas, and the
/// low-power adapter.
#[derive(Debug, Clone)]
pub struct GpuInit {
    pub prefer_srgb: bool,
    /// Requested present mode; unsupported modes fall back to `Fifo`.
    pub present_mode: wgpu::PresentMode,
    /// Requested alpha mode; unsupported modes fall back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    /// Hint only; support depends on platform and backend.
    pub frame_latency: u32,
    pub power_preference: wgpu::PowerPreference,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            frame_latency: 2,
            power_preference: wgpu::PowerPreference::LowPower,
        }
    }
}

impl GpuInit {
    /// Switches between `Fifo` and `AutoNoVsync`.
    pub fn vsync(mut self, on: bool) -> Self {
        self.present_mode = if on {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        self
    }
}

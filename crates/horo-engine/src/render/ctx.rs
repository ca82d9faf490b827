use horo_dial::Color;

use crate::coords::Viewport;

/// Renderer-facing context (device/queue + surface format + viewport).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport, // physical px
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            viewport,
        }
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}

/// Converts an sRGB canvas color to the clear value for a surface of `format`.
///
/// Clear values are written as-is into the attachment, and sRGB attachments
/// encode on write, so they expect linear input.
pub fn clear_color(color: Color, format: wgpu::TextureFormat) -> wgpu::Color {
    let channel = |c: u8| -> f64 {
        let c = f64::from(c) / 255.0;
        if !format.is_srgb() {
            c
        } else if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    wgpu::Color {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
        a: f64::from(color.a) / 255.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white_are_fixed_points() {
        for format in [wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Bgra8UnormSrgb] {
            let w = clear_color(Color::WHITE, format);
            let b = clear_color(Color::BLACK, format);
            assert!((w.r - 1.0).abs() < 1e-9 && (w.a - 1.0).abs() < 1e-9);
            assert_eq!((b.r, b.g, b.b), (0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn srgb_target_linearizes() {
        let grey = Color::DARK_GREY;
        let lin = clear_color(grey, wgpu::TextureFormat::Rgba8UnormSrgb);
        let raw = clear_color(grey, wgpu::TextureFormat::Rgba8Unorm);
        assert!((raw.r - 128.0 / 255.0).abs() < 1e-9);
        assert!((lin.r - 0.2158).abs() < 1e-3);
    }
}

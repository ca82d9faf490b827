use winit::dpi::PhysicalSize;

use super::GpuInit;

/// What the runtime does after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame can render.
    Reconfigured,
    SkipFrame,
    /// Out of memory; the runtime exits.
    Fatal,
}

/// Builds the surface configuration for `size` from what the adapter offers.
///
/// Returns `None` when the surface supports no formats at all.
pub(crate) fn configuration(
    caps: &wgpu::SurfaceCapabilities,
    size: PhysicalSize<u32>,
    init: &GpuInit,
) -> Option<wgpu::SurfaceConfiguration> {
    let format = choose_surface_format(&caps.formats, init.prefer_srgb)?;
    Some(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: choose_present_mode(&caps.present_modes, init.present_mode),
        alpha_mode: choose_alpha_mode(&caps.alpha_modes, init.alpha_mode),
        view_formats: Vec::new(),
        desired_maximum_frame_latency: init.frame_latency,
    })
}

fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let srgb = formats.iter().copied().find(|f| f.is_srgb());
    match (prefer_srgb, srgb) {
        (true, Some(f)) => Some(f),
        _ => formats.first().copied(),
    }
}

/// `requested` if supported, else `Fifo`, which every backend must offer.
fn choose_present_mode(
    supported: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    let auto = matches!(requested, wgpu::PresentMode::AutoVsync | wgpu::PresentMode::AutoNoVsync);
    if auto || supported.contains(&requested) {
        requested
    } else {
        wgpu::PresentMode::Fifo
    }
}

fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Lost and outdated surfaces are recoverable by reconfiguring.
pub(crate) fn classify(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as A, PresentMode as P, TextureFormat as F};

    fn caps(formats: &[F], present: &[P], alpha: &[A]) -> wgpu::SurfaceCapabilities {
        let mut caps = wgpu::SurfaceCapabilities::default();
        caps.formats = formats.to_vec();
        caps.present_modes = present.to_vec();
        caps.alpha_modes = alpha.to_vec();
        caps
    }

    #[test]
    fn prefers_srgb_format() {
        let formats = [F::Bgra8Unorm, F::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(F::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8Unorm));
        assert_eq!(choose_surface_format(&[F::Rgba16Float], true), Some(F::Rgba16Float));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn unsupported_present_mode_falls_back_to_fifo() {
        assert_eq!(choose_present_mode(&[P::Fifo], P::Mailbox), P::Fifo);
        assert_eq!(choose_present_mode(&[P::Fifo, P::Mailbox], P::Mailbox), P::Mailbox);
        // Auto modes are resolved by wgpu itself.
        assert_eq!(choose_present_mode(&[P::Fifo], P::AutoNoVsync), P::AutoNoVsync);
    }

    #[test]
    fn unsupported_alpha_mode_falls_back() {
        assert_eq!(choose_alpha_mode(&[A::Opaque], Some(A::PreMultiplied)), A::Opaque);
        assert_eq!(choose_alpha_mode(&[A::Opaque, A::PreMultiplied], Some(A::PreMultiplied)), A::PreMultiplied);
        assert_eq!(choose_alpha_mode(&[], None), A::Auto);
    }

    #[test]
    fn configuration_from_capabilities() {
        let caps = caps(&[F::Bgra8Unorm, F::Bgra8UnormSrgb], &[P::Fifo], &[A::Opaque]);
        let config = configuration(&caps, PhysicalSize::new(1024, 960), &GpuInit::default()).unwrap();
        assert_eq!(config.format, F::Bgra8UnormSrgb);
        assert_eq!((config.width, config.height), (1024, 960));
        assert_eq!(config.present_mode, P::Fifo);
        assert_eq!(config.alpha_mode, A::Opaque);
        assert_eq!(config.desired_maximum_frame_latency, 2);
    }

    #[test]
    fn configuration_needs_a_format() {
        let caps = caps(&[], &[P::Fifo], &[A::Opaque]);
        assert!(configuration(&caps, PhysicalSize::new(8, 8), &GpuInit::default()).is_none());
    }

    #[test]
    fn error_classification() {
        assert_eq!(classify(&wgpu::SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify(&wgpu::SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify(&wgpu::SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify(&wgpu::SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}

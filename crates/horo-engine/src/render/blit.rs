use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Viewport};
use crate::raster::Canvas;
use crate::render::{RenderCtx, RenderTarget};

/// The canvas stores straight sRGB bytes.
const CANVAS_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Vertices per blit: two triangles generated in the shader.
const QUAD_VERTICES: u32 = 6;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct BlitUniform {
    viewport: [f32; 2],
    _pad: [f32; 2], // 16-byte alignment
    dst_min: [f32; 2],
    dst_max: [f32; 2],
}

impl BlitUniform {
    fn new(viewport: Viewport, dst: Rect) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
            dst_min: dst.min(),
            dst_max: dst.max(),
        }
    }
}

/// Objects that depend on the surface format.
struct BlitPipeline {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    uniform: wgpu::Buffer,
}

impl BlitPipeline {
    fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("horo blit shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let fragment_entry = |binding, ty| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty,
            count: None,
        };
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("horo blit bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<BlitUniform>() as u64,
                        ),
                    },
                    count: None,
                },
                fragment_entry(
                    1,
                    wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                ),
                fragment_entry(2, wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering)),
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("horo blit pipeline layout"),
            bind_group_layouts: &[&layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("horo blit pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        // Nearest filtering keeps canvas pixels as hard-edged blocks.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("horo blit sampler"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let uniform = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("horo blit ubo"),
            size: std::mem::size_of::<BlitUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self { format, pipeline, layout, sampler, uniform }
    }

    fn bind(&self, device: &wgpu::Device, view: &wgpu::TextureView) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("horo blit bind group"),
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: self.uniform.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(view) },
                wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(&self.sampler) },
            ],
        })
    }
}

/// GPU copy of the canvas.
struct CanvasTexture {
    size: (u32, u32),
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl CanvasTexture {
    fn new(device: &wgpu::Device, (width, height): (u32, u32)) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("horo canvas texture"),
            size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: CANVAS_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&Default::default());
        log::debug!("canvas texture created: {width}x{height}");
        Self { size: (width, height), texture, view }
    }
}

/// Draws a [`Canvas`] into the frame as a nearest-sampled quad.
///
/// GPU objects are created on first use. The texture is rebuilt when the
/// canvas size changes and the pipeline when the surface format does.
#[derive(Default)]
pub struct CanvasBlitter {
    pipeline: Option<BlitPipeline>,
    texture: Option<CanvasTexture>,
    bind_group: Option<wgpu::BindGroup>,
}

impl CanvasBlitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the canvas pixels into the GPU texture.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, canvas: &Canvas) {
        let size = (canvas.width(), canvas.height());
        if size.0 == 0 || size.1 == 0 {
            return;
        }
        if self.texture.as_ref().is_none_or(|t| t.size != size) {
            self.texture = Some(CanvasTexture::new(ctx.device, size));
            self.bind_group = None;
        }
        let Some(tex) = self.texture.as_ref() else { return };

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &tex.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            canvas.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * size.0),
                rows_per_image: Some(size.1),
            },
            wgpu::Extent3d { width: size.0, height: size.1, depth_or_array_layers: 1 },
        );
    }

    /// Draws the last uploaded canvas stretched over `dst` (physical pixels).
    ///
    /// Does nothing before the first [`CanvasBlitter::upload`].
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, dst: Rect) {
        if dst.is_empty() || !ctx.viewport.is_valid() {
            return;
        }
        let Some(texture) = self.texture.as_ref() else { return };

        if self.pipeline.as_ref().is_none_or(|p| p.format != ctx.surface_format) {
            log::debug!("building blit pipeline for {:?}", ctx.surface_format);
            self.pipeline = Some(BlitPipeline::new(ctx.device, ctx.surface_format));
            self.bind_group = None;
        }
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let bind_group = self
            .bind_group
            .get_or_insert_with(|| pipeline.bind(ctx.device, &texture.view));

        let uniform = BlitUniform::new(ctx.viewport, dst);
        ctx.queue.write_buffer(&pipeline.uniform, 0, bytemuck::bytes_of(&uniform));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("horo blit pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
        rpass.set_pipeline(&pipeline.pipeline);
        rpass.set_bind_group(0, &*bind_group, &[]);
        rpass.draw(0..QUAD_VERTICES, 0..1);
    }
}

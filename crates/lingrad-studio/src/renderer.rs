//! GPU pipeline filling a rect with the linear gradient.

use lingrad_engine::render::quad::{create_quad_buffers, premul_alpha_blend, QuadVertex, QUAD_INDICES};
use lingrad_engine::render::{compile_wgsl, RenderCtx, RenderTarget, ShaderError};

use crate::resources::{ShaderResources, GRADIENT_FRAGMENT_SHADER, GRADIENT_VERTEX_SHADER};
use crate::uniforms::GradientUniformBlock;

const LABEL: &str = "lingrad linear gradient";

/// Renders [`GradientUniformBlock::rect_origin`]/`rect_size` with the gradient shader.
///
/// Built once at startup from the two named shader resources. The pipeline is
/// tied to the surface format it was created for.
pub struct LinearGradientRenderer {
    surface_format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    ubo: wgpu::Buffer,
    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
}

impl LinearGradientRenderer {
    /// Loads and compiles both gradient shaders, then builds the pipeline.
    pub fn load(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        resources: &ShaderResources,
    ) -> Result<Self, ShaderError> {
        let vert_src = resources.load(GRADIENT_VERTEX_SHADER)?;
        let frag_src = resources.load(GRADIENT_FRAGMENT_SHADER)?;

        let vert = compile_wgsl(device, GRADIENT_VERTEX_SHADER, &vert_src)?;
        let frag = compile_wgsl(device, GRADIENT_FRAGMENT_SHADER, &frag_src)?;

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(LABEL),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<GradientUniformBlock>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(LABEL),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(LABEL),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vert,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &frag,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(LABEL),
            size: std::mem::size_of::<GradientUniformBlock>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(LABEL),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        let (quad_vbo, quad_ibo) = create_quad_buffers(device, LABEL);

        log::info!("linear gradient pipeline ready ({surface_format:?})");

        Ok(Self {
            surface_format,
            pipeline,
            bind_group,
            ubo,
            quad_vbo,
            quad_ibo,
        })
    }

    #[inline]
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn render(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        block: &GradientUniformBlock,
    ) {
        if ctx.surface_format != self.surface_format {
            log::warn!(
                "gradient pipeline built for {:?}, surface is {:?}; skipping",
                self.surface_format,
                ctx.surface_format
            );
            return;
        }
        if block.rect_size[0] <= 0.0 || block.rect_size[1] <= 0.0 {
            return;
        }

        ctx.queue.write_buffer(&self.ubo, 0, bytemuck::bytes_of(block));

        let mut rpass = target.begin_pass(LABEL);
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));
        rpass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }
}

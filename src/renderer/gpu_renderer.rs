//! wgpu implementation of [`RenderSurface`].

use super::draw_list::{DrawList, FrameUniform, Vertex};
use super::pipeline_util::{color_target, depth_stencil_state, ADDITIVE_BLENDING};
use super::{RenderError, RenderSurface, SceneFrame};
use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DepthTarget;

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x3,
    2 => Float32x4,
    3 => Float32,
];

/// Fixed-function state that distinguishes the four scene pipelines.
struct PassSpec {
    label: &'static str,
    topology: wgpu::PrimitiveTopology,
    cull_mode: Option<wgpu::Face>,
    fragment: &'static str,
    blend: wgpu::BlendState,
    depth_write: bool,
}

const LIT: PassSpec = PassSpec {
    label: "Lit Pipeline",
    topology: wgpu::PrimitiveTopology::TriangleList,
    cull_mode: None,
    fragment: "fs_lit",
    blend: wgpu::BlendState::ALPHA_BLENDING,
    depth_write: true,
};

const LINES: PassSpec = PassSpec {
    label: "Line Pipeline",
    topology: wgpu::PrimitiveTopology::LineList,
    cull_mode: None,
    fragment: "fs_unlit",
    blend: wgpu::BlendState::ALPHA_BLENDING,
    depth_write: false,
};

const GLOW: PassSpec = PassSpec {
    label: "Glow Pipeline",
    topology: wgpu::PrimitiveTopology::TriangleList,
    cull_mode: Some(wgpu::Face::Front),
    fragment: "fs_unlit",
    blend: wgpu::BlendState::ALPHA_BLENDING,
    depth_write: false,
};

const SPRITES: PassSpec = PassSpec {
    label: "Sprite Pipeline",
    topology: wgpu::PrimitiveTopology::TriangleList,
    cull_mode: None,
    fragment: "fs_unlit",
    blend: ADDITIVE_BLENDING,
    depth_write: false,
};

/// A pipeline with the vertex stream it draws.
struct ScenePass {
    pipeline: wgpu::RenderPipeline,
    vertices: TypedBuffer<Vertex>,
}

/// Draws scene frames into a window surface.
///
/// Owns the [`RenderContext`], a depth target and four pipelines sharing
/// one shader: lit triangles, lines, the inside-out glow shell and
/// additive particle quads. Vertex streams are rebuilt every frame from a
/// [`DrawList`].
pub struct GpuRenderer {
    context: RenderContext,
    depth: DepthTarget,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    lit: ScenePass,
    lines: ScenePass,
    glow: ScenePass,
    sprites: ScenePass,
}

impl GpuRenderer {
    /// Build pipelines for the context's surface format.
    #[must_use]
    pub fn new(context: RenderContext) -> Self {
        let device = &context.device;
        let (width, height) = context.size();

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Uniform Buffer"),
            size: size_of::<FrameUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Frame Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../../assets/shaders/scene.wgsl").into(),
            ),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let make_pass = |spec: &PassSpec, capacity: usize| ScenePass {
            pipeline: Self::create_pipeline(
                device,
                &layout,
                &shader,
                context.format(),
                spec,
            ),
            vertices: TypedBuffer::with_capacity(device, spec.label, capacity, wgpu::BufferUsages::VERTEX),
        };
        let lit = make_pass(&LIT, 1024);
        let lines = make_pass(&LINES, 1024);
        let glow = make_pass(&GLOW, 64);
        let sprites = make_pass(&SPRITES, 2048);

        Self {
            depth: DepthTarget::new(device, width, height),
            uniform_buffer,
            bind_group,
            lit,
            lines,
            glow,
            sprites,
            context,
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        format: wgpu::TextureFormat,
        spec: &PassSpec,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(spec.label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRIBUTES,
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(spec.fragment),
                targets: &color_target(format, spec.blend),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: spec.topology,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: spec.cull_mode,
                ..Default::default()
            },
            depth_stencil: Some(depth_stencil_state(spec.depth_write)),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    /// The wrapped GPU context.
    #[must_use]
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Resize the surface and the depth target. Ignores zero sizes.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.depth = DepthTarget::new(&self.context.device, width, height);
    }

    /// Reconfigure the surface after it was lost or became outdated.
    pub fn recover(&mut self) {
        let (width, height) = self.context.size();
        log::warn!("surface lost, reconfiguring at {width}x{height}");
        self.context.reconfigure();
    }
}

impl RenderSurface for GpuRenderer {
    fn draw(&mut self, frame: SceneFrame<'_>) -> Result<(), RenderError> {
        let list = DrawList::build(frame);
        let device = &self.context.device;
        let queue = &self.context.queue;
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&list.uniform));
        let _ = self.lit.vertices.write(device, queue, &list.lit);
        let _ = self.lines.vertices.write(device, queue, &list.lines);
        let _ = self.glow.vertices.write(device, queue, &list.glow);
        let _ = self.sprites.vertices.write(device, queue, &list.sprites);

        let output = self.context.get_next_frame()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let [r, g, b, a] = list.clear.map(f64::from);

        let mut encoder = self.context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_bind_group(0, &self.bind_group, &[]);
            // Opaque-ish surfaces first so translucent layers depth test
            // against them
            for scene_pass in [&self.lit, &self.lines, &self.glow, &self.sprites] {
                if scene_pass.vertices.is_empty() {
                    continue;
                }
                pass.set_pipeline(&scene_pass.pipeline);
                pass.set_vertex_buffer(0, scene_pass.vertices.buffer().slice(..));
                pass.draw(0..scene_pass.vertices.count() as u32, 0..1);
            }
        }
        self.context.submit(encoder);
        output.present();
        Ok(())
    }
}

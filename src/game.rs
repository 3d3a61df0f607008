//! Frame orchestration
//!
//! [`Game`] owns every GPU resource of the sample: the backend, the one
//! render pipeline, the shared uniform buffer, the scene's geometry
//! buffers, and the debug UI. Its lifecycle is the fixed sequence
//! initialize -> repeated (update; draw) -> drop, driven by the event loop
//! in `main`.

use crate::backend::{BackendResult, WgpuBackend, DEPTH_FORMAT};
use crate::egui_integration::EguiIntegration;
use crate::geometry::GeometryBuffer;
use crate::mesh::{scene_meshes, Vertex};
use crate::params::FrameParams;
use crate::ui::{self, UiState};
use crate::GameConfig;
use std::collections::VecDeque;
use std::sync::Arc;
use winit::event::WindowEvent;
use winit::window::Window as WinitWindow;

const SHADER_SOURCE: &str = include_str!("../shaders/basic.wgsl");

/// Number of frame times kept for the FPS moving average.
const FPS_WINDOW: usize = 60;

/// The frame orchestrator.
pub struct Game {
    backend: WgpuBackend,
    egui: EguiIntegration,

    pipeline: wgpu::RenderPipeline,
    /// Shared constant buffer, re-uploaded before each mesh's draw call.
    param_buffer: wgpu::Buffer,
    param_bind_group: wgpu::BindGroup,

    /// Draw order is insertion order; no sorting, no culling.
    meshes: Vec<GeometryBuffer>,

    ui: UiState,
    frame_times: VecDeque<f32>,
    fps: f32,
}

impl Game {
    /// One-time initialization: device, UI overlay, shaders + pipeline,
    /// shared constant buffer, and the fixed scene. Any failure here is a
    /// fatal startup fault for the caller.
    pub fn new(window: Arc<WinitWindow>, config: &GameConfig) -> BackendResult<Self> {
        let backend = WgpuBackend::new(Arc::clone(&window), config.vsync)?;

        // UI overlay context bound to the window and device. Dropped with
        // Game, before the backend fields declared after it.
        let egui = EguiIntegration::new(backend.device(), backend.surface_format(), &window);

        let device = backend.device();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Basic Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let param_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Params Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let param_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Params Buffer"),
            size: FrameParams::buffer_size(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let param_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Params Bind Group"),
            layout: &param_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: param_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Basic Pipeline Layout"),
            bind_group_layouts: &[&param_layout],
            push_constant_ranges: &[],
        });

        // Topology, input layout, and both shader stages are fixed for the
        // program lifetime; there is no per-object pipeline switching.
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Basic Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: backend.surface_format(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let meshes = scene_meshes()
            .iter()
            .map(|mesh| GeometryBuffer::new(&backend, mesh))
            .collect::<BackendResult<Vec<_>>>()?;

        for mesh in &meshes {
            log::info!(
                "Scene mesh {:?}: {} vertices, {} triangles",
                mesh.name(),
                mesh.vertex_count(),
                mesh.triangle_count()
            );
        }

        Ok(Self {
            backend,
            egui,
            pipeline,
            param_buffer,
            param_bind_group,
            meshes,
            ui: UiState::new(),
            frame_times: VecDeque::with_capacity(FPS_WINDOW),
            fps: 0.0,
        })
    }

    /// Route a window event to the UI overlay first. Returns true when the
    /// overlay consumed it; the caller must then skip its own input
    /// handling for that event.
    pub fn on_window_event(&mut self, window: &WinitWindow, event: &WindowEvent) -> bool {
        self.egui.on_window_event(window, event)
    }

    /// Whether the UI overlay currently wants keyboard input.
    pub fn wants_keyboard(&self) -> bool {
        self.egui.wants_keyboard_input()
    }

    /// Whether the UI overlay currently wants pointer input.
    pub fn wants_pointer(&self) -> bool {
        self.egui.wants_pointer_input()
    }

    /// Per-frame update: refresh timing and run the UI widget pass. The UI
    /// mutates shared state (background color, shader params, counters)
    /// that the following [`Game::draw`] reads.
    pub fn update(&mut self, window: &WinitWindow, delta_time: f32) {
        self.update_fps(delta_time);

        self.egui.begin_frame(window);

        let ctx = self.egui.context().clone();
        let size = self.backend.surface_size();
        ui::build(&ctx, &mut self.ui, &self.meshes, self.fps, size);

        self.egui.end_frame(window);
    }

    /// Per-frame draw: clear, draw every mesh with the current shared
    /// parameter snapshot, overlay the UI, present.
    pub fn draw(&mut self) -> BackendResult<()> {
        let frame = self.backend.begin_frame()?;

        let mut encoder =
            self.backend
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Frame Encoder"),
                });

        // The snapshot for this frame: taken once, uploaded unchanged for
        // every mesh. There is no per-mesh variation by design.
        let snapshot = self.ui.params;
        let bg = self.ui.background;

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: bg[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.backend.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.param_bind_group, &[]);

            for mesh in &self.meshes {
                self.backend
                    .queue()
                    .write_buffer(&self.param_buffer, 0, bytemuck::bytes_of(&snapshot));
                mesh.draw(&mut pass);
            }
        }

        self.egui.render(
            self.backend.device(),
            self.backend.queue(),
            &mut encoder,
            &frame.view,
            frame.width,
            frame.height,
        );

        self.backend.queue().submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.backend.resize(width, height);
    }

    pub fn meshes(&self) -> &[GeometryBuffer] {
        &self.meshes
    }

    fn update_fps(&mut self, dt: f32) {
        if self.frame_times.len() >= FPS_WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(dt);

        let sum: f32 = self.frame_times.iter().sum();
        if sum > 0.0 {
            self.fps = self.frame_times.len() as f32 / sum;
        }
    }
}

//! GPU-resident geometry buffers
//!
//! A [`GeometryBuffer`] owns the write-once vertex and index buffers for a
//! single static mesh, plus the counts captured at creation time that the
//! indexed draw call relies on.

use crate::backend::{BackendResult, WgpuBackend};
use crate::mesh::MeshData;
use wgpu::util::DeviceExt;

/// One static mesh on the GPU. Created once during scene setup, never
/// mutated afterwards.
pub struct GeometryBuffer {
    name: String,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_count: u32,
}

impl GeometryBuffer {
    /// Upload `mesh` into freshly allocated vertex/index buffers.
    ///
    /// Fails before touching the device if the mesh has an empty vertex or
    /// index array; the sample treats any later device-level failure as a
    /// fatal startup fault.
    pub fn new(backend: &WgpuBackend, mesh: &MeshData) -> BackendResult<Self> {
        mesh.validate()?;

        let vertex_buffer =
            backend
                .device()
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{} Vertex Buffer", mesh.name)),
                    contents: mesh.vertex_bytes(),
                    usage: wgpu::BufferUsages::VERTEX,
                });

        let index_buffer =
            backend
                .device()
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{} Index Buffer", mesh.name)),
                    contents: mesh.index_bytes(),
                    usage: wgpu::BufferUsages::INDEX,
                });

        Ok(Self {
            name: mesh.name.clone(),
            vertex_buffer,
            index_buffer,
            vertex_count: mesh.vertex_count() as u32,
            index_count: mesh.index_count() as u32,
        })
    }

    /// Bind this mesh's buffers and issue the indexed draw.
    ///
    /// Buffer bindings are pipeline state shared between meshes, so both
    /// are rebound unconditionally on every call.
    pub fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}

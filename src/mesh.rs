//! Mesh data structures and generation
//!
//! CPU-side mesh data only; [`crate::geometry::GeometryBuffer`] owns the
//! GPU-resident counterpart.

use crate::backend::{BackendError, BackendResult};
use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// A position + color vertex, laid out to match the shader's input
/// attributes exactly: three position floats, then four color floats,
/// no padding. Plain float arrays rather than glam vectors so the
/// 16-byte alignment of SIMD `Vec4` cannot introduce padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Vertex buffer layout for the render pipeline. Attribute offsets are
    /// append-aligned: color starts immediately after position.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 12,
                shader_location: 1,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// A named mesh with vertex and index data
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Triangle count. Index counts that are not a multiple of 3 are a
    /// caller bug and simply truncate here.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get vertex data as bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Get index data as bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Reject geometry that cannot produce a valid indexed draw call.
    pub fn validate(&self) -> BackendResult<()> {
        if self.vertices.is_empty() {
            return Err(BackendError::InvalidMesh {
                name: self.name.clone(),
                reason: "empty vertex array".into(),
            });
        }
        if self.indices.is_empty() {
            return Err(BackendError::InvalidMesh {
                name: self.name.clone(),
                reason: "empty index array".into(),
            });
        }
        Ok(())
    }

    /// A single triangle with red/blue/green corners.
    pub fn triangle() -> Self {
        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let green = Vec4::new(0.0, 1.0, 0.0, 1.0);
        let blue = Vec4::new(0.0, 0.0, 1.0, 1.0);

        let mut mesh = MeshData::new("Triangle");
        mesh.vertices = vec![
            Vertex::new(Vec3::new(0.0, 0.5, 0.0), red),
            Vertex::new(Vec3::new(0.5, -0.5, 0.0), blue),
            Vertex::new(Vec3::new(-0.5, -0.5, 0.0), green),
        ];
        mesh.indices = vec![0, 1, 2];
        mesh
    }

    /// A rhombus built from two triangles sharing the horizontal diagonal.
    pub fn rhombus() -> Self {
        let orange = Vec4::new(1.0, 0.65, 0.0, 1.0);
        let pink = Vec4::new(1.0, 0.0, 1.0, 1.0);

        let mut mesh = MeshData::new("Rhombus");
        mesh.vertices = vec![
            Vertex::new(Vec3::new(-0.5, 0.0, 0.0), orange), // left
            Vertex::new(Vec3::new(0.0, 0.5, 0.0), pink),    // top
            Vertex::new(Vec3::new(0.5, 0.0, 0.0), orange),  // right
            Vertex::new(Vec3::new(0.0, -0.5, 0.0), pink),   // bottom
        ];
        mesh.indices = vec![0, 1, 2, 0, 2, 3];
        mesh
    }

    /// A fan of `petal_count` independent triangles around the origin.
    ///
    /// Petal `i` spans the arc from `2π·i/petal_count` to
    /// `2π·(i+1)/petal_count`: its two base vertices sit on the circle of
    /// `radius` at the arc endpoints, and its tip sits at
    /// `radius + petal_length` along the arc bisector. No vertices are
    /// shared between petals, so petal `i` uses indices
    /// `{3i, 3i+1, 3i+2}`.
    pub fn petal_fan(petal_count: u32, radius: f32, petal_length: f32) -> Self {
        let yellow = Vec4::new(1.0, 1.0, 0.0, 1.0);

        let mut mesh = MeshData::new("Sunflower Petals");
        mesh.vertices.reserve(petal_count as usize * 3);
        mesh.indices.reserve(petal_count as usize * 3);

        for i in 0..petal_count {
            let angle = (i as f32 / petal_count as f32) * std::f32::consts::TAU;
            let next_angle = ((i + 1) as f32 / petal_count as f32) * std::f32::consts::TAU;
            let mid_angle = (angle + next_angle) / 2.0;

            let base1 = Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0);
            let base2 = Vec3::new(next_angle.cos() * radius, next_angle.sin() * radius, 0.0);
            let tip = Vec3::new(
                mid_angle.cos() * (radius + petal_length),
                mid_angle.sin() * (radius + petal_length),
                0.0,
            );

            mesh.vertices.push(Vertex::new(base1, yellow));
            mesh.vertices.push(Vertex::new(base2, yellow));
            mesh.vertices.push(Vertex::new(tip, yellow));

            let start = i * 3;
            mesh.indices.extend_from_slice(&[start, start + 1, start + 2]);
        }

        mesh
    }
}

/// Number of petals in the demo scene's sunflower.
pub const PETAL_COUNT: u32 = 20;
/// Radius of the sunflower's petal base circle.
pub const PETAL_RADIUS: f32 = 0.5;
/// Distance from the base circle to each petal tip.
pub const PETAL_LENGTH: f32 = 0.2;

/// The fixed demo scene, in draw order.
pub fn scene_meshes() -> Vec<MeshData> {
    vec![
        MeshData::triangle(),
        MeshData::rhombus(),
        MeshData::petal_fan(PETAL_COUNT, PETAL_RADIUS, PETAL_LENGTH),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn test_counts_echo_construction() {
        let mesh = MeshData::triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.vertex_bytes().len(), 3 * 28);
        assert_eq!(mesh.index_bytes().len(), 3 * 4);
    }

    #[test]
    fn test_triangle_counts() {
        assert_eq!(MeshData::triangle().triangle_count(), 1);
        assert_eq!(MeshData::rhombus().triangle_count(), 2);
        assert_eq!(MeshData::petal_fan(20, 0.5, 0.2).triangle_count(), 20);
    }

    #[test]
    fn test_petal_fan_is_deterministic() {
        let a = MeshData::petal_fan(20, 0.5, 0.2);
        let b = MeshData::petal_fan(20, 0.5, 0.2);
        assert_eq!(a, b);
        assert_eq!(a.vertex_bytes(), b.vertex_bytes());
        assert_eq!(a.index_bytes(), b.index_bytes());
    }

    #[test]
    fn test_petal_fan_geometry() {
        let radius = 0.5;
        let petal_length = 0.2;
        let fan = MeshData::petal_fan(20, radius, petal_length);
        assert_eq!(fan.vertex_count(), 60);

        for petal in fan.vertices.chunks(3) {
            let base1 = petal[0].position().length();
            let base2 = petal[1].position().length();
            let tip = petal[2].position().length();
            assert!((base1 - radius).abs() < 1e-6, "base1 off circle: {base1}");
            assert!((base2 - radius).abs() < 1e-6, "base2 off circle: {base2}");
            assert!(
                (tip - (radius + petal_length)).abs() < 1e-6,
                "tip off circle: {tip}"
            );
        }
    }

    #[test]
    fn test_petal_fan_indices_are_independent_triangles() {
        let fan = MeshData::petal_fan(20, 0.5, 0.2);
        for (i, petal) in fan.indices.chunks(3).enumerate() {
            let start = i as u32 * 3;
            assert_eq!(petal, &[start, start + 1, start + 2]);
        }
    }

    #[test]
    fn test_scene_order_and_totals() {
        let meshes = scene_meshes();
        let names: Vec<&str> = meshes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Triangle", "Rhombus", "Sunflower Petals"]);

        let total_tris: usize = meshes.iter().map(|m| m.triangle_count()).sum();
        let total_verts: usize = meshes.iter().map(|m| m.vertex_count()).sum();
        assert_eq!(total_tris, 1 + 2 + 20);
        assert_eq!(total_verts, 3 + 4 + 60);
    }

    #[test]
    fn test_validate_rejects_empty_geometry() {
        let empty = MeshData::new("empty");
        assert!(empty.validate().is_err());

        let mut no_indices = MeshData::new("no-indices");
        no_indices.vertices = vec![Vertex::new(Vec3::ZERO, Vec4::ONE)];
        assert!(no_indices.validate().is_err());

        assert!(MeshData::triangle().validate().is_ok());
    }
}

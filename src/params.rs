//! The shared shader parameter block
//!
//! One [`FrameParams`] instance is owned by the frame orchestrator, mutated
//! by the UI between frames, and uploaded as a snapshot before each mesh's
//! draw call. Every mesh in a frame renders with the same tint and offset.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// Uniform data read by the vertex shader. Field order and padding match
/// the WGSL `FrameParams` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameParams {
    pub color_tint: Vec4,
    pub offset: Vec3,
    pub _padding: f32,
}

impl FrameParams {
    pub fn new(color_tint: Vec4, offset: Vec3) -> Self {
        Self {
            color_tint,
            offset,
            _padding: 0.0,
        }
    }

    /// Size of the backing uniform buffer: the struct size rounded up to
    /// the 16-byte minimum constant-buffer alignment.
    pub fn buffer_size() -> u64 {
        let size = std::mem::size_of::<Self>() as u64;
        (size + 15) / 16 * 16
    }
}

impl Default for FrameParams {
    fn default() -> Self {
        Self::new(Vec4::new(1.0, 0.20, 0.25, 0.50), Vec3::new(0.75, 0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_layout() {
        assert_eq!(std::mem::size_of::<FrameParams>(), 32);
        assert_eq!(std::mem::offset_of!(FrameParams, color_tint), 0);
        assert_eq!(std::mem::offset_of!(FrameParams, offset), 16);
    }

    #[test]
    fn test_buffer_size_is_aligned() {
        let size = FrameParams::buffer_size();
        assert!(size >= std::mem::size_of::<FrameParams>() as u64);
        assert_eq!(size % 16, 0);
    }

    #[test]
    fn test_snapshot_copies_are_byte_identical() {
        let params = FrameParams::new(Vec4::new(0.1, 0.2, 0.3, 0.4), Vec3::new(-0.5, 0.0, 0.5));
        let snapshot = params;
        assert_eq!(bytemuck::bytes_of(&params), bytemuck::bytes_of(&snapshot));
    }
}

//! Sunflower - a minimal wgpu rendering sample
//!
//! Initializes a graphics device, builds a handful of static meshes (a
//! triangle, a rhombus, and a procedurally generated "sunflower" fan of
//! petal triangles), and renders them each frame while overlaying an
//! immediate-mode debug UI built with egui.
//!
//! The interesting parts are [`geometry::GeometryBuffer`] (GPU-resident
//! vertex/index data for one static mesh) and [`game::Game`] (per-frame
//! update/draw orchestration over a shared shader parameter block);
//! everything else is glue around wgpu, winit, and egui.

pub mod backend;
pub mod egui_integration;
pub mod game;
pub mod geometry;
pub mod mesh;
pub mod params;
pub mod ui;

pub use backend::{BackendError, BackendResult, WgpuBackend};
pub use game::Game;
pub use geometry::GeometryBuffer;
pub use mesh::{MeshData, Vertex};
pub use params::FrameParams;

/// Configuration for the sample application
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window title
    pub title: String,
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    /// Enable vsync (synchronized presentation); off allows tearing
    pub vsync: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Sunflower".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

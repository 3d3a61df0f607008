//! Debug UI state and the per-frame widget pass
//!
//! All previously-global UI knobs live in [`UiState`], owned by the frame
//! orchestrator and handed to [`build`] by mutable reference each frame.

use crate::geometry::GeometryBuffer;
use crate::params::FrameParams;

/// Mutable state behind the debug overlay.
pub struct UiState {
    /// Background clear color, edited by the color picker.
    pub background: [f32; 4],
    /// Whether the diagnostics window is shown.
    pub show_diagnostics: bool,
    /// The toy counter.
    pub smileys: i32,
    /// Tint/offset uploaded to the vertex shader each draw.
    pub params: FrameParams,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            background: [1.0, 0.0, 0.5, 1.0],
            show_diagnostics: true,
            smileys: 0,
            params: FrameParams::default(),
        }
    }

    /// Flip diagnostics visibility. Called once per discrete button press.
    pub fn toggle_diagnostics(&mut self) {
        self.show_diagnostics = !self.show_diagnostics;
    }

    pub fn add_smiley(&mut self) {
        self.smileys += 1;
    }

    pub fn remove_smiley(&mut self) {
        self.smileys -= 1;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Declare this frame's widgets. Reads and mutates `state` in place; the
/// mesh list is only read for the stats display.
pub fn build(
    ctx: &egui::Context,
    state: &mut UiState,
    meshes: &[GeometryBuffer],
    fps: f32,
    window_size: (u32, u32),
) {
    egui::Window::new("Sunflower Debug")
        .default_pos([10.0, 10.0])
        .default_size([260.0, 420.0])
        .show(ctx, |ui| {
            ui.heading("Performance");
            ui.label(format!("Framerate: {fps:.1} fps"));
            ui.label(format!(
                "Frame time: {:.2} ms",
                if fps > 0.0 { 1000.0 / fps } else { 0.0 }
            ));
            ui.label(format!(
                "Window Resolution: {}x{}",
                window_size.0, window_size.1
            ));
            ui.separator();

            if ui.button("Toggle Diagnostics").clicked() {
                state.toggle_diagnostics();
            }
            ui.color_edit_button_rgba_unmultiplied(&mut state.background);
            ui.label("Background Color");
            ui.separator();

            ui.heading("Meshes");
            let mut total_tris = 0;
            let mut total_verts = 0;
            for mesh in meshes {
                ui.label(mesh.name());
                ui.label(format!("    Tri Count: {}", mesh.triangle_count()));
                ui.label(format!("    Vertex Count: {}", mesh.vertex_count()));
                total_tris += mesh.triangle_count();
                total_verts += mesh.vertex_count();
            }
            ui.label(format!("TOTAL Tri: {total_tris}"));
            ui.label(format!("TOTAL Vertex: {total_verts}"));
            ui.separator();

            ui.heading("Shader Params");
            let tint = &mut state.params.color_tint;
            ui.add(egui::Slider::new(&mut tint.x, 0.0..=1.0).text("Red"));
            ui.add(egui::Slider::new(&mut tint.y, 0.0..=1.0).text("Green"));
            ui.add(egui::Slider::new(&mut tint.z, 0.0..=1.0).text("Blue"));
            ui.add(egui::Slider::new(&mut tint.w, 0.0..=1.0).text("Alpha"));

            let offset = &mut state.params.offset;
            ui.add(egui::Slider::new(&mut offset.x, -1.0..=1.0).text("X offset"));
            ui.add(egui::Slider::new(&mut offset.y, -1.0..=1.0).text("Y offset"));
            ui.add(egui::Slider::new(&mut offset.z, -1.0..=1.0).text("Z offset"));
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("+1 Smiley").clicked() {
                    state.add_smiley();
                }
                if ui.button("-1 Smiley").clicked() {
                    state.remove_smiley();
                }
            });
            ui.add(egui::Slider::new(&mut state.smileys, 0..=100).text("How many Smileys?"));

            let bg = state.background;
            let garden_color = egui::Color32::from_rgb(
                (bg[0] * 255.0) as u8,
                (bg[1] * 255.0) as u8,
                (bg[2] * 255.0) as u8,
            );
            ui.colored_label(garden_color, "Your Smiley Garden");
            egui::ScrollArea::vertical()
                .max_height(120.0)
                .show(ui, |ui| {
                    for n in 0..state.smileys {
                        ui.label(format!("{n:4}: :)"));
                    }
                });
        });

    if state.show_diagnostics {
        egui::Window::new("Diagnostics")
            .default_pos([290.0, 10.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ctx.inspection_ui(ui);
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_once_per_press() {
        let mut state = UiState::new();
        assert!(state.show_diagnostics);
        state.toggle_diagnostics();
        assert!(!state.show_diagnostics);
        state.toggle_diagnostics();
        assert!(state.show_diagnostics);
    }

    #[test]
    fn test_smiley_counter_round_trips() {
        let mut state = UiState::new();
        state.add_smiley();
        state.add_smiley();
        state.remove_smiley();
        assert_eq!(state.smileys, 1);
    }

    #[test]
    fn test_initial_state_matches_defaults() {
        let state = UiState::new();
        assert_eq!(state.background, [1.0, 0.0, 0.5, 1.0]);
        assert_eq!(state.smileys, 0);
        assert_eq!(state.params, FrameParams::default());
    }
}

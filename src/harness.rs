//! Headless test harness for driving a drawing session without a window.

use glam::Vec3;

use crate::state::{AppState, MeshId, Mode};
use crate::viewport::picking::{self, Ray};

/// Headless harness — wraps the session state and exposes the pointer
/// and toolbar interactions as plain method calls.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new empty session with default settings.
    pub fn new() -> Self {
        Self {
            state: AppState::with_default_settings(),
        }
    }

    // ── Toolbar actions ───────────────────────────────────────

    pub fn toggle_draw(&mut self) {
        self.state.toggle_draw();
    }

    pub fn enter_move(&mut self) {
        self.state.enter_move();
    }

    pub fn enter_vertex_edit(&mut self) {
        self.state.enter_vertex_edit();
    }

    /// Extrude button: extrude the recorded outline points.
    pub fn extrude(&mut self) -> Option<MeshId> {
        self.state.extrude_active_outline()
    }

    // ── Pointer actions ───────────────────────────────────────

    /// Left click on the ground plane at world (x, z). Adds an outline
    /// point in Draw mode, does nothing otherwise.
    pub fn click_ground(&mut self, x: f32, z: f32) {
        if !self.state.mode.is_drawing() {
            return;
        }
        let ray = Ray {
            origin: Vec3::new(x, 10.0, z),
            direction: Vec3::NEG_Y,
        };
        let half_w = crate::state::scene::GROUND_WIDTH * 0.5;
        let half_d = crate::state::scene::GROUND_DEPTH * 0.5;
        if let Some(point) = picking::pick_ground_point(&ray, half_w, half_d) {
            self.state.add_outline_point(point);
        }
    }

    /// Right click while drawing: complete the outline.
    pub fn complete(&mut self) -> Option<MeshId> {
        self.state.complete_outline()
    }

    /// Cast a pick ray into the scene and return the mesh hit, if any.
    pub fn pick(&self, origin: Vec3, direction: Vec3) -> Option<MeshId> {
        let ray = Ray { origin, direction };
        picking::pick_nearest(&ray, self.state.scene.meshes())
    }

    /// Left click in Move mode: select the mesh under the ray. A miss
    /// leaves the current selection untouched.
    pub fn click_select(&mut self, origin: Vec3, direction: Vec3) -> Option<MeshId> {
        if self.state.mode != Mode::Move {
            return None;
        }
        let hit = self.pick(origin, direction)?;
        self.state.scene.select(&hit);
        Some(hit)
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn mode_label(&self) -> &'static str {
        self.state.mode_label()
    }

    pub fn solid_count(&self) -> usize {
        self.state.scene.solid_count()
    }

    pub fn current_point_count(&self) -> usize {
        self.state.outline.current().len()
    }

    pub fn selected(&self) -> Option<&MeshId> {
        self.state.scene.selected()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicks_outside_draw_mode_add_nothing() {
        let mut h = TestHarness::new();
        h.click_ground(1.0, 1.0);
        assert_eq!(h.current_point_count(), 0);
    }

    #[test]
    fn test_clicks_off_the_ground_add_nothing() {
        let mut h = TestHarness::new();
        h.toggle_draw();
        h.click_ground(100.0, 0.0);
        assert_eq!(h.current_point_count(), 0);
    }

    #[test]
    fn test_draw_and_complete() {
        let mut h = TestHarness::new();
        h.toggle_draw();
        h.click_ground(-1.0, -1.0);
        h.click_ground(1.0, -1.0);
        h.click_ground(0.0, 1.0);
        let id = h.complete().expect("solid created");

        assert_eq!(h.solid_count(), 1);
        assert_eq!(h.mode(), Mode::Move);
        assert_eq!(h.selected(), Some(&id));
    }

    #[test]
    fn test_pick_extruded_solid() {
        let mut h = TestHarness::new();
        h.toggle_draw();
        h.click_ground(-1.0, -1.0);
        h.click_ground(1.0, -1.0);
        h.click_ground(0.0, 1.0);
        let id = h.complete().unwrap();

        // A ray straight down through the solid hits it before the ground
        let hit = h.pick(Vec3::new(0.0, 10.0, -0.5), Vec3::NEG_Y);
        assert_eq!(hit.as_ref(), Some(&id));
    }
}

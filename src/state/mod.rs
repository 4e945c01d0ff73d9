//! Session state: interaction mode, outline strips, scene meshes, settings.

pub mod mode;
pub mod outline;
pub mod scene;
pub mod settings;

pub use mode::Mode;
pub use outline::OutlineState;
pub use scene::{MeshId, SceneStore};
pub use settings::AppSettings;

use glam::Vec3;

use crate::build;

/// Everything the session mutates, behind one struct so the UI, the
/// viewport, and the tests all go through the same transitions.
pub struct AppState {
    pub mode: Mode,
    pub outline: OutlineState,
    pub scene: SceneStore,
    pub settings: AppSettings,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            outline: OutlineState::new(),
            scene: SceneStore::new(),
            settings: AppSettings::load(),
        }
    }

    /// Like `new` but without touching the settings file (tests).
    pub fn with_default_settings() -> Self {
        Self {
            mode: Mode::default(),
            outline: OutlineState::new(),
            scene: SceneStore::new(),
            settings: AppSettings::default(),
        }
    }

    pub fn mode_label(&self) -> &'static str {
        self.mode.label()
    }

    /// Toggle Draw mode on/off. Entering Draw clears the selection;
    /// leaving keeps any points already placed.
    pub fn toggle_draw(&mut self) {
        if self.mode == Mode::Draw {
            self.mode = Mode::Idle;
        } else {
            self.mode = Mode::Draw;
            self.scene.clear_selection();
        }
    }

    pub fn enter_move(&mut self) {
        self.mode = Mode::Move;
        self.scene.clear_selection();
    }

    pub fn enter_vertex_edit(&mut self) {
        self.mode = Mode::VertexEdit;
        self.scene.clear_selection();
    }

    /// Record a picked ground point. Ignored outside Draw mode.
    pub fn add_outline_point(&mut self, point: Vec3) {
        if !self.mode.is_drawing() {
            return;
        }
        self.outline.add_point(point);
    }

    /// Complete the in-progress outline (right click while drawing):
    /// extrude all recorded points into the solid, then start a fresh
    /// strip. Does nothing until the strip has more than 2 points.
    pub fn complete_outline(&mut self) -> Option<MeshId> {
        if !self.outline.can_complete() {
            return None;
        }
        let points = self.outline.flattened();
        let id = self.extrude_and_select(&points)?;
        // Only retire the strip once a solid actually exists
        self.outline.finish_current();
        Some(id)
    }

    /// Extrude via the toolbar button. Uses every recorded point but
    /// leaves the in-progress strip open.
    pub fn extrude_active_outline(&mut self) -> Option<MeshId> {
        if !self.outline.can_complete() {
            return None;
        }
        let points = self.outline.flattened();
        self.extrude_and_select(&points)
    }

    fn extrude_and_select(&mut self, points: &[Vec3]) -> Option<MeshId> {
        match build::extrude_outline(points, self.settings.extrude.depth) {
            Ok(mesh) => {
                let id = self.scene.replace_solid(mesh);
                // Hand the new solid to the user ready to manipulate
                self.enter_move();
                self.scene.select(&id);
                Some(id)
            }
            Err(e) => {
                tracing::warn!("extrusion failed: {e}");
                None
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_default_settings()
    }
}

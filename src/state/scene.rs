use std::collections::HashMap;

use crate::build::apply_color;
use crate::viewport::mesh::{self, MeshData};

pub type MeshId = String;

/// Ground plane extents (world units).
pub const GROUND_WIDTH: f32 = 10.0;
pub const GROUND_DEPTH: f32 = 10.0;

pub const GROUND_COLOR: [f32; 3] = [0.35, 0.38, 0.35];
pub const SOLID_COLOR: [f32; 3] = [0.6, 0.6, 0.65];
/// Selection highlight (emissive-style tint).
pub const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Pickable meshes in the session: the ground plane plus at most one
/// extruded solid. The store owns the solid exclusively, so replacing it
/// releases the previous one.
pub struct SceneStore {
    meshes: HashMap<MeshId, MeshData>,
    base_colors: HashMap<MeshId, [f32; 3]>,
    solid_id: Option<MeshId>,
    selected: Option<MeshId>,
    /// Bumped on every mesh or highlight change (GPU re-upload trigger).
    version: u64,
}

impl SceneStore {
    pub const GROUND_ID: &'static str = "ground";

    pub fn new() -> Self {
        let mut meshes = HashMap::new();
        let mut base_colors = HashMap::new();
        meshes.insert(
            Self::GROUND_ID.to_string(),
            mesh::ground(GROUND_WIDTH, GROUND_DEPTH, GROUND_COLOR),
        );
        base_colors.insert(Self::GROUND_ID.to_string(), GROUND_COLOR);

        Self {
            meshes,
            base_colors,
            solid_id: None,
            selected: None,
            version: 1,
        }
    }

    pub fn meshes(&self) -> &HashMap<MeshId, MeshData> {
        &self.meshes
    }

    pub fn meshes_clone(&self) -> HashMap<MeshId, MeshData> {
        self.meshes.clone()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn solid_id(&self) -> Option<&MeshId> {
        self.solid_id.as_ref()
    }

    pub fn solid_count(&self) -> usize {
        usize::from(self.solid_id.is_some())
    }

    pub fn selected(&self) -> Option<&MeshId> {
        self.selected.as_ref()
    }

    /// Install a freshly extruded solid, releasing the previous one (at
    /// most one solid is ever live). Returns the new mesh id.
    pub fn replace_solid(&mut self, mesh: MeshData) -> MeshId {
        if let Some(old_id) = self.solid_id.take() {
            if self.selected.as_ref() == Some(&old_id) {
                self.selected = None;
            }
            self.meshes.remove(&old_id);
            self.base_colors.remove(&old_id);
        }

        let id = uuid::Uuid::new_v4().to_string();
        self.meshes.insert(id.clone(), mesh);
        self.base_colors.insert(id.clone(), SOLID_COLOR);
        self.solid_id = Some(id.clone());
        self.version += 1;
        id
    }

    /// Select a mesh, clearing the previous highlight first.
    pub fn select(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            return;
        }
        if !self.meshes.contains_key(id) {
            tracing::warn!("select: unknown mesh id {id}");
            return;
        }

        self.clear_selection();
        if let Some(mesh) = self.meshes.get_mut(id) {
            apply_color(mesh, HIGHLIGHT_COLOR);
        }
        self.selected = Some(id.to_string());
        self.version += 1;
    }

    /// Clear the selection and restore the mesh's base color.
    pub fn clear_selection(&mut self) {
        let Some(id) = self.selected.take() else {
            return;
        };
        if let (Some(mesh), Some(&base)) =
            (self.meshes.get_mut(&id), self.base_colors.get(&id))
        {
            apply_color(mesh, base);
        }
        self.version += 1;
    }

    /// First vertex color of a mesh (test inspection helper).
    pub fn mesh_color(&self, id: &str) -> Option<[f32; 3]> {
        self.meshes.get(id).and_then(|m| {
            if m.vertices.len() < 9 {
                return None;
            }
            Some([m.vertices[6], m.vertices[7], m.vertices[8]])
        })
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh::ground;

    fn small_solid() -> MeshData {
        ground(1.0, 1.0, SOLID_COLOR)
    }

    #[test]
    fn test_new_has_ground_only() {
        let s = SceneStore::new();
        assert_eq!(s.meshes().len(), 1);
        assert!(s.meshes().contains_key(SceneStore::GROUND_ID));
        assert_eq!(s.solid_count(), 0);
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_replace_solid_releases_previous() {
        let mut s = SceneStore::new();
        let first = s.replace_solid(small_solid());
        assert_eq!(s.solid_count(), 1);
        assert_eq!(s.meshes().len(), 2);

        let second = s.replace_solid(small_solid());
        assert_ne!(first, second);
        assert_eq!(s.solid_count(), 1);
        assert_eq!(s.meshes().len(), 2);
        assert!(!s.meshes().contains_key(&first));
    }

    #[test]
    fn test_select_applies_highlight() {
        let mut s = SceneStore::new();
        let id = s.replace_solid(small_solid());
        s.select(&id);
        assert_eq!(s.selected(), Some(&id));
        assert_eq!(s.mesh_color(&id), Some(HIGHLIGHT_COLOR));
    }

    #[test]
    fn test_select_new_clears_previous_highlight() {
        let mut s = SceneStore::new();
        let id = s.replace_solid(small_solid());
        s.select(&id);
        s.select(SceneStore::GROUND_ID);

        assert_eq!(s.selected().map(|i| i.as_str()), Some(SceneStore::GROUND_ID));
        assert_eq!(s.mesh_color(&id), Some(SOLID_COLOR));
        assert_eq!(s.mesh_color(SceneStore::GROUND_ID), Some(HIGHLIGHT_COLOR));
    }

    #[test]
    fn test_clear_selection_restores_base_color() {
        let mut s = SceneStore::new();
        s.select(SceneStore::GROUND_ID);
        s.clear_selection();
        assert!(s.selected().is_none());
        assert_eq!(s.mesh_color(SceneStore::GROUND_ID), Some(GROUND_COLOR));
    }

    #[test]
    fn test_replace_drops_selection_of_old_solid() {
        let mut s = SceneStore::new();
        let first = s.replace_solid(small_solid());
        s.select(&first);
        let second = s.replace_solid(small_solid());
        // Old solid (and its selection) are gone; the new one is unselected
        assert!(s.selected().is_none());
        assert_eq!(s.solid_id(), Some(&second));
    }

    #[test]
    fn test_version_bumps_on_changes() {
        let mut s = SceneStore::new();
        let v0 = s.version();
        let id = s.replace_solid(small_solid());
        assert!(s.version() > v0);
        let v1 = s.version();
        s.select(&id);
        assert!(s.version() > v1);
    }
}

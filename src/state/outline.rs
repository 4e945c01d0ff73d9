use glam::Vec3;

/// Polygon outlines drawn on the ground plane.
///
/// The last strip is always the one being drawn; earlier strips are
/// complete. Points are world-space pick results, immutable once captured.
pub struct OutlineState {
    strips: Vec<Vec<Vec3>>,
}

impl OutlineState {
    pub fn new() -> Self {
        Self {
            strips: vec![Vec::new()],
        }
    }

    /// Append a picked point to the in-progress strip.
    pub fn add_point(&mut self, point: Vec3) {
        // strips always holds at least the in-progress entry
        self.strips.last_mut().expect("in-progress strip").push(point);
    }

    /// The strip currently being drawn.
    pub fn current(&self) -> &[Vec3] {
        self.strips.last().map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// A strip can be completed once it has strictly more than 2 points.
    pub fn can_complete(&self) -> bool {
        self.current().len() > 2
    }

    /// Finish the in-progress strip and start a new empty one.
    pub fn finish_current(&mut self) {
        self.strips.push(Vec::new());
    }

    /// Discard the points of the in-progress strip.
    pub fn clear_current(&mut self) {
        if let Some(current) = self.strips.last_mut() {
            current.clear();
        }
    }

    /// All strips, including the in-progress one (for line rendering).
    pub fn strips(&self) -> &[Vec<Vec3>] {
        &self.strips
    }

    /// All recorded points across every strip, in draw order. The
    /// extrusion profile is built from this flattened list.
    pub fn flattened(&self) -> Vec<Vec3> {
        self.strips.iter().flatten().copied().collect()
    }

    pub fn point_count(&self) -> usize {
        self.strips.iter().map(|s| s.len()).sum()
    }
}

impl Default for OutlineState {
    fn default() -> Self {
        Self::new()
    }
}

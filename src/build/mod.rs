//! Solid construction from ground-plane outlines.
//!
//! Uses Manifold::extrude for the actual profile extrusion.

use glam::Vec3;
use manifold_rs::Manifold;

use crate::state::scene::SOLID_COLOR;
use crate::viewport::mesh::MeshData;

/// Minimum absolute polygon area accepted for extrusion.
const MIN_PROFILE_AREA: f64 = 1e-6;

/// Extrude a ground-plane outline into a solid of the given depth.
///
/// Points are world-space positions on y = 0; only x and z are used.
/// The solid sits on the ground and spans [0, depth] along +Y.
pub fn extrude_outline(points: &[Vec3], depth: f64) -> Result<MeshData, String> {
    if points.len() < 3 {
        return Err(format!("outline has {} points, need at least 3", points.len()));
    }
    if depth <= 0.0 {
        return Err(format!("extrusion depth {depth} must be positive"));
    }

    // Manifold extrudes an XY profile along Z; rotate(-90, 0, 0) afterwards
    // maps that to the ground plane with extrusion along +Y. World (x, z)
    // becomes profile (x, -z) so Z survives the rotation unmirrored.
    let mut profile: Vec<[f64; 2]> = points
        .iter()
        .map(|p| [p.x as f64, -(p.z as f64)])
        .collect();

    // Shoelace signed area: rejects degenerate outlines and normalizes
    // winding to CCW, which Manifold requires for outer polygons.
    let n = profile.len();
    let signed_area: f64 = (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            profile[i][0] * profile[j][1] - profile[j][0] * profile[i][1]
        })
        .sum::<f64>()
        / 2.0;

    if signed_area.abs() < MIN_PROFILE_AREA {
        return Err(format!(
            "outline has negligible area ({:.6})",
            signed_area.abs()
        ));
    }
    if signed_area < 0.0 {
        profile.reverse();
    }

    let polygon_data: Vec<f64> = profile.iter().flat_map(|p| vec![p[0], p[1]]).collect();
    let polygon_slice: &[f64] = &polygon_data;

    let manifold = Manifold::extrude(
        &[polygon_slice],
        depth,
        1,   // n_divisions
        0.0, // twist_degrees
        1.0, // scale_top_x
        1.0, // scale_top_y
    );

    if manifold.is_empty() {
        return Err("Manifold::extrude returned empty geometry".to_string());
    }

    let manifold = manifold.rotate(-90.0, 0.0, 0.0);
    extract_mesh_data(&manifold).ok_or_else(|| "extruded solid has no triangles".to_string())
}

/// Extract flat-shaded MeshData from a manifold. Vertices are duplicated
/// per triangle so each face keeps its own normal.
fn extract_mesh_data(manifold: &Manifold) -> Option<MeshData> {
    let mesh = manifold.to_mesh();
    let positions = mesh.vertices();
    let indices = mesh.indices();

    if positions.is_empty() || indices.is_empty() {
        return None;
    }

    let color = SOLID_COLOR;
    let tri_count = indices.len() / 3;
    let mut vertices = Vec::with_capacity(tri_count * 3 * 9);
    let mut new_indices = Vec::with_capacity(tri_count * 3);

    for tri in 0..tri_count {
        let i0 = indices[tri * 3] as usize;
        let i1 = indices[tri * 3 + 1] as usize;
        let i2 = indices[tri * 3 + 2] as usize;

        let p0 = Vec3::new(
            positions[i0 * 3],
            positions[i0 * 3 + 1],
            positions[i0 * 3 + 2],
        );
        let p1 = Vec3::new(
            positions[i1 * 3],
            positions[i1 * 3 + 1],
            positions[i1 * 3 + 2],
        );
        let p2 = Vec3::new(
            positions[i2 * 3],
            positions[i2 * 3 + 1],
            positions[i2 * 3 + 2],
        );

        let edge1 = p1 - p0;
        let edge2 = p2 - p0;
        let normal = edge1.cross(edge2).normalize_or_zero();

        let base = (tri * 3) as u32;
        for p in [p0, p1, p2] {
            vertices.extend_from_slice(&[
                p.x, p.y, p.z, normal.x, normal.y, normal.z, color[0], color[1], color[2],
            ]);
        }
        new_indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    Some(MeshData {
        vertices,
        indices: new_indices,
    })
}

/// Recolor every vertex of a mesh in place.
pub fn apply_color(mesh: &mut MeshData, color: [f32; 3]) {
    let stride = 9;
    for i in 0..(mesh.vertices.len() / stride) {
        let color_offset = i * stride + 6;
        if color_offset + 2 < mesh.vertices.len() {
            mesh.vertices[color_offset] = color[0];
            mesh.vertices[color_offset + 1] = color[1];
            mesh.vertices[color_offset + 2] = color[2];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::picking::Aabb;

    fn triangle() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
        ]
    }

    #[test]
    fn test_extrude_triangle() {
        let mesh = extrude_outline(&triangle(), 2.0).unwrap();
        assert!(mesh.triangle_count() >= 8);
        assert_eq!(mesh.vertices.len() % 9, 0);
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_extruded_solid_spans_depth() {
        let mesh = extrude_outline(&triangle(), 2.0).unwrap();
        let aabb = Aabb::from_mesh(&mesh);
        assert!(aabb.min.y.abs() < 1e-4);
        assert!((aabb.max.y - 2.0).abs() < 1e-4);
        // Footprint matches the drawn outline
        assert!((aabb.max.x - 2.0).abs() < 1e-4);
        assert!((aabb.max.z - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_winding_direction_does_not_matter() {
        let mut pts = triangle();
        pts.reverse();
        let mesh = extrude_outline(&pts, 1.0).unwrap();
        assert!(mesh.triangle_count() > 0);
    }

    #[test]
    fn test_too_few_points_rejected() {
        let pts = vec![Vec3::ZERO, Vec3::X];
        assert!(extrude_outline(&pts, 2.0).is_err());
    }

    #[test]
    fn test_collinear_points_rejected() {
        let pts = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ];
        assert!(extrude_outline(&pts, 2.0).is_err());
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert!(extrude_outline(&triangle(), 0.0).is_err());
    }

    #[test]
    fn test_apply_color_recolors_all_vertices() {
        let mut mesh = extrude_outline(&triangle(), 1.0).unwrap();
        apply_color(&mut mesh, [1.0, 0.0, 0.0]);
        for i in 0..mesh.vertex_count() {
            assert_eq!(mesh.vertices[i * 9 + 6], 1.0);
            assert_eq!(mesh.vertices[i * 9 + 7], 0.0);
        }
    }
}

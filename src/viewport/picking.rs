use std::collections::HashMap;

use glam::Vec3;

use super::mesh::MeshData;

/// A ray in world space
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Axis-aligned bounding box
#[derive(Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Compute AABB from MeshData (9 floats per vertex: pos+normal+color)
    pub fn from_mesh(data: &MeshData) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);

        let verts = &data.vertices;
        let stride = 9;
        let count = verts.len() / stride;

        for i in 0..count {
            let base = i * stride;
            let p = Vec3::new(verts[base], verts[base + 1], verts[base + 2]);
            min = min.min(p);
            max = max.max(p);
        }

        Self { min, max }
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Möller-Trumbore ray-triangle intersection.
/// Returns the distance along the ray if hit, or None.
pub fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Find the nearest triangle hit in a mesh.
pub fn pick_mesh_distance(ray: &Ray, mesh: &MeshData) -> Option<f32> {
    let stride = 9;
    let indices = &mesh.indices;
    let verts = &mesh.vertices;
    let tri_count = indices.len() / 3;

    let mut best: Option<f32> = None;

    for tri_idx in 0..tri_count {
        let i0 = indices[tri_idx * 3] as usize;
        let i1 = indices[tri_idx * 3 + 1] as usize;
        let i2 = indices[tri_idx * 3 + 2] as usize;

        let v0 = Vec3::new(
            verts[i0 * stride],
            verts[i0 * stride + 1],
            verts[i0 * stride + 2],
        );
        let v1 = Vec3::new(
            verts[i1 * stride],
            verts[i1 * stride + 1],
            verts[i1 * stride + 2],
        );
        let v2 = Vec3::new(
            verts[i2 * stride],
            verts[i2 * stride + 1],
            verts[i2 * stride + 2],
        );

        if let Some(dist) = ray_triangle_intersect(ray, v0, v1, v2) {
            if best.is_none_or(|d| dist < d) {
                best = Some(dist);
            }
        }
    }

    best
}

/// Pick the nearest mesh under the ray: AABB prefilter, then exact
/// triangle test. Returns the mesh id of the closest hit.
pub fn pick_nearest(ray: &Ray, meshes: &HashMap<String, MeshData>) -> Option<String> {
    let mut best: Option<(String, f32)> = None;

    for (id, mesh) in meshes {
        let aabb = Aabb::from_mesh(mesh);
        if ray_aabb(ray, &aabb).is_none() {
            continue;
        }
        if let Some(dist) = pick_mesh_distance(ray, mesh) {
            if best.as_ref().is_none_or(|(_, d)| dist < *d) {
                best = Some((id.clone(), dist));
            }
        }
    }

    best.map(|(id, _)| id)
}

/// Intersect the ray with the ground plane (y = 0), bounded by the ground
/// extents. Returns the world-space hit point, or None on a miss.
pub fn pick_ground_point(ray: &Ray, half_width: f32, half_depth: f32) -> Option<Vec3> {
    let denom = ray.direction.y;
    if denom.abs() < 1e-6 {
        return None; // Ray parallel to the plane
    }

    let t = -ray.origin.y / denom;
    if t < 0.0 {
        return None; // Intersection behind camera
    }

    let hit = ray.origin + ray.direction * t;
    if hit.x.abs() > half_width || hit.z.abs() > half_depth {
        return None; // Off the ground quad
    }

    Some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh;

    fn down_ray(x: f32, z: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, 5.0, z),
            direction: Vec3::NEG_Y,
        }
    }

    #[test]
    fn test_ray_triangle_hit() {
        let ray = down_ray(0.25, 0.25);
        let d = ray_triangle_intersect(
            &ray,
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert!(d.is_some());
        assert!((d.unwrap() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_ray_triangle_miss() {
        let ray = down_ray(2.0, 2.0);
        let d = ray_triangle_intersect(
            &ray,
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert!(d.is_none());
    }

    #[test]
    fn test_pick_ground_point_hit() {
        let p = pick_ground_point(&down_ray(1.0, -2.0), 5.0, 5.0).unwrap();
        assert!((p - Vec3::new(1.0, 0.0, -2.0)).length() < 1e-4);
    }

    #[test]
    fn test_pick_ground_point_outside_extents() {
        assert!(pick_ground_point(&down_ray(6.0, 0.0), 5.0, 5.0).is_none());
    }

    #[test]
    fn test_pick_ground_point_parallel_ray() {
        let ray = Ray {
            origin: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::X,
        };
        assert!(pick_ground_point(&ray, 5.0, 5.0).is_none());
    }

    #[test]
    fn test_pick_nearest_prefers_closer_mesh() {
        let mut meshes = HashMap::new();
        // Two ground-style quads stacked at y=0 and y=2; the ray from above
        // must pick the higher one.
        let low = mesh::ground(4.0, 4.0, [0.5; 3]);
        let mut high = mesh::ground(4.0, 4.0, [0.5; 3]);
        for i in 0..high.vertex_count() {
            high.vertices[i * 9 + 1] = 2.0;
        }
        meshes.insert("low".to_string(), low);
        meshes.insert("high".to_string(), high);

        let picked = pick_nearest(&down_ray(0.0, 0.0), &meshes);
        assert_eq!(picked.as_deref(), Some("high"));
    }

    #[test]
    fn test_pick_nearest_miss() {
        let mut meshes = HashMap::new();
        meshes.insert("g".to_string(), mesh::ground(4.0, 4.0, [0.5; 3]));
        assert!(pick_nearest(&down_ray(10.0, 10.0), &meshes).is_none());
    }

    #[test]
    fn test_aabb_from_ground() {
        let g = mesh::ground(10.0, 6.0, [0.5; 3]);
        let aabb = Aabb::from_mesh(&g);
        assert_eq!(aabb.min, Vec3::new(-5.0, 0.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(5.0, 0.0, 3.0));
    }
}

//! Extrusion geometry tests against the solid builder.

use glam::Vec3;
use polydraw_lib::build::extrude_outline;
use polydraw_lib::viewport::picking::{pick_mesh_distance, Aabb, Ray};

fn square() -> Vec<Vec3> {
    vec![
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(-1.0, 0.0, 1.0),
    ]
}

#[test]
fn test_square_outline_becomes_a_box() {
    let mesh = extrude_outline(&square(), 2.0).unwrap();
    let aabb = Aabb::from_mesh(&mesh);

    assert!((aabb.min - Vec3::new(-1.0, 0.0, -1.0)).length() < 1e-4);
    assert!((aabb.max - Vec3::new(1.0, 2.0, 1.0)).length() < 1e-4);
    // A box triangulates to 12 triangles
    assert_eq!(mesh.triangle_count(), 12);
}

#[test]
fn test_concave_outline_is_preserved() {
    // L-shaped profile
    let pts = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 3.0),
        Vec3::new(0.0, 0.0, 3.0),
    ];
    let mesh = extrude_outline(&pts, 1.0).unwrap();

    // A ray down through the notch must miss the solid
    let miss = Ray {
        origin: Vec3::new(2.0, 5.0, 2.0),
        direction: Vec3::NEG_Y,
    };
    assert!(pick_mesh_distance(&miss, &mesh).is_none());

    // A ray down through the long arm must hit it
    let hit = Ray {
        origin: Vec3::new(0.5, 5.0, 0.5),
        direction: Vec3::NEG_Y,
    };
    assert!(pick_mesh_distance(&hit, &mesh).is_some());
}

#[test]
fn test_normals_are_unit_length() {
    let mesh = extrude_outline(&square(), 2.0).unwrap();
    for i in 0..mesh.vertex_count() {
        let n = Vec3::new(
            mesh.vertices[i * 9 + 3],
            mesh.vertices[i * 9 + 4],
            mesh.vertices[i * 9 + 5],
        );
        assert!((n.length() - 1.0).abs() < 1e-3);
    }
}

#[test]
fn test_top_face_sits_at_depth() {
    let mesh = extrude_outline(&square(), 3.5).unwrap();
    let ray = Ray {
        origin: Vec3::new(0.0, 10.0, 0.0),
        direction: Vec3::NEG_Y,
    };
    let dist = pick_mesh_distance(&ray, &mesh).unwrap();
    assert!((dist - 6.5).abs() < 1e-3);
}

#[test]
fn test_degenerate_outlines_error() {
    assert!(extrude_outline(&[], 2.0).is_err());
    assert!(extrude_outline(&[Vec3::ZERO, Vec3::X], 2.0).is_err());

    let collinear = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(2.0, 0.0, 2.0),
    ];
    assert!(extrude_outline(&collinear, 2.0).is_err());

    // Duplicate points collapse to zero area
    let dup = vec![Vec3::ZERO, Vec3::ZERO, Vec3::ZERO];
    assert!(extrude_outline(&dup, 2.0).is_err());
}

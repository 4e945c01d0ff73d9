//! End-to-end drawing session tests through the headless harness.

use glam::Vec3;
use polydraw_lib::harness::TestHarness;
use polydraw_lib::state::Mode;

fn draw_triangle(h: &mut TestHarness) {
    h.click_ground(-1.0, -1.0);
    h.click_ground(1.0, -1.0);
    h.click_ground(0.0, 1.0);
}

#[test]
fn test_draw_toggle_round_trip() {
    let mut h = TestHarness::new();
    assert_eq!(h.mode(), Mode::Idle);
    assert_eq!(h.mode_label(), "");

    h.toggle_draw();
    assert_eq!(h.mode(), Mode::Draw);
    assert_eq!(h.mode_label(), "Draw Mode");

    h.toggle_draw();
    assert_eq!(h.mode(), Mode::Idle);
    assert_eq!(h.mode_label(), "");
}

#[test]
fn test_modes_are_exclusive() {
    let mut h = TestHarness::new();
    h.toggle_draw();
    h.enter_move();
    assert_eq!(h.mode(), Mode::Move);
    h.enter_vertex_edit();
    assert_eq!(h.mode(), Mode::VertexEdit);
    h.toggle_draw();
    assert_eq!(h.mode(), Mode::Draw);
}

#[test]
fn test_too_few_points_is_a_no_op() {
    let mut h = TestHarness::new();
    h.toggle_draw();
    h.click_ground(0.0, 0.0);
    h.click_ground(1.0, 0.0);

    assert!(h.complete().is_none());
    assert!(h.extrude().is_none());
    assert_eq!(h.solid_count(), 0);
    assert_eq!(h.current_point_count(), 2);
}

#[test]
fn test_completion_produces_a_solid() {
    let mut h = TestHarness::new();
    h.toggle_draw();
    draw_triangle(&mut h);
    let id = h.complete().expect("completion must create a solid");

    assert_eq!(h.solid_count(), 1);
    // Outline strip is retired, the new solid is handed over selected in Move mode
    assert_eq!(h.current_point_count(), 0);
    assert_eq!(h.mode(), Mode::Move);
    assert_eq!(h.selected(), Some(&id));
}

#[test]
fn test_repeated_extrusion_keeps_one_solid() {
    let mut h = TestHarness::new();
    h.toggle_draw();
    draw_triangle(&mut h);
    let first = h.extrude().expect("first extrusion");

    h.toggle_draw();
    let second = h.extrude().expect("second extrusion");

    assert_ne!(first, second);
    assert_eq!(h.solid_count(), 1);
}

#[test]
fn test_mode_change_clears_highlight() {
    let mut h = TestHarness::new();
    h.toggle_draw();
    draw_triangle(&mut h);
    let id = h.complete().unwrap();
    assert_eq!(h.selected(), Some(&id));

    h.enter_vertex_edit();
    assert!(h.selected().is_none());
}

#[test]
fn test_selecting_another_mesh_moves_highlight() {
    let mut h = TestHarness::new();
    h.toggle_draw();
    draw_triangle(&mut h);
    let solid = h.complete().unwrap();

    // Already in Move mode after completion. Click the ground next to the
    // solid, then the solid again.
    let ground = h
        .click_select(Vec3::new(4.0, 10.0, 4.0), Vec3::NEG_Y)
        .expect("ground hit");
    assert_ne!(ground, solid);
    assert_eq!(h.selected(), Some(&ground));

    let hit = h
        .click_select(Vec3::new(0.0, 10.0, -0.5), Vec3::NEG_Y)
        .expect("solid hit");
    assert_eq!(hit, solid);
    assert_eq!(h.selected(), Some(&solid));
}

#[test]
fn test_pick_miss_keeps_selection() {
    let mut h = TestHarness::new();
    h.toggle_draw();
    draw_triangle(&mut h);
    let id = h.complete().unwrap();

    // Ray into empty space
    assert!(h
        .click_select(Vec3::new(50.0, 10.0, 50.0), Vec3::NEG_Y)
        .is_none());
    assert_eq!(h.selected(), Some(&id));
}

#[test]
fn test_solid_spans_configured_depth() {
    let mut h = TestHarness::new();
    h.toggle_draw();
    draw_triangle(&mut h);
    let id = h.complete().unwrap();

    let mesh = &h.state.scene.meshes()[&id];
    let mut max_y = f32::MIN;
    for i in 0..mesh.vertex_count() {
        max_y = max_y.max(mesh.vertices[i * 9 + 1]);
    }
    let depth = h.state.settings.extrude.depth as f32;
    assert!((max_y - depth).abs() < 1e-4);
}

#[test]
fn test_clicks_outside_ground_are_ignored() {
    let mut h = TestHarness::new();
    h.toggle_draw();
    h.click_ground(20.0, 0.0);
    h.click_ground(0.0, -30.0);
    assert_eq!(h.current_point_count(), 0);
}

//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
pub use polydraw_lib::viewport::{mesh, picking};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::state::scene::{GROUND_DEPTH, GROUND_WIDTH};
use crate::state::{AppState, Mode};
use camera::OrbitCamera;
use gl_renderer::GlRenderer;
use mesh::MeshData;
use picking::{pick_ground_point, pick_nearest};

const OUTLINE_COLOR: [f32; 4] = [0.95, 0.95, 0.95, 1.0];

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: OrbitCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(),
            gl_renderer: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = OrbitCamera::new();
    }

    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Pointer interaction per mode ────────────────────────
        self.handle_pointer(&response, ui, rect, state);

        // ── Camera controls ─────────────────────────────────────
        self.handle_camera(&response, ui);

        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll.abs() > 0.1 {
            self.camera.zoom(scroll * 0.01);
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── GL rendering ────────────────────────────────────────
        self.render_gl(ui, rect, state);

        // ── Overlays ────────────────────────────────────────────
        self.draw_overlays(ui, rect, state);
    }

    fn handle_pointer(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        // Alt+click is reserved for camera rotation
        if ui.input(|i| i.modifiers.alt) {
            return;
        }

        match state.mode {
            Mode::Draw => {
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let ray = self.camera.screen_ray(pos, rect);
                        if let Some(point) =
                            pick_ground_point(&ray, GROUND_WIDTH * 0.5, GROUND_DEPTH * 0.5)
                        {
                            state.add_outline_point(point);
                        }
                    }
                }
                // Right click completes the outline and extrudes it
                if response.secondary_clicked() {
                    state.complete_outline();
                }
            }
            Mode::Move | Mode::VertexEdit => {
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let ray = self.camera.screen_ray(pos, rect);
                        // A miss keeps the current selection
                        if let Some(id) = pick_nearest(&ray, state.scene.meshes()) {
                            state.scene.select(&id);
                        }
                    }
                }
            }
            Mode::Idle => {}
        }
    }

    fn handle_camera(&mut self, response: &egui::Response, ui: &Ui) {
        if response.dragged_by(egui::PointerButton::Middle)
            || (response.dragged_by(egui::PointerButton::Primary)
                && ui.input(|i| i.modifiers.alt))
        {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            self.camera.pan(delta.x * 0.01, delta.y * 0.01);
        }
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera_yaw = self.camera.yaw;
        let camera_pitch = self.camera.pitch;
        let camera_distance = self.camera.distance;
        let camera_target = self.camera.target;
        let camera_fov = self.camera.fov;

        let meshes: HashMap<String, MeshData> = state.scene.meshes_clone();
        let version = state.scene.version();
        let outline_lines = mesh::outline_lines(state.outline.strips(), OUTLINE_COLOR);

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let camera = OrbitCamera {
                    yaw: camera_yaw,
                    pitch: camera_pitch,
                    distance: camera_distance,
                    target: camera_target,
                    fov: camera_fov,
                };

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.sync_meshes(gl, &meshes, version);
                    r.sync_outline(gl, Some(&outline_lines));

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        grid_visible: grid_settings.visible,
                        axes_visible: axes_settings.visible,
                        axes_thickness: axes_settings.thickness,
                        bg_color,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        // Interaction hint
        let hint = match state.mode {
            Mode::Draw => "Left click: add point   Right click: complete shape",
            Mode::Move | Mode::VertexEdit => "Left click: select mesh",
            Mode::Idle => "Enable Draw mode to sketch a shape on the ground",
        };
        painter.text(
            egui::pos2(rect.center().x, rect.bottom() - 20.0),
            egui::Align2::CENTER_BOTTOM,
            hint,
            egui::FontId::proportional(11.0),
            egui::Color32::from_rgb(100, 100, 110),
        );

        // Camera info overlay
        let overlay_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
            egui::vec2(136.0, 44.0),
        );
        painter.rect_filled(
            overlay_rect,
            4.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
        );
        painter.text(
            overlay_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
                self.camera.distance,
                self.camera.yaw.to_degrees(),
                self.camera.pitch.to_degrees(),
            ),
            egui::FontId::monospace(10.0),
            egui::Color32::from_rgb(160, 160, 170),
        );
    }
}

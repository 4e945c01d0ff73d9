//! Toolbar actions and UI

use egui::Ui;

use crate::state::{AppState, Mode};

// ── Public actions (callable from keyboard shortcuts too) ────

pub fn action_toggle_draw(state: &mut AppState) {
    state.toggle_draw();
}

pub fn action_extrude(state: &mut AppState) {
    if state.extrude_active_outline().is_none() {
        tracing::warn!("Extrude: outline needs more than 2 points");
    }
}

pub fn action_enter_move(state: &mut AppState) {
    state.enter_move();
}

pub fn action_enter_vertex_edit(state: &mut AppState) {
    state.enter_vertex_edit();
}

// ── Toolbar UI ───────────────────────────────────────────────

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .selectable_label(state.mode == Mode::Draw, "Draw")
            .on_hover_text("Toggle drawing points on the ground plane")
            .clicked()
        {
            action_toggle_draw(state);
        }

        let can_extrude = state.outline.can_complete();
        if ui
            .add_enabled(can_extrude, egui::Button::new("Extrude"))
            .on_hover_text("Extrude the drawn outline into a solid")
            .clicked()
        {
            action_extrude(state);
        }

        ui.separator();

        if ui
            .selectable_label(state.mode == Mode::Move, "Move")
            .on_hover_text("Select and move meshes")
            .clicked()
        {
            action_enter_move(state);
        }

        if ui
            .selectable_label(state.mode == Mode::VertexEdit, "Vertex Edit")
            .on_hover_text("Select a mesh for vertex editing")
            .clicked()
        {
            action_enter_vertex_edit(state);
        }

        ui.separator();

        if ui
            .button("Clear Points")
            .on_hover_text("Discard the points of the outline being drawn")
            .clicked()
        {
            state.outline.clear_current();
        }
    });
}

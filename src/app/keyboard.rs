//! Keyboard shortcut handling

use eframe::egui;

use crate::state::{AppState, Mode};
use crate::ui::toolbar;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(
    ctx: &egui::Context,
    state: &mut AppState,
    viewport: &mut ViewportPanel,
) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Escape — cancel the in-progress outline / deselect
        if i.key_pressed(egui::Key::Escape) {
            handle_escape(state);
        }
        // D — toggle Draw mode
        if i.key_pressed(egui::Key::D) && !i.modifiers.command {
            toolbar::action_toggle_draw(state);
        }
        // E — extrude the drawn outline
        if i.key_pressed(egui::Key::E) && !i.modifiers.command {
            toolbar::action_extrude(state);
        }
        // M — Move mode
        if i.key_pressed(egui::Key::M) && !i.modifiers.command {
            toolbar::action_enter_move(state);
        }
        // V — Vertex Edit mode
        if i.key_pressed(egui::Key::V) && !i.modifiers.command {
            toolbar::action_enter_vertex_edit(state);
        }
        // Home — reset camera
        if i.key_pressed(egui::Key::Home) {
            viewport.reset_camera();
        }
    });
}

fn handle_escape(state: &mut AppState) {
    if state.mode == Mode::Draw && !state.outline.current().is_empty() {
        // Cancel the outline being drawn, stay in Draw mode
        state.outline.clear_current();
    } else {
        state.scene.clear_selection();
    }
}

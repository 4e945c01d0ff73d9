use egui::Ui;

use crate::state::{AppState, Mode};

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        if state.mode == Mode::Idle {
            ui.weak("Ready");
        } else {
            ui.colored_label(egui::Color32::YELLOW, state.mode_label());
        }

        ui.separator();

        let pts = state.outline.current().len();
        if pts > 0 {
            ui.label(format!("Points: {pts}"));
        } else {
            ui.weak("Points: 0");
        }

        ui.separator();

        ui.weak(format!("Solids: {}", state.scene.solid_count()));

        if state.scene.selected().is_some() {
            ui.separator();
            ui.label("Selected: 1");
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("polydraw v0.1");
        });
    });
}

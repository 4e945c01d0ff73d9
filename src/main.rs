mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::build` and `crate::state`
// resolve to the lib crate types everywhere in the binary.
pub use polydraw_lib::build;
pub use polydraw_lib::state;

use app::PolyDrawApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polydraw=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("polydraw — draw and extrude")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "polydraw",
        native_options,
        Box::new(|cc| Ok(Box::new(PolyDrawApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

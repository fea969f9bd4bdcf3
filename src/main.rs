//! Page Strip - Main Entry Point
//!
//! Launches the reorderable page strip application.

use pagestrip_rs::{config::AppState, frontend::PageStripApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pagestrip_rs=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Page Strip");

    // Load application state (UI preferences)
    let app_state = AppState::load_or_default();

    // Configure eframe options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 520.0])
            .with_min_inner_size([600.0, 320.0])
            .with_title("Page Strip"),
        ..Default::default()
    };

    // Run the eframe application
    eframe::run_native(
        "Page Strip",
        native_options,
        Box::new(|cc| {
            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_shadow.offset = [0, 0];

            if app_state.ui_preferences.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            cc.egui_ctx.set_style(style);

            Ok(Box::new(PageStripApp::new(cc, app_state)))
        }),
    )
}

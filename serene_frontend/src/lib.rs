pub mod activities;
pub mod api;
pub mod app;
pub mod carousel;
pub mod config;
pub mod events;
pub mod feed;
pub mod models;
pub mod mood;
pub mod session;
pub mod storage;
pub mod theme;

use eframe::{self, egui};

pub use app::SereneApp;
pub use config::AppConfig;

type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Launches the egui application with default window options.
pub fn run_frontend() -> Result<(), eframe::Error> {
    run_frontend_with_options(default_native_options())
}

/// Launches the egui app with caller-provided options.
pub fn run_frontend_with_options(options: eframe::NativeOptions) -> Result<(), eframe::Error> {
    let _ = env_logger::builder().is_test(false).try_init();
    let config = AppConfig::load();
    log::info!("Serene starting against {}", config.api_url);
    eframe::run_native(
        "Serene",
        options,
        Box::new(move |cc| -> Result<Box<dyn eframe::App>, DynError> {
            let app = SereneApp::new(cc, config)?;
            Ok(Box::new(app))
        }),
    )
}

fn default_native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([380.0, 600.0])
            .with_title("Serene"),
        ..Default::default()
    }
}

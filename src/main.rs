mod analysis;
mod app;
mod color;
mod config;
mod data;
mod pages;
mod services;
mod state;
mod ui;

use app::OsdrViewerApp;
use config::AppConfig;
use eframe::egui;
use services::genai::GenAiClient;
use services::nasa::NasaClient;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };
    log::info!(
        "using generative backend {} (chat model {}, image model {})",
        config.ai_base_url,
        config.chat_model,
        config.image_model
    );

    let nasa = NasaClient::new(&config);
    let genai = GenAiClient::new(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([600.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "OSDR Research Data Overview Tool",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can fetch and render remote png/jpg.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(OsdrViewerApp::new(nasa, genai)))
        }),
    )
}

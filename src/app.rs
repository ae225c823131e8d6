use eframe::egui;

use crate::services::genai::GenAiClient;
use crate::services::nasa::NasaClient;
use crate::state::AppState;
use crate::ui::{panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct OsdrViewerApp {
    pub state: AppState,
    nasa: NasaClient,
    genai: GenAiClient,
}

impl OsdrViewerApp {
    pub fn new(nasa: NasaClient, genai: GenAiClient) -> Self {
        Self {
            state: AppState::default(),
            nasa,
            genai,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        if let Some(path) = &file.path {
            panels::load_path(&mut self.state, path);
        } else if let Some(bytes) = file.bytes {
            // Web and some platforms hand over bytes instead of a path.
            match crate::data::loader::decode_metadata(file.name, bytes.to_vec()) {
                Ok(document) => self.state.set_document(document),
                Err(e) => {
                    log::error!("Failed to decode dropped file: {e}");
                    self.state.status_message = Some(format!("Error reading file: {e}"));
                }
            }
        }
    }
}

impl eframe::App for OsdrViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            views::page_view(ui, &mut self.state, &self.nasa, &self.genai);
        });
    }
}

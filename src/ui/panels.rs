use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::pages::Page;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Logo (centered) ----
    let logo = egui::include_image!("../../assets/logo.png");
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(logo)
                .max_width(ui.available_width() * 0.6)
                .max_height(96.0)
                .rounding(4.0),
        );
    });
    ui.add_space(4.0);

    ui.heading("Navigation");
    ui.separator();

    ui.strong("Select a page:");
    egui::ComboBox::from_id_salt("page_select")
        .selected_text(state.page.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for page in Page::ALL {
                ui.selectable_value(&mut state.page, page, page.label());
            }
        });

    ui.separator();

    match &state.document {
        Some(doc) => {
            ui.label(RichText::new("Uploaded file").strong());
            ui.label(&doc.file_name);
            ui.small(format!("{} bytes", doc.len()));
        }
        None => {
            ui.label("No metadata file uploaded.");
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Upload metadata…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let has_factors = state
                .report
                .as_ref()
                .is_some_and(|r| !r.factors.table().is_empty());
            if ui
                .add_enabled(has_factors, egui::Button::new("Export factors CSV…"))
                .clicked()
            {
                export_factors_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(report) = &state.report {
            ui.label(format!(
                "{}: {} factors",
                report.study,
                report.factors.table().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload OSDR research data text file")
        .add_filter("Text files", loader::SUPPORTED_EXTENSIONS)
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Load a file chosen by dialog or dropped onto the window.
pub fn load_path(state: &mut AppState, path: &std::path::Path) {
    match loader::load_file(path) {
        Ok(document) => {
            log::info!(
                "Loaded {} ({} bytes)",
                document.file_name,
                document.len()
            );
            state.set_document(document);
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error reading file: {e:#}"));
        }
    }
}

pub fn export_factors_dialog(state: &mut AppState) {
    let Some(report) = &state.report else {
        return;
    };
    let file = rfd::FileDialog::new()
        .set_title("Export study factors")
        .set_file_name(format!("{}_factors.csv", report.study))
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        let table = report.factors.table();
        match loader::export_factors_csv(&path, &table) {
            Ok(()) => log::info!("Exported {} factors to {}", table.len(), path.display()),
            Err(e) => {
                log::error!("Failed to export factors: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::{AnalysisReport, GenerativeBackend, ImageCatalog};
use crate::color::FactorColors;
use crate::data::factors::FactorOutcome;
use crate::data::model::{FACTOR_NAME_COLUMN, FACTOR_TYPE_COLUMN, FactorTable};
use crate::pages::Page;
use crate::state::{AppState, Gallery};

const WARNING_COLOR: Color32 = Color32::from_rgb(230, 160, 0);

// ---------------------------------------------------------------------------
// Central panel dispatch
// ---------------------------------------------------------------------------

/// Render the selected page in the central panel.
pub fn page_view(
    ui: &mut Ui,
    state: &mut AppState,
    catalog: &dyn ImageCatalog,
    backend: &dyn GenerativeBackend,
) {
    let page = state.page;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(page.title());
            ui.add_space(6.0);
            for paragraph in page.paragraphs() {
                ui.label(*paragraph);
            }
            if let Some((label, url)) = page.link() {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("Learn more about the challenges here:");
                    ui.hyperlink_to(label, url);
                });
            }

            match page {
                Page::AnalyzeOsdr => analyze_view(ui, state, catalog, backend),
                Page::Home => {}
                _ => gallery_view(ui, state, page, catalog),
            }
        });
}

// ---------------------------------------------------------------------------
// Info page galleries
// ---------------------------------------------------------------------------

fn gallery_view(ui: &mut Ui, state: &mut AppState, page: Page, catalog: &dyn ImageCatalog) {
    ui.add_space(8.0);
    if ui.small_button("Refresh images").clicked() {
        state.refresh_gallery(page);
    }
    ui.separator();

    let Some(gallery) = state.gallery(page, catalog) else {
        return;
    };
    match gallery {
        Gallery::Failed(msg) => {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
        Gallery::Loaded(images) if images.is_empty() => {
            ui.label("No images found.");
        }
        Gallery::Loaded(images) => {
            let width = ui.available_width();
            for image in images {
                ui.add(egui::Image::new(image.href.as_str()).max_width(width));
                ui.label(RichText::new(&image.title).italics());
                ui.add_space(8.0);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Analyze page
// ---------------------------------------------------------------------------

fn analyze_view(
    ui: &mut Ui,
    state: &mut AppState,
    catalog: &dyn ImageCatalog,
    backend: &dyn GenerativeBackend,
) {
    ui.label("Enter OSDR Number (the digits at the end of OSD, e.g., OSD-678 = 678):");
    ui.add(egui::TextEdit::singleline(&mut state.osdr_input).hint_text("Enter OSDR number"));
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Upload OSDR Research Data Text File…").clicked() {
            super::panels::open_file_dialog(state);
        }
        match &state.document {
            Some(doc) => ui.label(&doc.file_name),
            None => ui.weak("or drop a .txt file onto the window"),
        };
    });
    ui.add_space(4.0);

    if ui.button("Analyze Experiment").clicked() {
        state.analyze(catalog, backend);
    }
    if let Some(msg) = &state.status_message {
        ui.label(RichText::new(msg).color(Color32::RED));
    }

    if let Some(report) = &state.report {
        ui.separator();
        report_view(ui, report, &state.factor_colors);
    }
}

fn report_view(ui: &mut Ui, report: &AnalysisReport, colors: &FactorColors) {
    for warning in &report.warnings {
        ui.label(RichText::new(warning).color(WARNING_COLOR));
    }

    ui.heading("Experiment Overview:");
    match &report.overview {
        Ok(text) => {
            ui.label(text);
        }
        Err(e) => {
            ui.label(RichText::new(format!("Overview unavailable: {e}")).color(Color32::RED));
        }
    }

    let width = ui.available_width();
    if let Some(url) = &report.generated_image {
        ui.add_space(8.0);
        ui.heading("Generated Visualization:");
        ui.add(egui::Image::new(url.as_str()).max_width(width));
        ui.label(RichText::new("Visualization of the Experiment Overview").italics());
    }

    if let Some(url) = &report.study_image {
        ui.add_space(8.0);
        ui.heading(format!("Related Image for {}:", report.study));
        ui.add(egui::Image::new(url.as_str()).max_width(width));
        ui.label(RichText::new("Related Image from OSDR Database").italics());
    }

    ui.add_space(8.0);
    match &report.factors {
        FactorOutcome::Found(table) if !table.is_empty() => {
            ui.heading("Factors Table:");
            factor_table(ui, table, colors);
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for (kind, color) in colors.legend_entries() {
                    ui.label(RichText::new(format!("■ {kind}")).color(color));
                }
            });
        }
        outcome => {
            if let Some(msg) = outcome.warning() {
                ui.label(RichText::new(msg).color(WARNING_COLOR));
            }
            ui.label(
                RichText::new("No factors found in the uploaded research data.")
                    .color(WARNING_COLOR),
            );
        }
    }

    ui.add_space(8.0);
    ui.hyperlink_to(
        format!("View GeneLab Visualization for {}", report.study),
        &report.genelab_url,
    );
    ui.hyperlink_to("Talk to the AI chatbot for help!", &report.chatbot_url);
}

/// Two-column table, one row per factor, type cells coloured by type.
fn factor_table(ui: &mut Ui, table: &FactorTable, colors: &FactorColors) {
    TableBuilder::new(ui)
        .id_salt("factor_table")
        .vscroll(false)
        .striped(true)
        .column(Column::auto().at_least(160.0).resizable(true))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong(FACTOR_NAME_COLUMN);
            });
            header.col(|ui: &mut Ui| {
                ui.strong(FACTOR_TYPE_COLUMN);
            });
        })
        .body(|mut body| {
            for row in table.rows() {
                body.row(18.0, |mut cells| {
                    cells.col(|ui: &mut Ui| {
                        ui.label(row.name);
                    });
                    cells.col(|ui: &mut Ui| {
                        ui.label(RichText::new(row.kind).color(colors.color_for(row.kind)));
                    });
                });
            }
        });
}

use std::collections::BTreeMap;

use crate::analysis::{AnalysisReport, GenerativeBackend, ImageCatalog, run_analysis};
use crate::color::FactorColors;
use crate::data::model::{MetadataDocument, StudyId};
use crate::pages::Page;
use crate::services::nasa::GalleryImage;

pub const MISSING_INPUT_MESSAGE: &str =
    "Please upload a valid OSDR research data text file and enter the OSDR number.";

/// Images shown on an info page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gallery {
    Loaded(Vec<GalleryImage>),
    Failed(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Page selected in the navigation panel.
    pub page: Page,

    /// Raw text of the OSDR number field.
    pub osdr_input: String,

    /// Uploaded metadata file (None until the user picks one).
    pub document: Option<MetadataDocument>,

    /// Result of the last "Analyze Experiment" click.
    pub report: Option<AnalysisReport>,

    /// Colours for the factor types of the current report.
    pub factor_colors: FactorColors,

    /// Fetched galleries, one per info page.
    pub galleries: BTreeMap<Page, Gallery>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly uploaded document. A previous report no longer applies.
    pub fn set_document(&mut self, document: MetadataDocument) {
        self.document = Some(document);
        self.report = None;
        self.factor_colors = FactorColors::default();
        self.status_message = None;
    }

    /// The gallery for `page`, fetching it on first use.
    pub fn gallery(&mut self, page: Page, catalog: &dyn ImageCatalog) -> Option<&Gallery> {
        let query = page.gallery_query()?;
        Some(
            &*self
                .galleries
                .entry(page)
                .or_insert_with(|| fetch_gallery(catalog, query)),
        )
    }

    /// Drop the cached gallery so the next render fetches it again.
    pub fn refresh_gallery(&mut self, page: Page) {
        self.galleries.remove(&page);
    }

    /// Handle the "Analyze Experiment" button.
    pub fn analyze(&mut self, catalog: &dyn ImageCatalog, backend: &dyn GenerativeBackend) {
        let study = StudyId::parse(&self.osdr_input);
        let (Some(document), Ok(study)) = (&self.document, study) else {
            self.status_message = Some(MISSING_INPUT_MESSAGE.to_string());
            return;
        };

        let report = run_analysis(catalog, backend, document, &study);
        self.factor_colors = FactorColors::new(&report.factors.table().unique_types());
        self.report = Some(report);
        self.status_message = None;
    }
}

fn fetch_gallery(catalog: &dyn ImageCatalog, query: &str) -> Gallery {
    match catalog.search_images(query) {
        Ok(images) => Gallery::Loaded(images),
        Err(e) => {
            log::error!("gallery fetch for {query:?} failed: {e}");
            Gallery::Failed("Failed to fetch images from NASA.".to_string())
        }
    }
}

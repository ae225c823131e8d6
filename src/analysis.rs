use crate::data::factors::{FactorOutcome, extract_factors};
use crate::data::model::{MetadataDocument, StudyId};
use crate::services::ServiceError;
use crate::services::genai::GenAiClient;
use crate::services::nasa::{GalleryImage, NasaClient};

pub const CHATBOT_URL: &str = "https://chatgpt.com/";

// ---------------------------------------------------------------------------
// Service seams
// ---------------------------------------------------------------------------

/// Image lookups used by the dashboard.
pub trait ImageCatalog {
    fn search_images(&self, query: &str) -> Result<Vec<GalleryImage>, ServiceError>;
    fn fetch_study_image(&self, study: &StudyId) -> Result<String, ServiceError>;
    fn genelab_url(&self, study: &StudyId) -> String;
}

/// Text and image generation used by the analysis run.
pub trait GenerativeBackend {
    fn summarize(&self, metadata_text: &str) -> Result<String, ServiceError>;
    fn visualize(&self, overview: &str) -> Result<String, ServiceError>;
}

impl ImageCatalog for NasaClient {
    fn search_images(&self, query: &str) -> Result<Vec<GalleryImage>, ServiceError> {
        NasaClient::search_images(self, query)
    }

    fn fetch_study_image(&self, study: &StudyId) -> Result<String, ServiceError> {
        NasaClient::fetch_study_image(self, study)
    }

    fn genelab_url(&self, study: &StudyId) -> String {
        NasaClient::genelab_url(self, study)
    }
}

impl GenerativeBackend for GenAiClient {
    fn summarize(&self, metadata_text: &str) -> Result<String, ServiceError> {
        GenAiClient::summarize(self, metadata_text)
    }

    fn visualize(&self, overview: &str) -> Result<String, ServiceError> {
        GenAiClient::visualize(self, overview)
    }
}

// ---------------------------------------------------------------------------
// Analysis report
// ---------------------------------------------------------------------------

/// Everything the Analyze page shows after one "Analyze Experiment" click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub study: StudyId,
    pub file_name: String,
    /// Generated overview, or the error message if the call failed.
    pub overview: Result<String, String>,
    pub generated_image: Option<String>,
    pub study_image: Option<String>,
    pub factors: FactorOutcome,
    /// Non-fatal problems from the external calls, in call order.
    pub warnings: Vec<String>,
    pub genelab_url: String,
    pub chatbot_url: String,
}

/// Run the full analysis for one uploaded document.
///
/// Calls are made one after another: study image, overview, visualization.
/// Failures are recorded in the report and never stop the factor extraction.
pub fn run_analysis(
    catalog: &dyn ImageCatalog,
    backend: &dyn GenerativeBackend,
    document: &MetadataDocument,
    study: &StudyId,
) -> AnalysisReport {
    log::info!("analyzing {} for {study}", document.file_name);
    let mut warnings = Vec::new();

    let study_image = match catalog.fetch_study_image(study) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("study image lookup failed: {e}");
            warnings.push("No image found for the given OSDR number.".to_string());
            None
        }
    };

    let overview = backend.summarize(&document.text).map_err(|e| {
        log::error!("overview generation failed: {e}");
        e.to_string()
    });

    let generated_image = match &overview {
        Ok(text) => match backend.visualize(text) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("visualization failed: {e}");
                warnings.push(format!("Visualization unavailable: {e}"));
                None
            }
        },
        Err(_) => None,
    };

    AnalysisReport {
        study: study.clone(),
        file_name: document.file_name.clone(),
        overview,
        generated_image,
        study_image,
        factors: extract_factors(&document.text),
        warnings,
        genelab_url: catalog.genelab_url(study),
        chatbot_url: CHATBOT_URL.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::model::FactorTable;
    use std::cell::RefCell;

    /// In-memory catalog that records every call.
    #[derive(Default)]
    pub(crate) struct FakeCatalog {
        pub study_image: Option<String>,
        pub gallery: Vec<GalleryImage>,
        pub fail_search: bool,
        pub calls: RefCell<Vec<String>>,
    }

    impl ImageCatalog for FakeCatalog {
        fn search_images(&self, query: &str) -> Result<Vec<GalleryImage>, ServiceError> {
            self.calls.borrow_mut().push(format!("search:{query}"));
            if self.fail_search {
                return Err(ServiceError::Status {
                    service: "NASA image search",
                    code: 500,
                    body: String::new(),
                });
            }
            Ok(self.gallery.clone())
        }

        fn fetch_study_image(&self, study: &StudyId) -> Result<String, ServiceError> {
            self.calls.borrow_mut().push(format!("study:{}", study.digits()));
            self.study_image.clone().ok_or(ServiceError::Status {
                service: "OSDR study image",
                code: 404,
                body: String::new(),
            })
        }

        fn genelab_url(&self, study: &StudyId) -> String {
            format!("https://genelab.test/data/{study}")
        }
    }

    #[derive(Default)]
    pub(crate) struct FakeBackend {
        pub overview: Option<String>,
        pub image: Option<String>,
        pub calls: RefCell<Vec<&'static str>>,
    }

    impl GenerativeBackend for FakeBackend {
        fn summarize(&self, _metadata_text: &str) -> Result<String, ServiceError> {
            self.calls.borrow_mut().push("summarize");
            self.overview.clone().ok_or(ServiceError::Transport {
                service: "text generation",
                message: "connection refused".into(),
            })
        }

        fn visualize(&self, _overview: &str) -> Result<String, ServiceError> {
            self.calls.borrow_mut().push("visualize");
            self.image.clone().ok_or(ServiceError::MissingField {
                service: "image generation",
                field: "data[0].url",
            })
        }
    }

    const METADATA: &str = "STUDY FACTORS\n\
Study Factor Name\tStudy Factor Type\n\
Study Factor Name\tStudy Factor Type\n\
Spaceflight\tSpace Flight\n\
Study Factor Type Term Accession Number\n";

    fn doc() -> MetadataDocument {
        MetadataDocument::new("OSD-48.txt", METADATA)
    }

    #[test]
    fn successful_run_fills_every_section() {
        let catalog = FakeCatalog {
            study_image: Some("https://osdr.test/OSD-48.png".into()),
            ..Default::default()
        };
        let backend = FakeBackend {
            overview: Some("Mice flew.".into()),
            image: Some("https://cdn.test/gen.png".into()),
            ..Default::default()
        };
        let study = StudyId::parse("48").unwrap();

        let report = run_analysis(&catalog, &backend, &doc(), &study);

        let mut expected = FactorTable::new();
        expected.push("Spaceflight", "Space Flight");
        assert_eq!(report.overview, Ok("Mice flew.".to_string()));
        assert_eq!(report.generated_image.as_deref(), Some("https://cdn.test/gen.png"));
        assert_eq!(report.study_image.as_deref(), Some("https://osdr.test/OSD-48.png"));
        assert_eq!(report.factors, FactorOutcome::Found(expected));
        assert_eq!(report.genelab_url, "https://genelab.test/data/OSD-48");
        assert_eq!(report.chatbot_url, CHATBOT_URL);
        assert!(report.warnings.is_empty());
        assert_eq!(*backend.calls.borrow(), ["summarize", "visualize"]);
        assert_eq!(*catalog.calls.borrow(), ["study:48"]);
    }

    #[test]
    fn failed_summary_skips_visualization_but_still_extracts() {
        let catalog = FakeCatalog::default();
        let backend = FakeBackend::default();
        let study = StudyId::parse("48").unwrap();

        let report = run_analysis(&catalog, &backend, &doc(), &study);

        assert!(report.overview.unwrap_err().contains("connection refused"));
        assert_eq!(report.generated_image, None);
        assert_eq!(report.study_image, None);
        assert_eq!(report.warnings, ["No image found for the given OSDR number."]);
        assert_eq!(report.factors.table().len(), 1);
        assert_eq!(*backend.calls.borrow(), ["summarize"]);
    }

    #[test]
    fn failed_visualization_is_a_warning() {
        let catalog = FakeCatalog {
            study_image: Some("img".into()),
            ..Default::default()
        };
        let backend = FakeBackend {
            overview: Some("ok".into()),
            ..Default::default()
        };
        let study = StudyId::parse("1").unwrap();

        let report = run_analysis(&catalog, &backend, &doc(), &study);

        assert!(report.overview.is_ok());
        assert_eq!(report.generated_image, None);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("Visualization unavailable"));
    }
}

use serde::Deserialize;

use super::{ServiceError, build_agent, call_error};
use crate::config::AppConfig;
use crate::data::model::StudyId;

const IMAGE_SEARCH: &str = "NASA image search";
const STUDY_IMAGE: &str = "OSDR study image";

/// One entry of an image gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub href: String,
    pub title: String,
}

// ---------------------------------------------------------------------------
// images-api.nasa.gov response shape (only the parts we read)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    collection: Collection,
}

#[derive(Debug, Default, Deserialize)]
struct Collection {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    links: Vec<Link>,
    #[serde(default)]
    data: Vec<ItemData>,
}

#[derive(Debug, Deserialize)]
struct Link {
    href: String,
}

#[derive(Debug, Deserialize)]
struct ItemData {
    #[serde(default)]
    title: String,
}

impl SearchResponse {
    /// Items without links cannot be shown and are skipped.
    fn into_gallery(self) -> Vec<GalleryImage> {
        self.collection
            .items
            .into_iter()
            .filter_map(|item| {
                let href = item.links.into_iter().next()?.href;
                let title = item
                    .data
                    .into_iter()
                    .next()
                    .map(|d| d.title)
                    .unwrap_or_default();
                Some(GalleryImage { href, title })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the NASA Image and Video Library and the OSDR study endpoints.
#[derive(Clone)]
pub struct NasaClient {
    agent: ureq::Agent,
    images_base_url: String,
    osdr_base_url: String,
    genelab_base_url: String,
}

impl NasaClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            agent: build_agent(config.http_timeout_secs),
            images_base_url: config.nasa_images_base_url.clone(),
            osdr_base_url: config.osdr_base_url.clone(),
            genelab_base_url: config.genelab_base_url.clone(),
        }
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?q={}",
            self.images_base_url,
            urlencoding::encode(query)
        )
    }

    pub fn study_image_url(&self, study: &StudyId) -> String {
        format!(
            "{}/geode-py/ws/studies/OSD-{}/image",
            self.osdr_base_url,
            study.digits()
        )
    }

    /// Link to the GeneLab visualization portal for a study.
    pub fn genelab_url(&self, study: &StudyId) -> String {
        format!("{}/data/OSD-{}", self.genelab_base_url, study.digits())
    }

    /// Search the image library and return displayable results in API order.
    pub fn search_images(&self, query: &str) -> Result<Vec<GalleryImage>, ServiceError> {
        let url = self.search_url(query);
        log::info!("searching NASA images: {url}");

        let resp = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| call_error(IMAGE_SEARCH, e))?;
        let parsed: SearchResponse = resp.into_json().map_err(|source| ServiceError::Decode {
            service: IMAGE_SEARCH,
            source,
        })?;

        let gallery = parsed.into_gallery();
        log::info!("{} images for {query:?}", gallery.len());
        Ok(gallery)
    }

    /// Resolve the representative image of a study. The endpoint redirects to
    /// the image itself, so the final URL is the image URL.
    pub fn fetch_study_image(&self, study: &StudyId) -> Result<String, ServiceError> {
        let url = self.study_image_url(study);
        log::info!("fetching study image for {study}: {url}");

        let resp = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| call_error(STUDY_IMAGE, e))?;
        Ok(resp.get_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client() -> NasaClient {
        NasaClient::new(&AppConfig::default())
    }

    fn gallery(json: &str) -> Vec<GalleryImage> {
        serde_json::from_str::<SearchResponse>(json)
            .unwrap()
            .into_gallery()
    }

    #[test]
    fn search_url_encodes_query() {
        assert_eq!(
            client().search_url("effects of space on the human body"),
            "https://images-api.nasa.gov/search?q=effects%20of%20space%20on%20the%20human%20body"
        );
    }

    #[test]
    fn study_urls() {
        let study = StudyId::parse("678").unwrap();
        assert_eq!(
            client().study_image_url(&study),
            "https://osdr.nasa.gov/geode-py/ws/studies/OSD-678/image"
        );
        assert_eq!(
            client().genelab_url(&study),
            "https://visualization.genelab.nasa.gov/data/OSD-678"
        );
    }

    #[test]
    fn gallery_takes_first_link_and_title() {
        let json = r#"{
            "collection": {
                "version": "1.0",
                "items": [
                    {
                        "href": "https://images-assets.nasa.gov/image/a/collection.json",
                        "data": [{ "title": "Galaxy A", "nasa_id": "a" }],
                        "links": [
                            { "href": "https://images-assets.nasa.gov/image/a/a~thumb.jpg", "rel": "preview" },
                            { "href": "https://images-assets.nasa.gov/image/a/a~large.jpg", "rel": "alternate" }
                        ]
                    },
                    {
                        "data": [{ "title": "No preview" }]
                    },
                    {
                        "links": [{ "href": "https://images-assets.nasa.gov/image/c/c~thumb.jpg" }],
                        "data": []
                    }
                ]
            }
        }"#;

        assert_eq!(
            gallery(json),
            vec![
                GalleryImage {
                    href: "https://images-assets.nasa.gov/image/a/a~thumb.jpg".into(),
                    title: "Galaxy A".into(),
                },
                GalleryImage {
                    href: "https://images-assets.nasa.gov/image/c/c~thumb.jpg".into(),
                    title: String::new(),
                },
            ]
        );
    }

    #[test]
    fn missing_collection_is_an_empty_gallery() {
        assert!(gallery("{}").is_empty());
        assert!(gallery(r#"{"collection": {}}"#).is_empty());
    }
}

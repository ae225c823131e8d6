use std::env;

/// Runtime settings for the external services, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// OpenAI-compatible endpoint for text and image generation.
    pub ai_base_url: String,
    pub ai_api_key: String,
    pub chat_model: String,
    pub image_model: String,
    pub image_size: String,
    pub nasa_images_base_url: String,
    pub osdr_base_url: String,
    pub genelab_base_url: String,
    pub http_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} (expected {expected})")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_base_url: "https://api.zukijourney.com/v1".to_string(),
            ai_api_key: "nd".to_string(),
            chat_model: "gpt-3.5-turbo".to_string(),
            image_model: "absolute-reality-v1.8.1".to_string(),
            image_size: "1024x1024".to_string(),
            nasa_images_base_url: "https://images-api.nasa.gov".to_string(),
            osdr_base_url: "https://osdr.nasa.gov".to_string(),
            genelab_base_url: "https://visualization.genelab.nasa.gov".to_string(),
            http_timeout_secs: 60,
        }
    }
}

impl AppConfig {
    /// Build the config from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup. Unset or blank
    /// variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let http_timeout_secs = match get("OSDR_HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "OSDR_HTTP_TIMEOUT_SECS",
                        value: raw,
                        expected: "a positive number of seconds",
                    });
                }
            },
            None => defaults.http_timeout_secs,
        };

        Ok(Self {
            ai_base_url: trim_url(get("OSDR_AI_BASE_URL").unwrap_or(defaults.ai_base_url)),
            ai_api_key: get("OSDR_AI_API_KEY").unwrap_or(defaults.ai_api_key),
            chat_model: get("OSDR_CHAT_MODEL").unwrap_or(defaults.chat_model),
            image_model: get("OSDR_IMAGE_MODEL").unwrap_or(defaults.image_model),
            image_size: get("OSDR_IMAGE_SIZE").unwrap_or(defaults.image_size),
            nasa_images_base_url: trim_url(
                get("NASA_IMAGES_BASE_URL").unwrap_or(defaults.nasa_images_base_url),
            ),
            osdr_base_url: trim_url(get("OSDR_BASE_URL").unwrap_or(defaults.osdr_base_url)),
            genelab_base_url: trim_url(
                get("GENELAB_VIS_BASE_URL").unwrap_or(defaults.genelab_base_url),
            ),
            http_timeout_secs,
        })
    }
}

fn trim_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

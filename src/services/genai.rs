use serde_json::{Value, json};

use super::{ServiceError, build_agent, call_error};
use crate::config::AppConfig;

const CHAT: &str = "text generation";
const IMAGES: &str = "image generation";

/// Prompt asking the chat model for a plain-language overview.
pub fn overview_prompt(metadata_text: &str) -> String {
    format!(
        "Summarize the following experiment information for easy understanding:\n\n\
         {metadata_text}\n\n\
         List the number of subjects, treatments, events before and after launch, and similar experiments."
    )
}

pub fn visualization_prompt(overview: &str) -> String {
    format!("Create a visual representation of the following experiment overview: {overview}")
}

/// Client for an OpenAI-compatible text and image generation API.
#[derive(Clone)]
pub struct GenAiClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
    chat_model: String,
    image_model: String,
    image_size: String,
}

impl GenAiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            agent: build_agent(config.http_timeout_secs),
            base_url: config.ai_base_url.clone(),
            api_key: config.ai_api_key.clone(),
            chat_model: config.chat_model.clone(),
            image_model: config.image_model.clone(),
            image_size: config.image_size.clone(),
        }
    }

    pub fn chat_request(&self, metadata_text: &str) -> Value {
        json!({
            "model": self.chat_model,
            "messages": [{ "role": "user", "content": overview_prompt(metadata_text) }],
        })
    }

    pub fn image_request(&self, overview: &str) -> Value {
        json!({
            "model": self.image_model,
            "prompt": visualization_prompt(overview),
            "n": 1,
            "size": self.image_size,
        })
    }

    /// Summarise uploaded metadata text.
    pub fn summarize(&self, metadata_text: &str) -> Result<String, ServiceError> {
        log::info!(
            "requesting overview from {} ({} bytes of metadata)",
            self.chat_model,
            metadata_text.len()
        );
        let body = self.post(CHAT, "chat/completions", self.chat_request(metadata_text))?;
        chat_content(&body)
    }

    /// Generate an illustration of an overview, returning the image URL.
    pub fn visualize(&self, overview: &str) -> Result<String, ServiceError> {
        log::info!("requesting visualization from {}", self.image_model);
        let body = self.post(IMAGES, "images/generations", self.image_request(overview))?;
        image_url(&body)
    }

    fn post(&self, service: &'static str, path: &str, payload: Value) -> Result<Value, ServiceError> {
        let url = format!("{}/{path}", self.base_url);
        let resp = self
            .agent
            .post(&url)
            .set("content-type", "application/json")
            .set("authorization", &format!("Bearer {}", self.api_key))
            .send_json(payload)
            .map_err(|e| call_error(service, e))?;
        resp.into_json()
            .map_err(|source| ServiceError::Decode { service, source })
    }
}

/// `choices[0].message.content` of a chat completion.
pub fn chat_content(body: &Value) -> Result<String, ServiceError> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ServiceError::MissingField {
            service: CHAT,
            field: "choices[0].message.content",
        })
}

/// `data[0].url` of an image generation response.
pub fn image_url(body: &Value) -> Result<String, ServiceError> {
    body.pointer("/data/0/url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .ok_or(ServiceError::MissingField {
            service: IMAGES,
            field: "data[0].url",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overview_prompt_wraps_metadata() {
        let prompt = overview_prompt("Study Title\tMice in space");
        assert!(prompt.starts_with(
            "Summarize the following experiment information for easy understanding:\n\nStudy Title\tMice in space\n\n"
        ));
        assert!(prompt.ends_with("before and after launch, and similar experiments."));
    }

    #[test]
    fn requests_use_configured_models() {
        let client = GenAiClient::new(&AppConfig::default());

        let chat = client.chat_request("x");
        assert_eq!(chat["model"], "gpt-3.5-turbo");
        assert_eq!(chat["messages"][0]["role"], "user");

        let image = client.image_request("An overview");
        assert_eq!(
            image,
            json!({
                "model": "absolute-reality-v1.8.1",
                "prompt": "Create a visual representation of the following experiment overview: An overview",
                "n": 1,
                "size": "1024x1024",
            })
        );
    }

    #[test]
    fn reads_chat_content() {
        let body = json!({
            "id": "chatcmpl-1",
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": "Six mice flew." } }]
        });
        assert_eq!(chat_content(&body).unwrap(), "Six mice flew.");
    }

    #[test]
    fn missing_chat_content_is_reported() {
        let err = chat_content(&json!({ "choices": [] })).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::MissingField {
                field: "choices[0].message.content",
                ..
            }
        ));
    }

    #[test]
    fn reads_image_url() {
        let body = json!({ "created": 1, "data": [{ "url": "https://cdn.example/img.png" }] });
        assert_eq!(image_url(&body).unwrap(), "https://cdn.example/img.png");
    }

    #[test]
    fn empty_image_data_is_missing_field() {
        assert!(image_url(&json!({ "data": [] })).is_err());
        assert!(image_url(&json!({ "data": [{ "url": "" }] })).is_err());
        assert!(image_url(&json!({})).is_err());
    }
}

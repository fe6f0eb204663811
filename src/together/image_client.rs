use crate::{
    config::TogetherConfig,
    error::{Result, TogetherError},
    logger,
    models::{ImageGenerationRequest, ImageGenerationResponse, TogetherImageResponse},
};
use async_trait::async_trait;

pub const DEFAULT_MODEL: &str = "black-forest-labs/FLUX.1-dev";

/// The single network operation both run modes are built on. Split out as a
/// trait so the batch driver can be exercised against a simulated client.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse>;
}

#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    config: TogetherConfig,
}

impl ImageClient {
    pub fn new(http: reqwest::Client, config: TogetherConfig) -> Self {
        Self { http, config }
    }

    /// Catalog of image models this tool knows about, as
    /// `(id, name, provider)`. Batch mode processes these in order, and the
    /// first entry's id is the single-mode default.
    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("black-forest-labs/FLUX.1-dev", "FLUX.1 [dev]", "Black Forest Labs"),
            ("black-forest-labs/FLUX.1-schnell", "FLUX.1 [schnell]", "Black Forest Labs"),
            ("black-forest-labs/FLUX.1.1-pro", "FLUX 1.1 [pro]", "Black Forest Labs"),
            ("stabilityai/stable-diffusion-xl-base-1.0", "Stable Diffusion XL 1.0", "Stability AI"),
        ]
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse> {
        let model = request.model.clone();
        let url = format!("{}/v1/images/generations", self.config.base_url());
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| TogetherError::ConfigError("No Together API key configured".into()))?;

        log::info!("Generating image-to-image transformation with {}...", model);
        log::info!("Input image: {}", request.image_url);
        let _timer = logger::timer(&format!("generation with {}", model));

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TogetherError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| TogetherError::ResponseError(e.to_string()))?;
            return Err(TogetherError::ApiError {
                status: status.as_u16(),
                message: extract_api_error(&body),
            });
        }

        let together_response: TogetherImageResponse = response
            .json()
            .await
            .map_err(|e| TogetherError::SerializationError(e.to_string()))?;

        let payload = together_response
            .data
            .first()
            .and_then(|d| d.b64_json.as_deref())
            .ok_or_else(|| {
                TogetherError::ResponseError("No image data received in response".into())
            })?;

        log::info!("✅ Image transformation complete with {}!", model);

        Ok(ImageGenerationResponse {
            image_data: format!("data:image/jpeg;base64,{}", payload),
            model,
        })
    }
}

/// Together error bodies carry `{"error":{"message":...}}`; fall back to the
/// raw body when the shape differs.
fn extract_api_error(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_first_catalog_entry() {
        let models = ImageClient::supported_models();
        assert_eq!(models[0].0, DEFAULT_MODEL);
    }

    #[test]
    fn test_catalog_entries_have_providers() {
        for (id, name, provider) in ImageClient::supported_models() {
            assert!(!id.is_empty());
            assert!(!name.is_empty());
            assert!(!provider.is_empty());
        }
    }

    #[test]
    fn test_extract_api_error_from_json_body() {
        let body = r#"{"error":{"message":"Invalid API key","type":"invalid_request_error"}}"#;
        assert_eq!(extract_api_error(body), "Invalid API key");
    }

    #[test]
    fn test_extract_api_error_falls_back_to_raw_body() {
        assert_eq!(extract_api_error("Bad Gateway"), "Bad Gateway");
    }
}

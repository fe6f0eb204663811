pub mod image_client;

use crate::{
    config::TogetherConfig,
    error::{Result, TogetherError},
};

pub use image_client::{ImageClient, ImageGenerator};

#[derive(Clone)]
pub struct TogetherClient {
    image_client: ImageClient,
}

impl TogetherClient {
    pub fn new(config: TogetherConfig) -> Result<Self> {
        if config.api_key.is_none() {
            return Err(TogetherError::ConfigError(
                "No Together API key configured".into(),
            ));
        }

        let http = reqwest::Client::new();

        Ok(Self {
            image_client: ImageClient::new(http, config),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

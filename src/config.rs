use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz";

#[derive(Debug, Clone)]
pub struct TogetherConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Default for TogetherConfig {
    fn default() -> Self {
        TogetherConfig {
            api_key: None,
            base_url: None,
        }
    }
}

impl TogetherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("TOGETHER_API_KEY").ok();
        let base_url = env::var("TOGETHER_BASE_URL").ok();

        TogetherConfig { api_key, base_url }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

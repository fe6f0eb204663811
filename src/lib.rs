pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod output;
pub mod runner;
pub mod together;

pub use config::TogetherConfig;
pub use error::{Result, TogetherError};
pub use models::{ImageGenerationRequest, ImageGenerationResponse, INPUT_IMAGE_URL};
pub use runner::BatchRecord;
pub use together::{ImageClient, ImageGenerator, TogetherClient};

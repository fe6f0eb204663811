use thiserror::Error;

#[derive(Debug, Error)]
pub enum TogetherError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Together API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Image data error: {0}")]
    DecodeError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, TogetherError>;

//! Error types for Folio

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),
}

impl FolioError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FolioError::Delivery(DeliveryError::NotConfigured(_)) => 2,
            FolioError::Delivery(_) => 1,
            FolioError::Config(_) => 1,
            FolioError::Content(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse content: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(String),

    #[error("Project {0} has a media item with zero width")]
    ZeroWidthMedia(String),
}

#[derive(Error, Debug, Clone)]
pub enum DeliveryError {
    #[error("Delivery service is not configured: {0}")]
    NotConfigured(String),

    #[error("Message validation failed: {0}")]
    Validation(String),

    #[error("Delivery request failed: {0}")]
    Request(String),

    #[error("Delivery rejected by service: {0}")]
    Rejected(String),
}

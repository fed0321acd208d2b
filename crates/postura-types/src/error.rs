//! Error types for postura-checker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid marked-photo file: {0}")]
    InvalidMarkedPhoto(String),

    #[error("Photo type missing: pass --view or set \"photoType\" in {0}")]
    MissingPhotoType(String),

    #[error("Assessment failed: {0}")]
    AssessmentFailed(String),

    #[error("CSV export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, Error>;

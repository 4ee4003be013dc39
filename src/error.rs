//! Error types for the I/O edges of the pipeline.
//!
//! Normalization, detection, classification and aggregation never fail;
//! only configuration, item files and the audit log return errors.

use thiserror::Error;

/// Result type for fallible crate operations
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Errors raised while loading configuration, decoding items or writing the audit log
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Item decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Audit log error: {0}")]
    Audit(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

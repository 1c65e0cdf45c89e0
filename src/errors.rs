use std::io;

use thiserror::Error;

/// Error type for setup, input and export failures.
///
/// Nothing in here is raised while records flow through the pipeline:
/// classification and identity decisions are total.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV failure: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid match pattern: {0}")]
    Regex(#[from] regex::Error),
    #[error("invalid search URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("configuration error: {0}")]
    Configuration(String),
}

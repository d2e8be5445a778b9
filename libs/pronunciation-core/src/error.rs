//! Error types for pronunciation-core.

use thiserror::Error;

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading scenario content.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate scenario ID {id}")]
    DuplicateScenario { id: u32 },

    #[error("duplicate goal ID {goal} in scenario {scenario}")]
    DuplicateGoal { scenario: u32, goal: u32 },

    #[error("scenario {id} has no words or phrases")]
    EmptyScenario { id: u32 },
}

/// Errors from invalid matching configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("threshold {value} is above 100")]
    ThresholdOutOfRange { value: u8 },

    #[error("close threshold {close} is above accept threshold {accept}")]
    ThresholdOrder { accept: u8, close: u8 },
}

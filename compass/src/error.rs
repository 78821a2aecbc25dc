//! Error types for the compass page.

use thiserror::Error;

use crate::chart::ChartError;

/// Errors surfaced by the page model and its configuration.
#[derive(Debug, Error)]
pub enum CompassError {
    /// A journey tab id that is not one of the known panels.
    #[error("unknown journey tab: {0}")]
    UnknownTab(String),

    /// A chart configuration failed validation.
    #[error("chart configuration rejected: {0}")]
    Chart(#[from] ChartError),

    /// Configuration JSON could not be parsed.
    #[error("failed to parse compass config: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but holds an out-of-range value.
    #[error("invalid compass config: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CompassError>;

//! Error types for the training pipeline.

use olist_data::DataError;
use olist_features::FeatureError;
use thiserror::Error;

/// Pipeline error type
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Loading or validating the raw tables failed
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Computing a feature failed
    #[error("Feature error: {0}")]
    Feature(#[from] FeatureError),

    /// The configuration file is not valid JSON for [`PipelineConfig`](crate::PipelineConfig)
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

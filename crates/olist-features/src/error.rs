//! Error types for feature computation.

use olist_data::DataError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Result type for feature computation.
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors raised while computing features.
///
/// Missing join partners and unparsable values are not errors: they travel
/// as nulls until an assembler applies its completeness policy.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Raw table access failed
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or reading raw tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// A table the pipeline needs was not provided by the source
    #[error("Missing table: {0}")]
    MissingTable(String),

    /// A join-key column is absent from a provided table
    #[error("Missing column {column} in table {table}")]
    MissingColumn {
        /// Logical table name
        table: String,
        /// Column that was expected
        column: String,
    },

    /// Table name not part of the marketplace catalogue
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// Data parsing error
    #[error("Data parsing error: {0}")]
    Parse(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

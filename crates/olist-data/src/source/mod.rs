//! Sources of raw marketplace tables.

pub mod csv;
pub mod memory;

pub use csv::{CsvDirectorySource, table_key};
pub use memory::InMemorySource;

use crate::error::Result;
use polars::prelude::DataFrame;
use std::collections::HashMap;

/// Anything that can hand over the raw tables, keyed by logical name.
///
/// Implementations only load; every derived value is computed from the
/// [`DataContext`](crate::DataContext) built on top of the returned mapping.
pub trait DataSource {
    /// Load every table this source knows about.
    fn load(&self) -> Result<HashMap<String, DataFrame>>;
}

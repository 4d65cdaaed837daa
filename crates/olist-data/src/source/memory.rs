//! Tables already held in memory.

use super::DataSource;
use crate::error::Result;
use crate::table::Table;
use polars::prelude::DataFrame;
use std::collections::HashMap;

/// A [`DataSource`] over frames the caller already built.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    tables: HashMap<String, DataFrame>,
}

impl InMemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a catalogue table.
    pub fn with_table(mut self, table: Table, frame: DataFrame) -> Self {
        self.tables.insert(table.name().to_string(), frame);
        self
    }

    /// Add or replace a table under an arbitrary name.
    pub fn with_named_table(mut self, name: impl Into<String>, frame: DataFrame) -> Self {
        self.tables.insert(name.into(), frame);
        self
    }

    /// Number of tables held.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the source holds no table.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl From<HashMap<String, DataFrame>> for InMemorySource {
    fn from(tables: HashMap<String, DataFrame>) -> Self {
        Self { tables }
    }
}

impl DataSource for InMemorySource {
    fn load(&self) -> Result<HashMap<String, DataFrame>> {
        Ok(self.tables.clone())
    }
}

//! Load-once snapshot of the raw tables.

use crate::error::{DataError, Result};
use crate::source::DataSource;
use crate::table::Table;
use crate::timestamp;
use polars::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Immutable view over the marketplace tables for one pipeline run.
///
/// Built once from a [`DataSource`] and shared by reference between every
/// feature builder, so all of them observe the same snapshot. Readers get
/// their own [`LazyFrame`] over the stored frame and can never alter it.
/// Cloning is cheap.
#[derive(Debug, Clone)]
pub struct DataContext {
    tables: Arc<BTreeMap<Table, DataFrame>>,
}

impl DataContext {
    /// Load every table from `source` and build the snapshot.
    pub fn load<S: DataSource + ?Sized>(source: &S) -> Result<Self> {
        Self::from_tables(source.load()?)
    }

    /// Build the snapshot from an already loaded mapping.
    ///
    /// Names outside the [`Table`] catalogue are ignored. Each known table
    /// must carry its [`Table::key_columns`]; timestamp columns are parsed
    /// and values that fail to parse become null.
    pub fn from_tables(raw: HashMap<String, DataFrame>) -> Result<Self> {
        let mut tables = BTreeMap::new();

        for (name, mut frame) in raw {
            let Ok(table) = Table::from_name(&name) else {
                debug!(table = %name, "ignoring table outside the catalogue");
                continue;
            };

            for column in table.key_columns() {
                if frame.column(column).is_err() {
                    return Err(DataError::MissingColumn {
                        table: name,
                        column: (*column).to_string(),
                    });
                }
            }

            for column in table.timestamp_columns() {
                if frame.column(column).is_err() {
                    continue;
                }
                let malformed = timestamp::normalize_column(&mut frame, column)?;
                if malformed > 0 {
                    warn!(%table, column, malformed, "unparsable timestamps replaced by null");
                }
            }

            info!(%table, rows = frame.height(), columns = frame.width(), "table ready");
            tables.insert(table, frame);
        }

        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Whether the snapshot holds `table`.
    pub fn contains(&self, table: Table) -> bool {
        self.tables.contains_key(&table)
    }

    /// Tables present in the snapshot, in catalogue order.
    pub fn tables(&self) -> impl Iterator<Item = Table> + '_ {
        self.tables.keys().copied()
    }

    /// Borrow the stored frame for `table`.
    pub fn frame(&self, table: Table) -> Result<&DataFrame> {
        self.tables
            .get(&table)
            .ok_or_else(|| DataError::MissingTable(table.name().to_string()))
    }

    /// A fresh lazy query over `table`.
    pub fn scan(&self, table: Table) -> Result<LazyFrame> {
        Ok(self.frame(table)?.clone().lazy())
    }
}

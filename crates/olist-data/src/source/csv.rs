//! Directory of CSV exports, one file per table.

use super::DataSource;
use crate::error::Result;
use polars::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Number of rows polars scans to infer column types.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Derive the logical table key from a CSV file name.
///
/// The `olist` and `dataset` tokens and the extension are removed and
/// surrounding underscores trimmed, so `olist_order_items_dataset.csv`
/// becomes `order_items`.
pub fn table_key(file_name: &str) -> String {
    file_name
        .replace("olist", "")
        .replace(".csv", "")
        .replace("dataset", "")
        .trim_matches('_')
        .to_string()
}

/// A [`DataSource`] reading every visible `*.csv` file in a directory.
#[derive(Debug, Clone)]
pub struct CsvDirectorySource {
    root: PathBuf,
}

impl CsvDirectorySource {
    /// Create a source rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory the source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the CSV files in the directory, sorted by file name.
    fn csv_files(&self) -> Result<Vec<(String, PathBuf)>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            let Some(file_name) = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string)
            else {
                continue;
            };
            if file_name.starts_with('.') || !file_name.ends_with(".csv") || !path.is_file() {
                continue;
            }
            files.push((file_name, path));
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

impl DataSource for CsvDirectorySource {
    fn load(&self) -> Result<HashMap<String, DataFrame>> {
        let mut tables = HashMap::new();

        for (file_name, path) in self.csv_files()? {
            let key = table_key(&file_name);
            debug!(file = %file_name, table = %key, "reading csv");

            let frame = CsvReadOptions::default()
                .with_has_header(true)
                .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
                .try_into_reader_with_file_path(Some(path))?
                .finish()?;

            info!(table = %key, rows = frame.height(), "loaded table");
            tables.insert(key, frame);
        }

        Ok(tables)
    }
}

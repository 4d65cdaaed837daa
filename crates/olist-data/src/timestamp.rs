//! Timestamp parsing for raw table columns.
//!
//! Raw tables usually carry timestamps as text. They are converted once, when
//! the [`DataContext`](crate::DataContext) is built, into millisecond
//! `Datetime` columns. Values that cannot be parsed become null rather than
//! failing the load.

use crate::error::Result;
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

/// Accepted datetime layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Data type every timestamp column is normalized to.
pub const TIMESTAMP_DTYPE: DataType = DataType::Datetime(TimeUnit::Milliseconds, None);

/// Parse a single timestamp. Date-only values resolve to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Convert the named column to [`TIMESTAMP_DTYPE`].
///
/// Returns the number of non-null input values that failed to parse.
/// Columns that are already temporal are cast directly.
pub fn normalize_column(df: &mut DataFrame, name: &str) -> Result<usize> {
    let column = df.column(name)?;

    let (series, malformed) = match column.dtype() {
        DataType::String => {
            let raw = column.str()?;
            let mut malformed = 0;
            let millis: Vec<Option<i64>> = raw
                .into_iter()
                .map(|value| {
                    value.and_then(|text| {
                        let parsed = parse_timestamp(text);
                        if parsed.is_none() && !text.trim().is_empty() {
                            malformed += 1;
                        }
                        parsed.map(|ts| ts.and_utc().timestamp_millis())
                    })
                })
                .collect();
            let series = Series::new(column.name().clone(), millis).cast(&TIMESTAMP_DTYPE)?;
            (series, malformed)
        }
        _ => (
            column.as_materialized_series().cast(&TIMESTAMP_DTYPE)?,
            0,
        ),
    };

    df.with_column(series)?;
    Ok(malformed)
}

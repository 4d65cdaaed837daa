//! Feature trait and the inputs shared by every projection of a run.

use crate::error::Result;
use crate::matching::MatchingTable;
use olist_data::{DataContext, Table};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Natural key of a training table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grain {
    /// One row per order
    Order,
    /// One row per seller
    Seller,
}

impl Grain {
    /// Key column identifying a row at this grain.
    pub const fn key_column(&self) -> &'static str {
        match self {
            Self::Order => "order_id",
            Self::Seller => "seller_id",
        }
    }
}

/// What an assembler does with rows that still hold a null after joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completeness {
    /// Keep every joined row, nulls included
    #[default]
    KeepIncomplete,
    /// Drop any row holding a null in any column
    DropIncomplete,
}

impl Completeness {
    /// Apply the policy to an assembled table.
    pub fn apply(self, assembled: DataFrame, grain: Grain) -> Result<DataFrame> {
        match self {
            Self::KeepIncomplete => Ok(assembled),
            Self::DropIncomplete => {
                let before = assembled.height();
                let complete = assembled.lazy().drop_nulls(None).collect()?;
                let dropped = before - complete.height();
                if dropped > 0 {
                    warn!(?grain, dropped, kept = complete.height(), "dropped incomplete rows");
                }
                Ok(complete)
            }
        }
    }
}

/// Everything a projection reads: the raw snapshot and the matching table
/// derived from it, computed once per run.
#[derive(Debug)]
pub struct FeatureInputs<'a> {
    data: &'a DataContext,
    matching: MatchingTable,
}

impl<'a> FeatureInputs<'a> {
    /// Build the matching table over `data`.
    pub fn new(data: &'a DataContext) -> Result<Self> {
        let matching = MatchingTable::build(data)?;
        info!(rows = matching.height(), "matching table built");
        Ok(Self { data, matching })
    }

    /// The raw snapshot.
    pub const fn data(&self) -> &'a DataContext {
        self.data
    }

    /// The order/review/item/seller correspondence.
    pub const fn matching(&self) -> &MatchingTable {
        &self.matching
    }

    /// Fresh lazy query over a raw table.
    pub fn scan(&self, table: Table) -> Result<LazyFrame> {
        Ok(self.data.scan(table)?)
    }
}

/// A projection from the snapshot to a frame keyed by its grain.
pub trait Feature {
    /// Registry name of the projection.
    fn name(&self) -> &str;

    /// Grain of the produced frame.
    fn grain(&self) -> Grain;

    /// Raw tables the projection reads.
    fn required_tables(&self) -> &[Table];

    /// Build the lazy query producing the projection.
    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame>;
}

/// A [`Feature`] driven by a configuration struct.
pub trait ConfigurableFeature: Feature + Sized {
    /// Configuration type.
    type Config;

    /// Create the projection from its configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Current configuration.
    fn config(&self) -> &Self::Config;
}

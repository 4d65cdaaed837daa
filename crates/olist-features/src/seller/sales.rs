//! Seller Sales
//!
//! Sum of item prices per seller. Freight is excluded.

use crate::error::Result;
use crate::expr::with_seller;
use crate::feature::{Feature, FeatureInputs, Grain};
use olist_data::Table;
use polars::prelude::*;

/// Sales sums item prices per seller
#[derive(Debug, Default)]
pub struct SalesFeature;

impl Feature for SalesFeature {
    fn name(&self) -> &str {
        "sales"
    }

    fn grain(&self) -> Grain {
        Grain::Seller
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::OrderItems]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let result = with_seller(inputs.scan(Table::OrderItems)?)
            .group_by_stable([col("seller_id")])
            .agg([col("price").cast(DataType::Float64).sum().alias("sales")]);

        Ok(result)
    }
}

//! Order item aggregates: item count, distinct seller count, price and freight.

use crate::error::Result;
use crate::feature::{Feature, FeatureInputs, Grain};
use olist_data::Table;
use polars::prelude::*;

/// Number of item rows per order (a quantity proxy, not distinct products)
#[derive(Debug, Default)]
pub struct NumberOfProductsFeature;

impl Feature for NumberOfProductsFeature {
    fn name(&self) -> &str {
        "number_of_products"
    }

    fn grain(&self) -> Grain {
        Grain::Order
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::OrderItems]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let result = inputs
            .scan(Table::OrderItems)?
            .group_by_stable([col("order_id")])
            .agg([len().cast(DataType::Int64).alias("number_of_products")]);

        Ok(result)
    }
}

/// Number of distinct sellers per order
#[derive(Debug, Default)]
pub struct NumberOfSellersFeature;

impl Feature for NumberOfSellersFeature {
    fn name(&self) -> &str {
        "number_of_sellers"
    }

    fn grain(&self) -> Grain {
        Grain::Order
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::OrderItems]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let result = inputs
            .scan(Table::OrderItems)?
            .group_by_stable([col("order_id")])
            .agg([col("seller_id")
                .drop_nulls()
                .n_unique()
                .cast(DataType::Int64)
                .alias("number_of_sellers")]);

        Ok(result)
    }
}

/// Total item price and total freight per order
#[derive(Debug, Default)]
pub struct PriceAndFreightFeature;

impl Feature for PriceAndFreightFeature {
    fn name(&self) -> &str {
        "price_and_freight"
    }

    fn grain(&self) -> Grain {
        Grain::Order
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::OrderItems]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let result = inputs
            .scan(Table::OrderItems)?
            .group_by_stable([col("order_id")])
            .agg([
                col("price").cast(DataType::Float64).sum().alias("price"),
                col("freight_value")
                    .cast(DataType::Float64)
                    .sum()
                    .alias("freight_value"),
            ]);

        Ok(result)
    }
}

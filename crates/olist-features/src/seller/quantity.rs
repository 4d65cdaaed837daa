//! Seller Order Volume
//!
//! Per seller, from the matching table:
//! - `n_orders`: distinct orders
//! - `quantity`: matching rows, a proxy for items sold
//! - `quantity_per_order`: `quantity / n_orders`
//! - `orders_per_month`: `n_orders / months_on_olist`
//!
//! In simulation mode `orders_per_month` is replaced by a fixed steady-state
//! rate, for what-if analysis of a hypothetical seller.

use crate::error::{FeatureError, Result};
use crate::expr::with_seller;
use crate::feature::{ConfigurableFeature, Feature, FeatureInputs, Grain};
use crate::seller::active_dates::ActiveDatesFeature;
use olist_data::Table;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Configuration for the Quantity feature
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantityConfig {
    /// Replace `orders_per_month` by a fixed rate (default: false)
    pub simulation: bool,
    /// Rate used in simulation mode (default: 30)
    pub simulated_orders_per_month: f64,
}

impl Default for QuantityConfig {
    fn default() -> Self {
        Self {
            simulation: false,
            simulated_orders_per_month: 30.0,
        }
    }
}

impl QuantityConfig {
    /// Check that the simulated rate is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.simulated_orders_per_month.is_finite() || self.simulated_orders_per_month < 0.0 {
            return Err(FeatureError::InvalidConfig(format!(
                "simulated_orders_per_month must be a non-negative number, got {}",
                self.simulated_orders_per_month
            )));
        }
        Ok(())
    }
}

/// Quantity measures order volume per seller
#[derive(Debug, Default)]
pub struct QuantityFeature {
    config: QuantityConfig,
}

impl Feature for QuantityFeature {
    fn name(&self) -> &str {
        "quantity"
    }

    fn grain(&self) -> Grain {
        Grain::Seller
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::Orders, Table::OrderReviews, Table::OrderItems]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        self.config.validate()?;

        let volume = with_seller(
            inputs
                .matching()
                .scan()
                .select([col("seller_id"), col("order_id")]),
        )
        .group_by_stable([col("seller_id")])
        .agg([
            col("order_id")
                .n_unique()
                .cast(DataType::Int64)
                .alias("n_orders"),
            col("order_id").count().cast(DataType::Int64).alias("quantity"),
        ])
        .with_columns([(col("quantity").cast(DataType::Float64)
            / col("n_orders").cast(DataType::Float64))
        .alias("quantity_per_order")]);

        let volume = if self.config.simulation {
            volume.with_columns([lit(self.config.simulated_orders_per_month).alias("orders_per_month")])
        } else {
            let months = ActiveDatesFeature
                .compute(inputs)?
                .select([col("seller_id"), col("months_on_olist")]);
            volume
                .join(
                    months,
                    [col("seller_id")],
                    [col("seller_id")],
                    JoinArgs::new(JoinType::Left),
                )
                .with_columns([(col("n_orders").cast(DataType::Float64)
                    / col("months_on_olist"))
                .alias("orders_per_month")])
        };

        let result = volume.select([
            col("seller_id"),
            col("n_orders"),
            col("quantity"),
            col("quantity_per_order"),
            col("orders_per_month"),
        ]);

        Ok(result)
    }
}

impl ConfigurableFeature for QuantityFeature {
    type Config = QuantityConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

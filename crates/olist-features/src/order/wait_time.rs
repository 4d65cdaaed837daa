//! Order Wait Time
//!
//! Days between purchase and delivery, the promised wait, and how late the
//! delivery was against the promise. Only lateness counts as delay: an early
//! or on-time delivery has `delay_vs_expected == 0`.

use crate::error::Result;
use crate::expr::{clip_negative, days_between};
use crate::feature::{ConfigurableFeature, Feature, FeatureInputs, Grain};
use olist_data::Table;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Configuration for the WaitTime feature
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitTimeConfig {
    /// Keep only orders with status `delivered` (default: true)
    pub delivered_only: bool,
}

impl Default for WaitTimeConfig {
    fn default() -> Self {
        Self {
            delivered_only: true,
        }
    }
}

/// WaitTime computes per-order delivery durations in fractional days
#[derive(Debug)]
pub struct WaitTimeFeature {
    config: WaitTimeConfig,
}

impl Feature for WaitTimeFeature {
    fn name(&self) -> &str {
        "wait_time"
    }

    fn grain(&self) -> Grain {
        Grain::Order
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::Orders]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let mut orders = inputs.scan(Table::Orders)?;
        if self.config.delivered_only {
            orders = orders.filter(col("order_status").eq(lit("delivered")));
        }

        let result = orders
            .with_columns([
                days_between("order_delivered_customer_date", "order_purchase_timestamp")
                    .alias("wait_time"),
                days_between("order_estimated_delivery_date", "order_purchase_timestamp")
                    .alias("expected_wait_time"),
                clip_negative(days_between(
                    "order_delivered_customer_date",
                    "order_estimated_delivery_date",
                ))
                .alias("delay_vs_expected"),
            ])
            .select([
                col("order_id"),
                col("wait_time"),
                col("expected_wait_time"),
                col("delay_vs_expected"),
                col("order_status"),
            ]);

        Ok(result)
    }
}

impl ConfigurableFeature for WaitTimeFeature {
    type Config = WaitTimeConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

impl Default for WaitTimeFeature {
    fn default() -> Self {
        Self::with_config(WaitTimeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_name() {
        let feature = WaitTimeFeature::default();
        assert_eq!(feature.name(), "wait_time");
        assert_eq!(feature.grain(), Grain::Order);
        assert_eq!(feature.required_tables(), &[Table::Orders]);
    }

    #[test]
    fn test_config_defaults() {
        assert!(WaitTimeConfig::default().delivered_only);
        let feature = WaitTimeFeature::with_config(WaitTimeConfig {
            delivered_only: false,
        });
        assert!(!feature.config().delivered_only);
    }
}

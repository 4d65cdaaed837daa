//! Seller Delay and Wait Time
//!
//! Per seller, over the items of delivered orders:
//! - `delay_to_carrier`: mean over items of the days the parcel reached the
//!   carrier after the shipping limit, zero when on time
//! - `wait_time`: mean over items of the days between purchase and delivery
//!
//! Both are means of per-item values, never recomputed from aggregated dates.

use crate::error::Result;
use crate::expr::{clip_negative, days_between, inner_join, with_seller};
use crate::feature::{Feature, FeatureInputs, Grain};
use olist_data::Table;
use polars::prelude::*;

/// DelayWaitTime averages per-item logistics durations per seller
#[derive(Debug, Default)]
pub struct DelayWaitTimeFeature;

impl Feature for DelayWaitTimeFeature {
    fn name(&self) -> &str {
        "delay_wait_time"
    }

    fn grain(&self) -> Grain {
        Grain::Seller
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::Orders, Table::OrderItems]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let items = inputs.scan(Table::OrderItems)?.select([
            col("order_id"),
            col("seller_id"),
            col("shipping_limit_date"),
        ]);
        let delivered = inputs
            .scan(Table::Orders)?
            .filter(col("order_status").eq(lit("delivered")))
            .select([
                col("order_id"),
                col("order_purchase_timestamp"),
                col("order_delivered_carrier_date"),
                col("order_delivered_customer_date"),
            ]);

        let result = with_seller(inner_join(items, delivered, "order_id"))
            .group_by_stable([col("seller_id")])
            .agg([
                clip_negative(days_between(
                    "order_delivered_carrier_date",
                    "shipping_limit_date",
                ))
                .mean()
                .alias("delay_to_carrier"),
                days_between("order_delivered_customer_date", "order_purchase_timestamp")
                    .mean()
                    .alias("wait_time"),
            ]);

        Ok(result)
    }
}

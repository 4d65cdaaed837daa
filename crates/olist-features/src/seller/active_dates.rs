//! Seller Activity Window
//!
//! First and last approved sale per seller, and the number of months between
//! them rounded up. A seller whose sales share a single instant is still
//! credited one month, which keeps `orders_per_month` finite.

use crate::error::Result;
use crate::expr::{DAYS_PER_MONTH, days_between, inner_join, with_seller};
use crate::feature::{Feature, FeatureInputs, Grain};
use olist_data::Table;
use polars::prelude::*;

/// `ceil(months between first and last sale)`, with zero mapped to one.
pub fn months_on_olist() -> Expr {
    let months = days_between("date_last_sale", "date_first_sale") / lit(DAYS_PER_MONTH);
    when(months.clone().eq(lit(0.0)))
        .then(lit(1.0))
        .otherwise(months.ceil())
}

/// ActiveDates spans each seller's sales history
#[derive(Debug, Default)]
pub struct ActiveDatesFeature;

impl Feature for ActiveDatesFeature {
    fn name(&self) -> &str {
        "active_dates"
    }

    fn grain(&self) -> Grain {
        Grain::Seller
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::Orders, Table::OrderReviews, Table::OrderItems]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let approvals = inputs
            .scan(Table::Orders)?
            .select([col("order_id"), col("order_approved_at")]);
        let sellers = inputs
            .matching()
            .scan()
            .select([col("seller_id"), col("order_id")]);

        let result = with_seller(inner_join(approvals, sellers, "order_id"))
            .group_by_stable([col("seller_id")])
            .agg([
                col("order_approved_at").min().alias("date_first_sale"),
                col("order_approved_at").max().alias("date_last_sale"),
            ])
            .with_columns([months_on_olist().alias("months_on_olist")]);

        Ok(result)
    }
}

//! Order Review Score
//!
//! One row per review with five-star and one-star indicators. An order with
//! several reviews yields several rows.

use crate::error::Result;
use crate::expr::indicator;
use crate::feature::{Feature, FeatureInputs, Grain};
use olist_data::Table;
use polars::prelude::*;

/// ReviewScore flags extreme review scores per order
#[derive(Debug, Default)]
pub struct ReviewScoreFeature;

impl Feature for ReviewScoreFeature {
    fn name(&self) -> &str {
        "review_score"
    }

    fn grain(&self) -> Grain {
        Grain::Order
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::OrderReviews]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let result = inputs.scan(Table::OrderReviews)?.select([
            col("order_id"),
            indicator(col("review_score").eq(lit(5))).alias("dim_is_five_star"),
            indicator(col("review_score").eq(lit(1))).alias("dim_is_one_star"),
            col("review_score"),
        ]);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_name() {
        let feature = ReviewScoreFeature;
        assert_eq!(feature.name(), "review_score");
        assert_eq!(feature.required_tables(), &[Table::OrderReviews]);
    }
}

//! Seller Review Economics
//!
//! Review shares and the monetary cost of bad reviews per seller. The
//! matching table can list a seller several times per order (once per item
//! and review), so (order, seller) pairs are deduplicated before the order
//! review flags are attached.

use crate::error::Result;
use crate::expr::{inner_join, with_seller};
use crate::feature::{Feature, FeatureInputs, Grain};
use crate::order::ReviewScoreFeature;
use olist_data::Table;
use polars::prelude::*;

/// Cost charged for a review, by score.
pub const REVIEW_COSTS: [(i32, f64); 5] = [(5, 0.0), (4, 0.0), (3, 40.0), (2, 50.0), (1, 100.0)];

/// Look up the cost of a single review score.
pub fn review_cost(score: i32) -> Option<f64> {
    REVIEW_COSTS
        .iter()
        .find(|(s, _)| *s == score)
        .map(|(_, cost)| *cost)
}

/// `review_score` mapped through [`REVIEW_COSTS`]; other scores map to null.
pub fn cost_of_review() -> Expr {
    let score = || col("review_score");
    let [(s5, c5), (s4, c4), (s3, c3), (s2, c2), (s1, c1)] = REVIEW_COSTS;

    when(score().eq(lit(s5)))
        .then(lit(c5))
        .when(score().eq(lit(s4)))
        .then(lit(c4))
        .when(score().eq(lit(s3)))
        .then(lit(c3))
        .when(score().eq(lit(s2)))
        .then(lit(c2))
        .when(score().eq(lit(s1)))
        .then(lit(c1))
        .otherwise(lit(NULL).cast(DataType::Float64))
}

/// SellerReviewScore aggregates review flags and costs per seller
#[derive(Debug, Default)]
pub struct SellerReviewScoreFeature;

impl Feature for SellerReviewScoreFeature {
    fn name(&self) -> &str {
        "seller_review_score"
    }

    fn grain(&self) -> Grain {
        Grain::Seller
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::Orders, Table::OrderReviews, Table::OrderItems]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let pairs = with_seller(
            inputs
                .matching()
                .scan()
                .select([col("order_id"), col("seller_id")]),
        )
        .unique_stable(None, UniqueKeepStrategy::First);
        let reviews = ReviewScoreFeature.compute(inputs)?;

        let result = inner_join(pairs, reviews, "order_id")
            .with_columns([cost_of_review().alias("cost_of_review")])
            .group_by_stable([col("seller_id")])
            .agg([
                col("dim_is_one_star")
                    .cast(DataType::Float64)
                    .mean()
                    .alias("share_of_one_stars"),
                col("dim_is_five_star")
                    .cast(DataType::Float64)
                    .mean()
                    .alias("share_of_five_stars"),
                col("review_score")
                    .cast(DataType::Float64)
                    .mean()
                    .alias("review_score"),
                col("cost_of_review").sum().alias("cost_of_reviews"),
            ]);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, Some(0.0))]
    #[case(4, Some(0.0))]
    #[case(3, Some(40.0))]
    #[case(2, Some(50.0))]
    #[case(1, Some(100.0))]
    #[case(0, None)]
    fn test_review_cost(#[case] score: i32, #[case] expected: Option<f64>) {
        assert_eq!(review_cost(score), expected);
    }

    #[test]
    fn test_cost_expression_matches_schedule() {
        let df = DataFrame::new(vec![Column::new(
            "review_score".into(),
            &[Some(5i64), Some(4), Some(3), Some(2), Some(1), Some(7), None],
        )])
        .unwrap();

        let costs: Vec<Option<f64>> = df
            .lazy()
            .select([cost_of_review().alias("cost")])
            .collect()
            .unwrap()
            .column("cost")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();

        assert_eq!(
            costs,
            vec![Some(0.0), Some(0.0), Some(40.0), Some(50.0), Some(100.0), None, None]
        );
    }
}

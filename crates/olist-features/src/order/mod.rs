//! Order-level features and the order training-set assembler.
//!
//! Each projection returns a frame keyed by `order_id`. The assembler
//! inner-joins them and then, as its last step, drops every row still holding
//! a null. Projections keep nulls, except that the distance projection skips
//! seller-customer pairs without coordinates.

pub mod distance;
pub mod items;
pub mod review_score;
pub mod wait_time;

pub use distance::{DistanceConfig, DistanceSellerCustomerFeature};
pub use items::{NumberOfProductsFeature, NumberOfSellersFeature, PriceAndFreightFeature};
pub use review_score::ReviewScoreFeature;
pub use wait_time::{WaitTimeConfig, WaitTimeFeature};

use crate::error::Result;
use crate::expr::inner_join;
use crate::feature::{Completeness, ConfigurableFeature, Feature, FeatureInputs, Grain};
use crate::registry;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Configuration for the order training set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderFeaturesConfig {
    /// Restrict to delivered orders (default: true)
    pub delivered_only: bool,
    /// Include the seller-customer distance (default: true)
    pub with_distance: bool,
    /// Distance settings
    pub distance: DistanceConfig,
}

impl Default for OrderFeaturesConfig {
    fn default() -> Self {
        Self {
            delivered_only: true,
            with_distance: true,
            distance: DistanceConfig::default(),
        }
    }
}

/// Order-grain projections over one run's inputs.
#[derive(Debug)]
pub struct OrderFeatures<'a> {
    inputs: &'a FeatureInputs<'a>,
    config: OrderFeaturesConfig,
}

impl<'a> OrderFeatures<'a> {
    /// Order features with default configuration.
    pub fn new(inputs: &'a FeatureInputs<'a>) -> Self {
        Self::with_config(inputs, OrderFeaturesConfig::default())
    }

    /// Order features with the given configuration.
    pub const fn with_config(inputs: &'a FeatureInputs<'a>, config: OrderFeaturesConfig) -> Self {
        Self { inputs, config }
    }

    /// Current configuration.
    pub const fn config(&self) -> &OrderFeaturesConfig {
        &self.config
    }

    /// `[order_id, wait_time, expected_wait_time, delay_vs_expected, order_status]`
    pub fn wait_time(&self, is_delivered: bool) -> Result<LazyFrame> {
        WaitTimeFeature::with_config(WaitTimeConfig {
            delivered_only: is_delivered,
        })
        .compute(self.inputs)
    }

    /// `[order_id, dim_is_five_star, dim_is_one_star, review_score]`
    pub fn review_score(&self) -> Result<LazyFrame> {
        ReviewScoreFeature.compute(self.inputs)
    }

    /// `[order_id, number_of_products]`
    pub fn number_of_products(&self) -> Result<LazyFrame> {
        NumberOfProductsFeature.compute(self.inputs)
    }

    /// `[order_id, number_of_sellers]`
    pub fn number_of_sellers(&self) -> Result<LazyFrame> {
        NumberOfSellersFeature.compute(self.inputs)
    }

    /// `[order_id, price, freight_value]`
    pub fn price_and_freight(&self) -> Result<LazyFrame> {
        PriceAndFreightFeature.compute(self.inputs)
    }

    /// `[order_id, distance_seller_customer]`
    pub fn distance_seller_customer(&self) -> Result<LazyFrame> {
        DistanceSellerCustomerFeature::with_config(self.config.distance.clone())
            .compute(self.inputs)
    }

    /// Order training table built from the configuration.
    pub fn training_data_from_config(&self) -> Result<DataFrame> {
        self.training_data(self.config.delivered_only, self.config.with_distance)
    }

    /// Join every projection on `order_id` and drop incomplete rows.
    ///
    /// Orders with several reviews keep their first review, so each order
    /// appears at most once.
    pub fn training_data(&self, is_delivered: bool, with_distance: bool) -> Result<DataFrame> {
        let mut features = vec![
            "wait_time",
            "review_score",
            "number_of_products",
            "number_of_sellers",
            "price_and_freight",
        ];

        let key = Grain::Order.key_column();
        let mut assembled = inner_join(
            self.wait_time(is_delivered)?,
            first_review(self.review_score()?),
            key,
        );
        assembled = inner_join(assembled, self.number_of_products()?, key);
        assembled = inner_join(assembled, self.number_of_sellers()?, key);
        assembled = inner_join(assembled, self.price_and_freight()?, key);

        if with_distance {
            assembled = inner_join(assembled, self.distance_seller_customer()?, key);
            features.push("distance_seller_customer");
        }

        let columns = registry::training_columns(Grain::Order, &features);
        let assembled = assembled
            .select(columns.into_iter().map(col).collect::<Vec<_>>())
            .sort([key], SortMultipleOptions::default().with_maintain_order(true))
            .collect()?;
        debug!(rows = assembled.height(), "order features joined");

        let training = Completeness::DropIncomplete.apply(assembled, Grain::Order)?;
        info!(
            rows = training.height(),
            columns = training.width(),
            is_delivered,
            with_distance,
            "order training set assembled"
        );

        Ok(training)
    }
}

/// One review row per order: the first in source order.
///
/// An order can carry several reviews; the training table keeps `order_id`
/// unique and takes every review column from the same row.
fn first_review(reviews: LazyFrame) -> LazyFrame {
    reviews
        .group_by_stable([col("order_id")])
        .agg([
            col("dim_is_five_star").first(),
            col("dim_is_one_star").first(),
            col("review_score").first(),
        ])
}

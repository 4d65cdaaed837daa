//! Seller-level features and the seller training-set assembler.
//!
//! Every projection is keyed by `seller_id`. The assembler inner-joins them,
//! derives the revenue columns and applies the configured
//! [`Completeness`] policy. The default keeps incomplete rows.

pub mod active_dates;
pub mod attributes;
pub mod delay;
pub mod quantity;
pub mod review_score;
pub mod sales;

pub use active_dates::{ActiveDatesFeature, months_on_olist};
pub use attributes::SellerAttributesFeature;
pub use delay::DelayWaitTimeFeature;
pub use quantity::{QuantityConfig, QuantityFeature};
pub use review_score::{REVIEW_COSTS, SellerReviewScoreFeature, review_cost};
pub use sales::SalesFeature;

use crate::error::{FeatureError, Result};
use crate::expr::inner_join;
use crate::feature::{Completeness, ConfigurableFeature, Feature, FeatureInputs, Grain};
use crate::registry;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Columns derived after the seller projections are joined.
pub const DERIVED_COLUMNS: [&str; 4] = [
    "commission",
    "revenues_from_monthly_fee",
    "revenues",
    "profits",
];

/// Configuration for the seller training set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerFeaturesConfig {
    /// Treatment of rows with nulls after joining (default: keep)
    pub completeness: Completeness,
    /// Share of sales taken as commission (default: 0.10)
    pub commission_rate: f64,
    /// Subscription fee charged per active month (default: 80)
    pub monthly_fee: f64,
    /// Order volume settings
    pub quantity: QuantityConfig,
}

impl Default for SellerFeaturesConfig {
    fn default() -> Self {
        Self {
            completeness: Completeness::KeepIncomplete,
            commission_rate: 0.10,
            monthly_fee: 80.0,
            quantity: QuantityConfig::default(),
        }
    }
}

impl SellerFeaturesConfig {
    /// Check rates and fees.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.commission_rate) {
            return Err(FeatureError::InvalidConfig(format!(
                "commission_rate must lie in [0, 1], got {}",
                self.commission_rate
            )));
        }
        if !self.monthly_fee.is_finite() || self.monthly_fee < 0.0 {
            return Err(FeatureError::InvalidConfig(format!(
                "monthly_fee must be a non-negative number, got {}",
                self.monthly_fee
            )));
        }
        self.quantity.validate()
    }
}

/// Seller-grain projections over one run's inputs.
#[derive(Debug)]
pub struct SellerFeatures<'a> {
    inputs: &'a FeatureInputs<'a>,
    config: SellerFeaturesConfig,
}

impl<'a> SellerFeatures<'a> {
    /// Seller features with default configuration.
    pub fn new(inputs: &'a FeatureInputs<'a>) -> Self {
        Self::with_config(inputs, SellerFeaturesConfig::default())
    }

    /// Seller features with the given configuration.
    pub const fn with_config(inputs: &'a FeatureInputs<'a>, config: SellerFeaturesConfig) -> Self {
        Self { inputs, config }
    }

    /// Current configuration.
    pub const fn config(&self) -> &SellerFeaturesConfig {
        &self.config
    }

    /// `[seller_id, seller_city, seller_state]`
    pub fn seller_features(&self) -> Result<LazyFrame> {
        SellerAttributesFeature.compute(self.inputs)
    }

    /// `[seller_id, delay_to_carrier, wait_time]`
    pub fn delay_wait_time(&self) -> Result<LazyFrame> {
        DelayWaitTimeFeature.compute(self.inputs)
    }

    /// `[seller_id, date_first_sale, date_last_sale, months_on_olist]`
    pub fn active_dates(&self) -> Result<LazyFrame> {
        ActiveDatesFeature.compute(self.inputs)
    }

    /// `[seller_id, share_of_one_stars, share_of_five_stars, review_score, cost_of_reviews]`
    pub fn review_score(&self) -> Result<LazyFrame> {
        SellerReviewScoreFeature.compute(self.inputs)
    }

    /// `[seller_id, n_orders, quantity, quantity_per_order, orders_per_month]`
    pub fn quantity(&self, is_simulation: bool) -> Result<LazyFrame> {
        QuantityFeature::with_config(QuantityConfig {
            simulation: is_simulation,
            ..self.config.quantity.clone()
        })
        .compute(self.inputs)
    }

    /// `[seller_id, sales]`
    pub fn sales(&self) -> Result<LazyFrame> {
        SalesFeature.compute(self.inputs)
    }

    /// Join every projection on `seller_id`, derive revenues and profits, then
    /// apply the completeness policy.
    pub fn training_data(&self) -> Result<DataFrame> {
        self.config.validate()?;

        let key = Grain::Seller.key_column();
        let mut assembled = inner_join(self.seller_features()?, self.delay_wait_time()?, key);
        assembled = inner_join(assembled, self.active_dates()?, key);
        assembled = inner_join(assembled, self.review_score()?, key);
        assembled = inner_join(
            assembled,
            self.quantity(self.config.quantity.simulation)?,
            key,
        );
        assembled = inner_join(assembled, self.sales()?, key);

        let mut columns = registry::training_columns(
            Grain::Seller,
            &[
                "seller_features",
                "delay_wait_time",
                "active_dates",
                "seller_review_score",
                "quantity",
                "sales",
            ],
        );
        columns.extend(DERIVED_COLUMNS);

        let assembled = assembled
            .with_columns([
                (col("sales") * lit(self.config.commission_rate)).alias("commission"),
                (col("months_on_olist") * lit(self.config.monthly_fee))
                    .alias("revenues_from_monthly_fee"),
            ])
            .with_columns([
                (col("commission") + col("revenues_from_monthly_fee")).alias("revenues")
            ])
            .with_columns([(col("revenues") - col("cost_of_reviews")).alias("profits")])
            .select(columns.into_iter().map(col).collect::<Vec<_>>())
            .sort([key], SortMultipleOptions::default().with_maintain_order(true))
            .collect()?;
        debug!(rows = assembled.height(), "seller features joined");

        let training = self.config.completeness.apply(assembled, Grain::Seller)?;
        info!(
            rows = training.height(),
            columns = training.width(),
            completeness = ?self.config.completeness,
            "seller training set assembled"
        );

        Ok(training)
    }
}

//! Seller-Customer Distance
//!
//! Great-circle distance between each seller shipping an order and the
//! customer receiving it. Coordinates come from the zip-code prefix through
//! the [`GeoResolver`]; an order with several sellers gets the mean distance.

use crate::error::Result;
use crate::feature::{ConfigurableFeature, Feature, FeatureInputs, Grain};
use crate::geo::{GeoResolver, GeoResolverConfig, haversine_expr};
use olist_data::Table;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

const COORDINATES: [&str; 4] = ["seller_lat", "seller_lng", "customer_lat", "customer_lng"];

/// Configuration for the DistanceSellerCustomer feature
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// How geolocation samples collapse per prefix
    pub geo: GeoResolverConfig,
}

/// DistanceSellerCustomer computes the mean seller-to-customer distance per order
#[derive(Debug, Default)]
pub struct DistanceSellerCustomerFeature {
    config: DistanceConfig,
}

impl Feature for DistanceSellerCustomerFeature {
    fn name(&self) -> &str {
        "distance_seller_customer"
    }

    fn grain(&self) -> Grain {
        Grain::Order
    }

    fn required_tables(&self) -> &[Table] {
        &[
            Table::Orders,
            Table::OrderReviews,
            Table::OrderItems,
            Table::Sellers,
            Table::Customers,
            Table::Geolocation,
        ]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let resolver = GeoResolver::with_config(self.config.geo.clone());
        let resolved = resolver.resolve_table(inputs.data())?;

        let sellers = GeoResolver::attach(
            inputs
                .scan(Table::Sellers)?
                .select([col("seller_id"), col("seller_zip_code_prefix")]),
            "seller_zip_code_prefix",
            resolved.clone(),
            "seller",
        );
        let customers = GeoResolver::attach(
            inputs
                .scan(Table::Customers)?
                .select([col("customer_id"), col("customer_zip_code_prefix")]),
            "customer_zip_code_prefix",
            resolved,
            "customer",
        );

        // One row per (order, seller, customer); the matching table repeats
        // a seller once per item and review.
        let [seller_lat, seller_lng, customer_lat, customer_lng] = COORDINATES;
        let result = inputs
            .matching()
            .scan()
            .select([col("order_id"), col("seller_id"), col("customer_id")])
            .unique_stable(None, UniqueKeepStrategy::First)
            .join(
                sellers,
                [col("seller_id")],
                [col("seller_id")],
                JoinArgs::new(JoinType::Inner),
            )
            .join(
                customers,
                [col("customer_id")],
                [col("customer_id")],
                JoinArgs::new(JoinType::Inner),
            )
            .filter(
                col(seller_lat)
                    .is_not_null()
                    .and(col(seller_lng).is_not_null())
                    .and(col(customer_lat).is_not_null())
                    .and(col(customer_lng).is_not_null()),
            )
            .select([
                col("order_id"),
                haversine_expr(seller_lng, seller_lat, customer_lng, customer_lat)
                    .alias("distance_seller_customer"),
            ])
            .group_by_stable([col("order_id")])
            .agg([col("distance_seller_customer").mean()]);
        debug!(policy = ?self.config.geo.policy, "seller-customer distance planned");

        Ok(result)
    }
}

impl ConfigurableFeature for DistanceSellerCustomerFeature {
    type Config = DistanceConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

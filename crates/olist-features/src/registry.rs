//! Feature Registry
//!
//! Central registry for all available projections. Besides lookup by name it
//! fixes the column contract of both training tables: a training table is its
//! key followed by the output columns of each joined projection, in order.

use olist_data::Table;
use std::collections::HashMap;

use crate::feature::Grain;

/// Feature metadata
#[derive(Debug, Clone)]
pub struct FeatureInfo {
    /// Feature name (unique identifier)
    pub name: &'static str,
    /// Grain of the produced frame
    pub grain: Grain,
    /// Brief description of what the feature measures
    pub description: &'static str,
    /// Raw tables the feature reads
    pub required_tables: &'static [Table],
    /// Produced columns, key excluded
    pub output_columns: &'static [&'static str],
}

/// Get all available feature info
pub fn available_features() -> Vec<FeatureInfo> {
    vec![
        // Order features
        FeatureInfo {
            name: "wait_time",
            grain: Grain::Order,
            description: "Days to delivery, promised days and days late",
            required_tables: &[Table::Orders],
            output_columns: &[
                "wait_time",
                "expected_wait_time",
                "delay_vs_expected",
                "order_status",
            ],
        },
        FeatureInfo {
            name: "review_score",
            grain: Grain::Order,
            description: "Review score with five-star and one-star flags",
            required_tables: &[Table::OrderReviews],
            output_columns: &["dim_is_five_star", "dim_is_one_star", "review_score"],
        },
        FeatureInfo {
            name: "number_of_products",
            grain: Grain::Order,
            description: "Number of item rows in the order",
            required_tables: &[Table::OrderItems],
            output_columns: &["number_of_products"],
        },
        FeatureInfo {
            name: "number_of_sellers",
            grain: Grain::Order,
            description: "Number of distinct sellers in the order",
            required_tables: &[Table::OrderItems],
            output_columns: &["number_of_sellers"],
        },
        FeatureInfo {
            name: "price_and_freight",
            grain: Grain::Order,
            description: "Total item price and total freight of the order",
            required_tables: &[Table::OrderItems],
            output_columns: &["price", "freight_value"],
        },
        FeatureInfo {
            name: "distance_seller_customer",
            grain: Grain::Order,
            description: "Mean great-circle distance between sellers and customer (km)",
            required_tables: &[
                Table::Orders,
                Table::OrderReviews,
                Table::OrderItems,
                Table::Sellers,
                Table::Customers,
                Table::Geolocation,
            ],
            output_columns: &["distance_seller_customer"],
        },
        // Seller features
        FeatureInfo {
            name: "seller_features",
            grain: Grain::Seller,
            description: "Seller city and state",
            required_tables: &[Table::Sellers],
            output_columns: &["seller_city", "seller_state"],
        },
        FeatureInfo {
            name: "delay_wait_time",
            grain: Grain::Seller,
            description: "Mean days late to carrier and mean customer wait",
            required_tables: &[Table::Orders, Table::OrderItems],
            output_columns: &["delay_to_carrier", "wait_time"],
        },
        FeatureInfo {
            name: "active_dates",
            grain: Grain::Seller,
            description: "First and last approved sale and months active",
            required_tables: &[Table::Orders, Table::OrderReviews, Table::OrderItems],
            output_columns: &["date_first_sale", "date_last_sale", "months_on_olist"],
        },
        FeatureInfo {
            name: "seller_review_score",
            grain: Grain::Seller,
            description: "Review shares, mean score and reputation cost",
            required_tables: &[Table::Orders, Table::OrderReviews, Table::OrderItems],
            output_columns: &[
                "share_of_one_stars",
                "share_of_five_stars",
                "review_score",
                "cost_of_reviews",
            ],
        },
        FeatureInfo {
            name: "quantity",
            grain: Grain::Seller,
            description: "Distinct orders, items sold and monthly order rate",
            required_tables: &[Table::Orders, Table::OrderReviews, Table::OrderItems],
            output_columns: &[
                "n_orders",
                "quantity",
                "quantity_per_order",
                "orders_per_month",
            ],
        },
        FeatureInfo {
            name: "sales",
            grain: Grain::Seller,
            description: "Total item price sold",
            required_tables: &[Table::OrderItems],
            output_columns: &["sales"],
        },
    ]
}

/// Get features by grain
pub fn features_by_grain(grain: Grain) -> Vec<FeatureInfo> {
    available_features()
        .into_iter()
        .filter(|f| f.grain == grain)
        .collect()
}

/// Get feature info by name
pub fn get_feature_info(name: &str) -> Option<FeatureInfo> {
    available_features().into_iter().find(|f| f.name == name)
}

/// Get a map of all features indexed by name
pub fn feature_map() -> HashMap<&'static str, FeatureInfo> {
    available_features()
        .into_iter()
        .map(|f| (f.name, f))
        .collect()
}

/// List all feature names
pub fn list_feature_names() -> Vec<&'static str> {
    available_features().into_iter().map(|f| f.name).collect()
}

/// Count features by grain
pub fn count_by_grain() -> HashMap<Grain, usize> {
    let mut counts = HashMap::new();
    for feature in available_features() {
        *counts.entry(feature.grain).or_insert(0) += 1;
    }
    counts
}

/// Key column followed by the output columns of `features`, in the given
/// order. Names not registered at `grain` are skipped.
pub fn training_columns(grain: Grain, features: &[&str]) -> Vec<&'static str> {
    let registered = features_by_grain(grain);
    let mut columns = vec![grain.key_column()];
    for name in features {
        if let Some(info) = registered.iter().find(|f| f.name == *name) {
            columns.extend_from_slice(info.output_columns);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{ConfigurableFeature, Feature};
    use crate::order::{
        DistanceSellerCustomerFeature, NumberOfProductsFeature, NumberOfSellersFeature,
        PriceAndFreightFeature, ReviewScoreFeature, WaitTimeFeature,
    };
    use crate::seller::{
        ActiveDatesFeature, DelayWaitTimeFeature, QuantityFeature, SalesFeature,
        SellerAttributesFeature, SellerReviewScoreFeature,
    };

    #[test]
    fn test_available_features_count() {
        assert_eq!(available_features().len(), 12);
    }

    #[test]
    fn test_count_by_grain() {
        let counts = count_by_grain();
        assert_eq!(counts.get(&Grain::Order), Some(&6));
        assert_eq!(counts.get(&Grain::Seller), Some(&6));
    }

    #[test]
    fn test_get_feature_info() {
        let quantity = get_feature_info("quantity").unwrap();
        assert_eq!(quantity.grain, Grain::Seller);
        assert!(quantity.output_columns.contains(&"orders_per_month"));

        assert!(get_feature_info("nonexistent_feature").is_none());
    }

    #[test]
    fn test_feature_map_and_names() {
        let map = feature_map();
        assert_eq!(map.len(), 12);
        assert!(map.contains_key("distance_seller_customer"));

        let names = list_feature_names();
        assert_eq!(names.len(), 12);
        assert!(names.contains(&"seller_review_score"));
    }

    #[test]
    fn test_registry_matches_implementations() {
        let features: Vec<Box<dyn Feature>> = vec![
            Box::new(WaitTimeFeature::default()),
            Box::new(ReviewScoreFeature),
            Box::new(NumberOfProductsFeature),
            Box::new(NumberOfSellersFeature),
            Box::new(PriceAndFreightFeature),
            Box::new(DistanceSellerCustomerFeature::with_config(Default::default())),
            Box::new(SellerAttributesFeature),
            Box::new(DelayWaitTimeFeature),
            Box::new(ActiveDatesFeature),
            Box::new(SellerReviewScoreFeature),
            Box::new(QuantityFeature::default()),
            Box::new(SalesFeature),
        ];

        for feature in &features {
            let info = get_feature_info(feature.name())
                .unwrap_or_else(|| panic!("{} is not registered", feature.name()));
            assert_eq!(info.grain, feature.grain(), "grain of {}", info.name);
            assert_eq!(
                info.required_tables,
                feature.required_tables(),
                "tables of {}",
                info.name
            );
        }
    }

    #[test]
    fn test_order_training_columns() {
        let columns = training_columns(
            Grain::Order,
            &[
                "wait_time",
                "review_score",
                "number_of_products",
                "number_of_sellers",
                "price_and_freight",
                "distance_seller_customer",
            ],
        );
        assert_eq!(
            columns,
            vec![
                "order_id",
                "wait_time",
                "expected_wait_time",
                "delay_vs_expected",
                "order_status",
                "dim_is_five_star",
                "dim_is_one_star",
                "review_score",
                "number_of_products",
                "number_of_sellers",
                "price",
                "freight_value",
                "distance_seller_customer",
            ]
        );
    }

    #[test]
    fn test_training_columns_skip_other_grain() {
        let columns = training_columns(Grain::Seller, &["sales", "price_and_freight"]);
        assert_eq!(columns, vec!["seller_id", "sales"]);
    }
}

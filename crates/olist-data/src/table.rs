//! Catalogue of the marketplace tables.

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical tables consumed by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    /// One row per order
    Orders,
    /// One row per (order, item) pair
    OrderItems,
    /// One row per review
    OrderReviews,
    /// One row per seller
    Sellers,
    /// One row per customer
    Customers,
    /// Zip-code prefix to coordinate samples, possibly several per prefix
    Geolocation,
}

impl Table {
    /// Every table in the catalogue.
    pub const ALL: [Self; 6] = [
        Self::Orders,
        Self::OrderItems,
        Self::OrderReviews,
        Self::Sellers,
        Self::Customers,
        Self::Geolocation,
    ];

    /// Logical name used as the key in a [`DataSource`](crate::DataSource) mapping.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::OrderItems => "order_items",
            Self::OrderReviews => "order_reviews",
            Self::Sellers => "sellers",
            Self::Customers => "customers",
            Self::Geolocation => "geolocation",
        }
    }

    /// Parse a logical table name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|table| table.name() == name)
            .ok_or_else(|| DataError::UnknownTable(name.to_string()))
    }

    /// Columns the pipeline joins or groups on. These are the only columns
    /// checked when a table enters the [`DataContext`](crate::DataContext).
    pub const fn key_columns(&self) -> &'static [&'static str] {
        match self {
            Self::Orders => &["order_id", "customer_id"],
            Self::OrderItems => &["order_id", "seller_id"],
            Self::OrderReviews => &["review_id", "order_id"],
            Self::Sellers => &["seller_id", "seller_zip_code_prefix"],
            Self::Customers => &["customer_id", "customer_zip_code_prefix"],
            Self::Geolocation => &["geolocation_zip_code_prefix"],
        }
    }

    /// Columns holding timestamps.
    pub const fn timestamp_columns(&self) -> &'static [&'static str] {
        match self {
            Self::Orders => &[
                "order_purchase_timestamp",
                "order_approved_at",
                "order_delivered_carrier_date",
                "order_delivered_customer_date",
                "order_estimated_delivery_date",
            ],
            Self::OrderItems => &["shipping_limit_date"],
            Self::OrderReviews => &["review_creation_date", "review_answer_timestamp"],
            Self::Sellers | Self::Customers | Self::Geolocation => &[],
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

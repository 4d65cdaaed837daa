//! Small marketplace snapshot shared by the integration tests.
//!
//! - `order_a`: one item from `s1`, delivered five days after purchase, early.
//! - `order_b`: three items from `s1` and `s2`, delivered three days late.
//! - `order_c`: one item from `s1`, delivered status but no delivery date.
//! - `order_d`: one item from `s1`, still shipped.
//!
//! Seller `s1` collects review scores 5, 1, 3 and 5; `s3` never sells.

#![allow(dead_code)]

use olist_data::{DataContext, InMemorySource, Table};
use polars::prelude::*;

pub(crate) fn orders() -> DataFrame {
    DataFrame::new(vec![
        Column::new(
            "order_id".into(),
            &["order_a", "order_b", "order_c", "order_d"],
        ),
        Column::new(
            "customer_id".into(),
            &["cust_a", "cust_b", "cust_c", "cust_d"],
        ),
        Column::new(
            "order_status".into(),
            &["delivered", "delivered", "delivered", "shipped"],
        ),
        Column::new(
            "order_purchase_timestamp".into(),
            &[
                "2018-01-01 10:00:00",
                "2018-03-01 00:00:00",
                "2018-02-01 00:00:00",
                "2018-04-09 00:00:00",
            ],
        ),
        Column::new(
            "order_approved_at".into(),
            &[
                "2018-01-01 12:00:00",
                "2018-03-01 06:00:00",
                "2018-02-01 08:00:00",
                "2018-04-10 00:00:00",
            ],
        ),
        Column::new(
            "order_delivered_carrier_date".into(),
            &[
                Some("2018-01-03 10:00:00"),
                Some("2018-03-04 00:00:00"),
                Some("2018-02-02 00:00:00"),
                Some("2018-04-11 00:00:00"),
            ],
        ),
        Column::new(
            "order_delivered_customer_date".into(),
            &[Some("2018-01-06 10:00:00"), Some("2018-03-13 00:00:00"), None, None],
        ),
        Column::new(
            "order_estimated_delivery_date".into(),
            &[
                "2018-01-11 10:00:00",
                "2018-03-10 00:00:00",
                "2018-02-15 00:00:00",
                "2018-04-30 00:00:00",
            ],
        ),
    ])
    .unwrap()
}

pub(crate) fn order_items() -> DataFrame {
    DataFrame::new(vec![
        Column::new(
            "order_id".into(),
            &["order_a", "order_b", "order_b", "order_b", "order_c", "order_d"],
        ),
        Column::new("order_item_id".into(), &[1i64, 1, 2, 3, 1, 1]),
        Column::new("product_id".into(), &["p1", "p2", "p3", "p3", "p1", "p4"]),
        Column::new("seller_id".into(), &["s1", "s1", "s2", "s2", "s1", "s1"]),
        Column::new(
            "shipping_limit_date".into(),
            &[
                "2018-01-02 10:00:00",
                "2018-03-05 00:00:00",
                "2018-03-03 00:00:00",
                "2018-03-03 00:00:00",
                "2018-02-03 00:00:00",
                "2018-04-12 00:00:00",
            ],
        ),
        Column::new("price".into(), &[100.0, 50.0, 30.0, 30.0, 80.0, 20.0]),
        Column::new("freight_value".into(), &[10.0, 5.0, 3.0, 3.0, 8.0, 2.0]),
    ])
    .unwrap()
}

pub(crate) fn order_reviews() -> DataFrame {
    DataFrame::new(vec![
        Column::new("review_id".into(), &["r_a", "r_b", "r_c", "r_d"]),
        Column::new(
            "order_id".into(),
            &["order_a", "order_b", "order_c", "order_d"],
        ),
        Column::new("review_score".into(), &[5i64, 1, 3, 5]),
    ])
    .unwrap()
}

pub(crate) fn sellers() -> DataFrame {
    DataFrame::new(vec![
        Column::new("seller_id".into(), &["s1", "s2", "s3"]),
        Column::new("seller_zip_code_prefix".into(), &[1001i64, 2002, 3003]),
        Column::new(
            "seller_city".into(),
            &["sao paulo", "rio de janeiro", "curitiba"],
        ),
        Column::new("seller_state".into(), &["SP", "RJ", "PR"]),
    ])
    .unwrap()
}

pub(crate) fn customers() -> DataFrame {
    DataFrame::new(vec![
        Column::new(
            "customer_id".into(),
            &["cust_a", "cust_b", "cust_c", "cust_d"],
        ),
        Column::new(
            "customer_unique_id".into(),
            &["u_a", "u_b", "u_c", "u_d"],
        ),
        Column::new("customer_zip_code_prefix".into(), &[1001i64, 2002, 1001, 2002]),
        Column::new(
            "customer_city".into(),
            &["sao paulo", "rio de janeiro", "sao paulo", "rio de janeiro"],
        ),
        Column::new("customer_state".into(), &["SP", "RJ", "SP", "RJ"]),
    ])
    .unwrap()
}

/// Prefix 1001 has two samples; the first one is [`SAO_PAULO`].
pub(crate) fn geolocation() -> DataFrame {
    DataFrame::new(vec![
        Column::new(
            "geolocation_zip_code_prefix".into(),
            &[1001i64, 2002, 1001, 3003],
        ),
        Column::new(
            "geolocation_lat".into(),
            &[SAO_PAULO.0, RIO.0, -23.65, -25.43],
        ),
        Column::new(
            "geolocation_lng".into(),
            &[SAO_PAULO.1, RIO.1, -46.73, -49.27],
        ),
    ])
    .unwrap()
}

/// First sample of prefix 1001, (lat, lng).
pub(crate) const SAO_PAULO: (f64, f64) = (-23.55, -46.63);

/// Only sample of prefix 2002, (lat, lng).
pub(crate) const RIO: (f64, f64) = (-22.90, -43.20);

pub(crate) fn source() -> InMemorySource {
    source_with_reviews(order_reviews())
}

/// The snapshot with its review table replaced.
pub(crate) fn source_with_reviews(reviews: DataFrame) -> InMemorySource {
    InMemorySource::new()
        .with_table(Table::Orders, orders())
        .with_table(Table::OrderItems, order_items())
        .with_table(Table::OrderReviews, reviews)
        .with_table(Table::Sellers, sellers())
        .with_table(Table::Customers, customers())
        .with_table(Table::Geolocation, geolocation())
}

pub(crate) fn marketplace() -> DataContext {
    DataContext::load(&source()).unwrap()
}

/// Row index of `key` in the `key_column` of `df`.
pub(crate) fn row_of(df: &DataFrame, key_column: &str, key: &str) -> usize {
    df.column(key_column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .position(|value| value == Some(key))
        .unwrap_or_else(|| panic!("{key} not found in {key_column}"))
}

pub(crate) fn f64_at(df: &DataFrame, column: &str, row: usize) -> Option<f64> {
    df.column(column).unwrap().f64().unwrap().get(row)
}

pub(crate) fn i64_at(df: &DataFrame, column: &str, row: usize) -> Option<i64> {
    df.column(column).unwrap().i64().unwrap().get(row)
}

pub(crate) fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

//! Order ↔ review ↔ item ↔ seller correspondence.
//!
//! The matching table links every identifier an order can reach. It is built
//! with full outer joins on `order_id` so that an order without a review or
//! without an item record still shows up, with nulls in the missing fields.
//!
//! Nothing is deduplicated here: an order with two items and one review gives
//! two rows, and one seller can repeat within an order. Consumers that need
//! (order, seller) uniqueness must deduplicate themselves.

use crate::error::Result;
use olist_data::{DataContext, Table};
use polars::prelude::*;

/// Materialized matching table.
#[derive(Debug, Clone)]
pub struct MatchingTable {
    frame: DataFrame,
}

impl MatchingTable {
    /// Columns of the matching table, in order.
    pub const COLUMNS: [&'static str; 5] = [
        "order_id",
        "customer_id",
        "review_id",
        "product_id",
        "seller_id",
    ];

    /// Build from the `orders`, `order_reviews` and `order_items` tables.
    pub fn build(data: &DataContext) -> Result<Self> {
        let orders = data
            .scan(Table::Orders)?
            .select([col("order_id"), col("customer_id")]);
        let reviews = data
            .scan(Table::OrderReviews)?
            .select([col("review_id"), col("order_id")]);
        let items = data.scan(Table::OrderItems)?.select([
            col("order_id"),
            col("product_id"),
            col("seller_id"),
        ]);

        Self::from_frames(orders, reviews, items)
    }

    /// Build from already projected frames.
    pub fn from_frames(orders: LazyFrame, reviews: LazyFrame, items: LazyFrame) -> Result<Self> {
        let frame = orders
            .join(reviews, [col("order_id")], [col("order_id")], outer_join())
            .join(items, [col("order_id")], [col("order_id")], outer_join())
            .select(Self::COLUMNS.map(col))
            .collect()?;

        Ok(Self { frame })
    }

    /// The materialized rows.
    pub const fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// A fresh lazy query over the table.
    pub fn scan(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }
}

/// Full outer join with the key columns merged into one.
fn outer_join() -> JoinArgs {
    JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(orders: DataFrame, reviews: DataFrame, items: DataFrame) -> DataFrame {
        MatchingTable::from_frames(orders.lazy(), reviews.lazy(), items.lazy())
            .unwrap()
            .frame()
            .clone()
    }

    #[test]
    fn test_orphans_are_preserved() {
        let orders = DataFrame::new(vec![
            Column::new("order_id".into(), &["o1", "o2", "o3"]),
            Column::new("customer_id".into(), &["c1", "c2", "c3"]),
        ])
        .unwrap();
        let reviews = DataFrame::new(vec![
            Column::new("review_id".into(), &["r1"]),
            Column::new("order_id".into(), &["o1"]),
        ])
        .unwrap();
        let items = DataFrame::new(vec![
            Column::new("order_id".into(), &["o1", "o1", "o2"]),
            Column::new("product_id".into(), &["p1", "p2", "p3"]),
            Column::new("seller_id".into(), &["s1", "s1", "s2"]),
        ])
        .unwrap();

        let matching = build(orders, reviews, items)
            .lazy()
            .sort(["order_id", "product_id"], Default::default())
            .collect()
            .unwrap();

        assert_eq!(matching.height(), 4);
        let names: Vec<&str> = matching
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, MatchingTable::COLUMNS.to_vec());

        let order_ids = matching.column("order_id").unwrap().str().unwrap();
        assert_eq!(order_ids.null_count(), 0);
        assert_eq!(order_ids.get(3), Some("o3"));

        // o2 has an item but no review; o3 has neither
        let reviews = matching.column("review_id").unwrap().str().unwrap();
        assert_eq!(reviews.get(2), None);
        assert_eq!(reviews.get(3), None);
        let sellers = matching.column("seller_id").unwrap().str().unwrap();
        assert_eq!(sellers.get(3), None);
    }

    #[test]
    fn test_no_deduplication() {
        let orders = DataFrame::new(vec![
            Column::new("order_id".into(), &["o1"]),
            Column::new("customer_id".into(), &["c1"]),
        ])
        .unwrap();
        let reviews = DataFrame::new(vec![
            Column::new("review_id".into(), &["r1", "r2"]),
            Column::new("order_id".into(), &["o1", "o1"]),
        ])
        .unwrap();
        let items = DataFrame::new(vec![
            Column::new("order_id".into(), &["o1", "o1"]),
            Column::new("product_id".into(), &["p1", "p1"]),
            Column::new("seller_id".into(), &["s1", "s1"]),
        ])
        .unwrap();

        // 2 reviews x 2 identical items
        assert_eq!(build(orders, reviews, items).height(), 4);
    }
}

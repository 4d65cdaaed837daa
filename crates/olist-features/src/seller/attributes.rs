//! Static seller attributes.

use crate::error::Result;
use crate::feature::{Feature, FeatureInputs, Grain};
use olist_data::Table;
use polars::prelude::*;

/// SellerAttributes exposes location columns, one row per distinct seller record
#[derive(Debug, Default)]
pub struct SellerAttributesFeature;

impl Feature for SellerAttributesFeature {
    fn name(&self) -> &str {
        "seller_features"
    }

    fn grain(&self) -> Grain {
        Grain::Seller
    }

    fn required_tables(&self) -> &[Table] {
        &[Table::Sellers]
    }

    fn compute(&self, inputs: &FeatureInputs<'_>) -> Result<LazyFrame> {
        let result = inputs
            .scan(Table::Sellers)?
            .select([col("seller_id"), col("seller_city"), col("seller_state")])
            .unique_stable(None, UniqueKeepStrategy::First);

        Ok(result)
    }
}

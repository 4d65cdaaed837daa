//! End-to-end training-set assembly.
//!
//! One [`TrainingPipeline`] run builds the matching table once and feeds the
//! same snapshot to both assemblers.

use crate::config::PipelineConfig;
use crate::error::Result;
use olist_data::{DataContext, DataSource};
use olist_features::{FeatureInputs, OrderFeatures, SellerFeatures};
use polars::prelude::*;
use std::collections::HashMap;
use tracing::{info, instrument};

/// Both training tables of one run.
#[derive(Debug, Clone)]
pub struct TrainingSets {
    /// One row per complete delivered order
    pub orders: DataFrame,
    /// One row per selling seller
    pub sellers: DataFrame,
}

impl TrainingSets {
    /// Tables keyed by `"orders"` and `"sellers"`.
    pub fn into_map(self) -> HashMap<String, DataFrame> {
        HashMap::from([
            ("orders".to_string(), self.orders),
            ("sellers".to_string(), self.sellers),
        ])
    }
}

/// Assembles the order and seller training sets from one snapshot.
#[derive(Debug, Clone)]
pub struct TrainingPipeline {
    data: DataContext,
    config: PipelineConfig,
}

impl TrainingPipeline {
    /// Pipeline over an already loaded snapshot.
    pub fn new(data: &DataContext, config: PipelineConfig) -> Self {
        Self {
            data: data.clone(),
            config,
        }
    }

    /// Load `source` once and build a pipeline over it.
    pub fn from_source(source: &dyn DataSource, config: PipelineConfig) -> Result<Self> {
        let data = DataContext::load(source)?;
        Ok(Self { data, config })
    }

    /// The snapshot every run reads.
    pub const fn data(&self) -> &DataContext {
        &self.data
    }

    /// Current configuration.
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Only the order training table.
    pub fn orders(&self) -> Result<DataFrame> {
        let inputs = FeatureInputs::new(&self.data)?;
        Ok(OrderFeatures::with_config(&inputs, self.config.orders.clone())
            .training_data_from_config()?)
    }

    /// Only the seller training table.
    pub fn sellers(&self) -> Result<DataFrame> {
        let inputs = FeatureInputs::new(&self.data)?;
        Ok(SellerFeatures::with_config(&inputs, self.config.sellers.clone()).training_data()?)
    }

    /// Build both training tables.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<TrainingSets> {
        let inputs = FeatureInputs::new(&self.data)?;

        let orders = OrderFeatures::with_config(&inputs, self.config.orders.clone())
            .training_data_from_config()?;
        let sellers =
            SellerFeatures::with_config(&inputs, self.config.sellers.clone()).training_data()?;

        info!(
            orders = orders.height(),
            sellers = sellers.height(),
            "training sets ready"
        );
        Ok(TrainingSets { orders, sellers })
    }
}

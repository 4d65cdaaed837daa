//! Pipeline configuration.
//!
//! Every field has a default, so a JSON file only needs the values it
//! changes:
//!
//! ```json
//! { "sellers": { "completeness": "drop_incomplete", "monthly_fee": 99.0 } }
//! ```

use crate::error::Result;
use olist_features::{OrderFeaturesConfig, SellerFeaturesConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for both training sets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Order training set settings
    pub orders: OrderFeaturesConfig,
    /// Seller training set settings
    pub sellers: SellerFeaturesConfig,
}

impl PipelineConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.sellers.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading pipeline configuration");
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use olist_features::{Completeness, GeoPolicy};

    #[test]
    fn test_empty_json_is_default() {
        let config = PipelineConfig::from_json_str("{}").unwrap();
        assert!(config.orders.delivered_only);
        assert!(config.orders.with_distance);
        assert_eq!(config.sellers.completeness, Completeness::KeepIncomplete);
        assert_eq!(config.sellers.commission_rate, 0.10);
        assert_eq!(config.sellers.monthly_fee, 80.0);
        assert!(!config.sellers.quantity.simulation);
    }

    #[test]
    fn test_partial_override() {
        let config = PipelineConfig::from_json_str(
            r#"{
                "orders": { "with_distance": false, "distance": { "geo": { "policy": "mean" } } },
                "sellers": { "completeness": "drop_incomplete", "quantity": { "simulation": true } }
            }"#,
        )
        .unwrap();

        assert!(!config.orders.with_distance);
        assert!(config.orders.delivered_only);
        assert_eq!(config.orders.distance.geo.policy, GeoPolicy::Mean);
        assert_eq!(config.sellers.completeness, Completeness::DropIncomplete);
        assert!(config.sellers.quantity.simulation);
        assert_eq!(config.sellers.quantity.simulated_orders_per_month, 30.0);
    }

    #[test]
    fn test_round_trip() {
        let config = PipelineConfig::default();
        let json = config.to_json_string().unwrap();
        let parsed = PipelineConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed.sellers.monthly_fee, config.sellers.monthly_fee);
    }

    #[test]
    fn test_invalid_json() {
        let err = PipelineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_invalid_values() {
        let err = PipelineConfig::from_json_str(r#"{ "sellers": { "commission_rate": 2.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, PipelineError::Feature(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PipelineConfig::from_json_file("/nonexistent/olist.json").unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }
}

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/olist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod expr;
pub mod feature;
pub mod geo;
pub mod matching;
pub mod order;
pub mod registry;
pub mod seller;

pub use error::{FeatureError, Result};
pub use feature::{Completeness, ConfigurableFeature, Feature, FeatureInputs, Grain};
pub use geo::{
    Coordinate, GeoPolicy, GeoResolver, GeoResolverConfig, haversine_distance, haversine_expr,
};
pub use matching::MatchingTable;
pub use order::{OrderFeatures, OrderFeaturesConfig};
pub use seller::{SellerFeatures, SellerFeaturesConfig};

// Re-export registry types for convenience
pub use registry::{FeatureInfo, available_features, features_by_grain, get_feature_info};

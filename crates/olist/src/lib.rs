#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/olist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;

// Re-export main types from sub-crates
pub use olist_data as data;
pub use olist_features as features;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use logging::init_tracing;
pub use pipeline::{TrainingPipeline, TrainingSets};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

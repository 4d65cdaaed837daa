//! Zip-code prefix to coordinate resolution and great-circle distance.
//!
//! The geolocation table holds several coordinate samples per zip-code
//! prefix. Joining it as-is would fan out every seller and customer row, so it
//! is first collapsed to one row per prefix by a named [`GeoPolicy`].

use crate::error::Result;
use olist_data::{DataContext, Table};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// How several samples for one prefix collapse to a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoPolicy {
    /// Keep the first sample in source order
    #[default]
    FirstSeen,
    /// Average latitude and longitude across samples
    Mean,
}

/// Configuration for the GeoResolver
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoResolverConfig {
    /// Collapse policy (default: first seen)
    pub policy: GeoPolicy,
}

/// Collapses geolocation samples to `[zip_code_prefix, lat, lng]`.
#[derive(Debug, Default)]
pub struct GeoResolver {
    config: GeoResolverConfig,
}

impl GeoResolver {
    /// Create a resolver with the given configuration.
    pub const fn with_config(config: GeoResolverConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub const fn config(&self) -> &GeoResolverConfig {
        &self.config
    }

    /// One row per prefix, in first-seen prefix order.
    pub fn resolve(&self, geolocation: LazyFrame) -> LazyFrame {
        let lat = col("geolocation_lat").cast(DataType::Float64);
        let lng = col("geolocation_lng").cast(DataType::Float64);

        let (lat, lng) = match self.config.policy {
            GeoPolicy::FirstSeen => (lat.first(), lng.first()),
            GeoPolicy::Mean => (lat.mean(), lng.mean()),
        };

        geolocation
            .group_by_stable([col("geolocation_zip_code_prefix")])
            .agg([lat.alias("lat"), lng.alias("lng")])
            .select([
                col("geolocation_zip_code_prefix").alias("zip_code_prefix"),
                col("lat"),
                col("lng"),
            ])
    }

    /// Resolve the `geolocation` table of a snapshot.
    pub fn resolve_table(&self, data: &DataContext) -> Result<LazyFrame> {
        Ok(self.resolve(data.scan(Table::Geolocation)?))
    }

    /// Left-join resolved coordinates onto `frame` by its `zip_column`.
    ///
    /// Adds `{prefix}_lat` and `{prefix}_lng`; rows whose prefix is unknown
    /// get nulls.
    pub fn attach(
        frame: LazyFrame,
        zip_column: &str,
        resolved: LazyFrame,
        prefix: &str,
    ) -> LazyFrame {
        let coordinates = resolved.select([
            col("zip_code_prefix"),
            col("lat").alias(format!("{prefix}_lat")),
            col("lng").alias(format!("{prefix}_lng")),
        ]);

        frame.join(
            coordinates,
            [col(zip_column)],
            [col("zip_code_prefix")],
            JoinArgs::new(JoinType::Left),
        )
    }
}

/// A point on the sphere, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate from degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &Self) -> f64 {
        haversine_distance(self.lng, self.lat, other.lng, other.lat)
    }
}

/// Haversine distance in kilometres between two (longitude, latitude) points
/// given in degrees.
pub fn haversine_distance(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let d_lat = lat2 - lat1;
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Column-wise [`haversine_distance`]: every argument names a column of
/// degrees. Nulls propagate.
pub fn haversine_expr(lng1: &str, lat1: &str, lng2: &str, lat2: &str) -> Expr {
    let radians = |name: &str| col(name) * lit(std::f64::consts::PI / 180.0);
    let squared = |e: Expr| e.clone() * e;

    let (phi1, phi2) = (radians(lat1), radians(lat2));
    let half_d_lat = (phi2.clone() - phi1.clone()) / lit(2.0);
    let half_d_lng = (radians(lng2) - radians(lng1)) / lit(2.0);

    let a = squared(half_d_lat.sin()) + phi1.cos() * phi2.cos() * squared(half_d_lng.sin());
    lit(2.0 * EARTH_RADIUS_KM) * a.sqrt().arcsin()
}

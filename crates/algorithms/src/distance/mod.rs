//! Geodesic distances between (longitude, latitude) pairs
//!
//! Two interchangeable metrics, both returning meters:
//! - Haversine: spherical approximation, closed form
//! - Vincenty: WGS84 ellipsoid, iterative
//!
//! A metric is picked once by name through [`DistanceFunction`] (or
//! [`resolve_metric`]) and then applied to every pair by the batch
//! evaluators in [`batch`].

pub mod batch;
mod haversine;
mod vincenty;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use geoweight_core::{Coordinate, Error, Result};

pub use batch::{dist_1to1, dist_1tom, dist_df, dist_mtom};
pub use haversine::{dist_haversine, EARTH_RADIUS_M};
pub use vincenty::{
    dist_vincenty, vincenty_inverse, VincentyReport, CONVERGENCE_TOL, MAX_ITERATIONS, WGS84_A,
    WGS84_B, WGS84_F,
};

/// Signature shared by every distance metric: `(xlon, xlat, ylon, ylat) -> meters`
pub type MetricFn = fn(f64, f64, f64, f64) -> f64;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.0
}

/// Available distance metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceFunction {
    /// Great-circle distance on a sphere
    #[default]
    Haversine,
    /// Geodesic distance on the WGS84 ellipsoid
    Vincenty,
}

impl DistanceFunction {
    /// All metrics, in declaration order
    pub const ALL: [DistanceFunction; 2] = [DistanceFunction::Haversine, DistanceFunction::Vincenty];

    /// Canonical (case-sensitive) name
    pub const fn name(self) -> &'static str {
        match self {
            DistanceFunction::Haversine => "Haversine",
            DistanceFunction::Vincenty => "Vincenty",
        }
    }

    /// The function implementing this metric
    #[inline]
    pub fn metric(self) -> MetricFn {
        match self {
            DistanceFunction::Haversine => dist_haversine,
            DistanceFunction::Vincenty => dist_vincenty,
        }
    }

    /// Distance between two coordinates
    #[inline]
    pub fn distance(self, from: Coordinate, to: Coordinate) -> f64 {
        (self.metric())(from.lon, from.lat, to.lon, to.lat)
    }
}

impl fmt::Display for DistanceFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Haversine" => Ok(DistanceFunction::Haversine),
            "Vincenty" => Ok(DistanceFunction::Vincenty),
            other => Err(Error::InvalidMetricName {
                name: other.to_string(),
            }),
        }
    }
}

/// Resolve a metric name (`"Haversine"` or `"Vincenty"`) to its function.
pub fn resolve_metric(name: &str) -> Result<MetricFn> {
    name.parse::<DistanceFunction>().map(DistanceFunction::metric)
}

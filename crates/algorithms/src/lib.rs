//! # geoweight Algorithms
//!
//! Great-circle distances and distance-weighted summaries of point tables.
//!
//! ## Modules
//!
//! - **distance**: Haversine and Vincenty metrics, one-to-one / one-to-many /
//!   elementwise / many-to-many evaluation
//! - **weighting**: inverse-distance weights (`level` and `log` transforms)
//! - **aggregate**: distance-weighted mean, population-and-distance weighted
//!   mean, nearest distance

pub mod aggregate;
pub mod distance;
pub mod weighting;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::aggregate::{
        dist_min, dist_min_with_interrupt, dist_weighted_mean, dist_weighted_mean_with_interrupt,
        popdist_weighted_mean, popdist_weighted_mean_with_interrupt, ColumnNames, DistMinParams,
        PopWeightedMeanParams, WeightedMeanParams,
    };
    pub use crate::distance::{
        dist_1to1, dist_1tom, dist_df, dist_haversine, dist_mtom, dist_vincenty, resolve_metric,
        vincenty_inverse, DistanceFunction, MetricFn, VincentyReport, EARTH_RADIUS_M,
    };
    pub use crate::weighting::{inverse_value, DistTransform};
    pub use geoweight_core::prelude::*;
}

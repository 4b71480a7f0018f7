//! Batch distance evaluation
//!
//! Four iteration shapes over one resolved metric:
//!
//! | Shape        | Inputs                | Output       |
//! |--------------|-----------------------|--------------|
//! | one-to-one   | point, point          | scalar       |
//! | one-to-many  | point, k points       | `Vec` of k   |
//! | elementwise  | k points, k points    | `Vec` of k   |
//! | many-to-many | n points, k points    | n×k `Array2` |
//!
//! Coordinates arrive as separate longitude / latitude slices. Every pair
//! of slices that describes one point set must have equal length; so must
//! both sides of an elementwise call. Mismatches are rejected up front
//! rather than truncated.
//!
//! The `dist_*` functions take the metric by name and resolve it once per
//! call; the methods on [`DistanceFunction`] take it already resolved.

use ndarray::Array2;
use geoweight_core::{Error, Result};

use super::{DistanceFunction, MetricFn};

impl DistanceFunction {
    /// Distance between one pair of points
    #[inline]
    pub fn one_to_one(self, xlon: f64, xlat: f64, ylon: f64, ylat: f64) -> f64 {
        (self.metric())(xlon, xlat, ylon, ylat)
    }

    /// Distances from one point to each of `k` points
    pub fn one_to_many(self, xlon: f64, xlat: f64, ylon: &[f64], ylat: &[f64]) -> Result<Vec<f64>> {
        Error::check_len("one-to-many latitudes", ylon.len(), ylat.len())?;
        Ok(one_to_many_with(self.metric(), xlon, xlat, ylon, ylat))
    }

    /// Distances between corresponding points of two equal-length sets
    pub fn elementwise(
        self,
        xlon: &[f64],
        xlat: &[f64],
        ylon: &[f64],
        ylat: &[f64],
    ) -> Result<Vec<f64>> {
        let k = ylon.len();
        Error::check_len("elementwise y latitudes", k, ylat.len())?;
        Error::check_len("elementwise x longitudes", k, xlon.len())?;
        Error::check_len("elementwise x latitudes", k, xlat.len())?;

        let fun = self.metric();
        Ok((0..k).map(|i| fun(xlon[i], xlat[i], ylon[i], ylat[i])).collect())
    }

    /// Full `n × k` distance matrix; cell `(i, j)` is `x[i] → y[j]`
    pub fn many_to_many(
        self,
        xlon: &[f64],
        xlat: &[f64],
        ylon: &[f64],
        ylat: &[f64],
    ) -> Result<Array2<f64>> {
        Error::check_len("many-to-many x latitudes", xlon.len(), xlat.len())?;
        Error::check_len("many-to-many y latitudes", ylon.len(), ylat.len())?;

        let fun = self.metric();
        Ok(Array2::from_shape_fn((xlon.len(), ylon.len()), |(i, j)| {
            fun(xlon[i], xlat[i], ylon[j], ylat[j])
        }))
    }
}

/// One-to-many kernel shared with the aggregators; lengths already checked.
#[inline]
pub(crate) fn one_to_many_with(
    fun: MetricFn,
    xlon: f64,
    xlat: f64,
    ylon: &[f64],
    ylat: &[f64],
) -> Vec<f64> {
    ylon.iter()
        .zip(ylat)
        .map(|(&lon, &lat)| fun(xlon, xlat, lon, lat))
        .collect()
}

/// One-to-one distance in meters using the named metric.
pub fn dist_1to1(xlon: f64, xlat: f64, ylon: f64, ylat: f64, funname: &str) -> Result<f64> {
    let fun: DistanceFunction = funname.parse()?;
    Ok(fun.one_to_one(xlon, xlat, ylon, ylat))
}

/// One-to-many distances in meters using the named metric.
pub fn dist_1tom(xlon: f64, xlat: f64, ylon: &[f64], ylat: &[f64], funname: &str) -> Result<Vec<f64>> {
    let fun: DistanceFunction = funname.parse()?;
    fun.one_to_many(xlon, xlat, ylon, ylat)
}

/// Elementwise distances in meters between corresponding coordinate pairs.
///
/// All four slices must have the same length.
pub fn dist_df(
    xlon: &[f64],
    xlat: &[f64],
    ylon: &[f64],
    ylat: &[f64],
    funname: &str,
) -> Result<Vec<f64>> {
    let fun: DistanceFunction = funname.parse()?;
    fun.elementwise(xlon, xlat, ylon, ylat)
}

/// Many-to-many distance matrix in meters using the named metric.
pub fn dist_mtom(
    xlon: &[f64],
    xlat: &[f64],
    ylon: &[f64],
    ylat: &[f64],
    funname: &str,
) -> Result<Array2<f64>> {
    let fun: DistanceFunction = funname.parse()?;
    fun.many_to_many(xlon, xlat, ylon, ylat)
}

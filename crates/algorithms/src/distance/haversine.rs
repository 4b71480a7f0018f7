//! Haversine great-circle distance
//!
//! Treats the Earth as a sphere of radius [`EARTH_RADIUS_M`]. Fast and
//! well-conditioned for small separations; error against the ellipsoid is
//! up to ~0.5%.

use super::deg_to_rad;

/// Mean Earth radius used by the haversine formula (meters).
pub const EARTH_RADIUS_M: f64 = 6_372_797.56;

/// Great-circle distance between two points in degrees, in meters.
///
/// ```text
/// h = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
/// d = 2R · asin(√h)
/// ```
#[inline]
pub fn dist_haversine(xlon: f64, xlat: f64, ylon: f64, ylat: f64) -> f64 {
    let lat1 = deg_to_rad(xlat);
    let lat2 = deg_to_rad(ylat);
    let dlat = lat2 - lat1;
    let dlon = deg_to_rad(ylon - xlon);

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;

    // rounding can push h a hair above 1 for antipodal points
    let h = if h > 1.0 { 1.0 } else { h };

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

//! Geographic coordinates in decimal degrees

use serde::{Deserialize, Serialize};

/// A (longitude, latitude) pair in decimal degrees.
///
/// No range validation is performed: values outside [-180, 180] / [-90, 90]
/// are carried through and simply yield whatever the trigonometry produces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees (x)
    pub lon: f64,
    /// Latitude in degrees (y)
    pub lat: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude in degrees
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Longitude and latitude converted to radians, as `(lon, lat)`
    #[inline]
    pub fn to_radians(self) -> (f64, f64) {
        (self.lon.to_radians(), self.lat.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lon, c.lat)
    }
}

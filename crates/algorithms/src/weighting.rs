//! Inverse-distance weights
//!
//! Turns distances into weights via an inverse power law:
//!
//! ```text
//! level: w = 1 / d^p
//! log:   w = 1 / ln(d)^p
//! ```
//!
//! The arithmetic is applied literally. A zero distance under `level` gives
//! `+inf`; a distance of exactly 1 under `log` gives `+inf`; distances below
//! 1 under `log` have a negative logarithm, which yields NaN for fractional
//! `p`. Callers that need a different treatment of these inputs must filter
//! them before weighting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use geoweight_core::{Error, Result};

/// How distances are transformed before inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistTransform {
    /// Distance used as is: `1 / d^p`
    #[default]
    Level,
    /// Natural log of distance: `1 / ln(d)^p`
    Log,
}

impl DistTransform {
    pub const fn name(self) -> &'static str {
        match self {
            DistTransform::Level => "level",
            DistTransform::Log => "log",
        }
    }

    /// Weight for a single distance
    #[inline]
    pub fn weight(self, distance: f64, exponent: f64) -> f64 {
        match self {
            DistTransform::Level => 1.0 / distance.powf(exponent),
            DistTransform::Log => 1.0 / distance.ln().powf(exponent),
        }
    }

    /// Weights for a slice of distances
    pub fn weights(self, distances: &[f64], exponent: f64) -> Vec<f64> {
        distances.iter().map(|&d| self.weight(d, exponent)).collect()
    }
}

impl fmt::Display for DistTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistTransform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "level" => Ok(DistTransform::Level),
            "log" => Ok(DistTransform::Log),
            other => Err(Error::InvalidTransform {
                name: other.to_string(),
            }),
        }
    }
}

/// Inverse-distance weights for `d`, with decay exponent `exp`.
///
/// `transform` is `"level"` or `"log"`.
pub fn inverse_value(d: &[f64], exp: f64, transform: &str) -> Result<Vec<f64>> {
    let transform: DistTransform = transform.parse()?;
    Ok(transform.weights(d, exp))
}

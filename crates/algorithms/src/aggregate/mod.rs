//! Table-to-table aggregations over pairwise distances
//!
//! Every aggregator walks the rows of an origin table `x`, computes the
//! distance from that row to every row of a reference table `y`, and
//! reduces the distances to one value:
//! - [`dist_weighted_mean`]: inverse-distance-weighted mean of a `y` measure
//! - [`popdist_weighted_mean`]: same, with weights also scaled by `y` population
//! - [`dist_min`]: distance to the nearest `y` row
//!
//! Output is a two-column [`DataFrame`]: the `x` identifier and the reduced
//! value, in `x` row order. Evaluation is brute force, O(n·k).
//!
//! Numeric degeneracies (zero distances, zero weight sums) are not trapped
//! and show up as NaN or infinity in the output.

mod nearest;
mod weighted_mean;

pub use nearest::{dist_min, dist_min_with_interrupt, DistMinParams, MINDIST_COLUMN};
pub use weighted_mean::{
    dist_weighted_mean, dist_weighted_mean_with_interrupt, popdist_weighted_mean,
    popdist_weighted_mean_with_interrupt, PopWeightedMeanParams, WeightedMeanParams,
    WMEASURE_COLUMN,
};

use serde::{Deserialize, Serialize};
use tracing::warn;
use geoweight_core::{DataFrame, Error, Interrupt, Result, Table};

/// Name of the identifier column in every result table
pub const ID_COLUMN: &str = "id";

/// Column names used to read the origin (`x`) and reference (`y`) tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    /// Identifier column in `x` (default: "id")
    pub x_id: String,
    /// Longitude column in `x` (default: "lon")
    pub x_lon: String,
    /// Latitude column in `x` (default: "lat")
    pub x_lat: String,
    /// Longitude column in `y` (default: "lon")
    pub y_lon: String,
    /// Latitude column in `y` (default: "lat")
    pub y_lat: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            x_id: "id".into(),
            x_lon: "lon".into(),
            x_lat: "lat".into(),
            y_lon: "lon".into(),
            y_lat: "lat".into(),
        }
    }
}

/// Origin rows: identifiers plus coordinates
pub(crate) struct Origins<'a> {
    pub ids: Vec<String>,
    pub lon: &'a [f64],
    pub lat: &'a [f64],
}

impl<'a> Origins<'a> {
    pub fn load<X: Table + ?Sized>(x: &'a X, cols: &ColumnNames) -> Result<Self> {
        let ids = x.string_column(&cols.x_id)?;
        Error::check_len("x id column", x.n_rows(), ids.len())?;
        let lon = numeric(x, &cols.x_lon)?;
        let lat = numeric(x, &cols.x_lat)?;
        Ok(Self { ids, lon, lat })
    }

    pub fn len(&self) -> usize {
        self.lon.len()
    }
}

/// Read a numeric column and make sure it spans the whole table
pub(crate) fn numeric<'a, T: Table + ?Sized>(table: &'a T, name: &str) -> Result<&'a [f64]> {
    let col = table.numeric_column(name)?;
    Error::check_len("table column", table.n_rows(), col.len())?;
    Ok(col)
}

pub(crate) fn check_cadence(every: usize) -> Result<()> {
    if every == 0 {
        return Err(Error::InvalidParameter {
            name: "interrupt_every",
            value: every.to_string(),
            reason: "must be at least 1".into(),
        });
    }
    Ok(())
}

pub(crate) fn check_decay(decay: f64) -> Result<()> {
    if !decay.is_finite() {
        return Err(Error::InvalidParameter {
            name: "decay",
            value: decay.to_string(),
            reason: "must be finite".into(),
        });
    }
    Ok(())
}

/// Run `reduce` for every origin row, polling `interrupt` every `every` rows.
pub(crate) fn reduce_rows<F>(
    origins: &Origins<'_>,
    every: usize,
    interrupt: &dyn Interrupt,
    mut reduce: F,
) -> Result<Vec<f64>>
where
    F: FnMut(f64, f64) -> f64,
{
    let n = origins.len();
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        if i % every == 0 && interrupt.is_interrupted() {
            warn!(row = i, rows = n, "aggregation interrupted by host");
            return Err(Error::Interrupted { row: i });
        }
        out.push(reduce(origins.lon[i], origins.lat[i]));
    }

    Ok(out)
}

/// Pair identifiers with computed values
pub(crate) fn result_table(ids: Vec<String>, value_col: &str, values: Vec<f64>) -> Result<DataFrame> {
    DataFrame::new()
        .with_text(ID_COLUMN, ids)?
        .with_numeric(value_col, values)
}

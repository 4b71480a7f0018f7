//! Nearest reference distance
//!
//! For every origin row, the distance in meters to the closest reference
//! row. Brute force over all pairs.

use serde::{Deserialize, Serialize};
use tracing::debug;
use geoweight_core::{DataFrame, Interrupt, NeverInterrupt, Result, Table};

use super::{check_cadence, numeric, reduce_rows, result_table, ColumnNames, Origins};
use crate::distance::batch::one_to_many_with;
use crate::distance::DistanceFunction;

/// Name of the value column produced by [`dist_min`]
pub const MINDIST_COLUMN: &str = "mindist";

/// Parameters for [`dist_min`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistMinParams {
    /// Origin / reference column names
    pub columns: ColumnNames,
    /// Distance metric (default: Haversine)
    pub dist_function: DistanceFunction,
    /// Poll the interrupt hook every this many rows (default: 100)
    pub interrupt_every: usize,
}

impl Default for DistMinParams {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            dist_function: DistanceFunction::Haversine,
            interrupt_every: 100,
        }
    }
}

impl DistMinParams {
    /// Set the distance metric by name ("Haversine" or "Vincenty")
    pub fn with_dist_function(mut self, name: &str) -> Result<Self> {
        self.dist_function = name.parse()?;
        Ok(self)
    }
}

/// Distance from every row of `x` to its nearest row of `y`.
///
/// # Returns
/// A table with columns `id` (from `x`) and `mindist` (meters). An empty
/// `y` gives `+inf`; a NaN distance makes that row's result NaN.
pub fn dist_min<X, Y>(x: &X, y: &Y, params: DistMinParams) -> Result<DataFrame>
where
    X: Table + ?Sized,
    Y: Table + ?Sized,
{
    dist_min_with_interrupt(x, y, params, &NeverInterrupt)
}

/// [`dist_min`] with a host cancellation hook.
pub fn dist_min_with_interrupt<X, Y>(
    x: &X,
    y: &Y,
    params: DistMinParams,
    interrupt: &dyn Interrupt,
) -> Result<DataFrame>
where
    X: Table + ?Sized,
    Y: Table + ?Sized,
{
    check_cadence(params.interrupt_every)?;

    let cols = &params.columns;
    let origins = Origins::load(x, cols)?;
    let ylon = numeric(y, &cols.y_lon)?;
    let ylat = numeric(y, &cols.y_lat)?;

    debug!(
        origins = origins.len(),
        references = ylon.len(),
        metric = %params.dist_function,
        "dist_min"
    );

    let fun = params.dist_function.metric();
    let out = reduce_rows(&origins, params.interrupt_every, interrupt, |lon, lat| {
        min_distance(&one_to_many_with(fun, lon, lat, ylon, ylat))
    })?;

    debug!(rows = out.len(), "dist_min done");
    result_table(origins.ids, MINDIST_COLUMN, out)
}

fn min_distance(dist: &[f64]) -> f64 {
    let mut min = f64::INFINITY;
    for &d in dist {
        if d.is_nan() {
            return f64::NAN;
        }
        if d < min {
            min = d;
        }
    }
    min
}

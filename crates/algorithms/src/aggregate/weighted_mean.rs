//! Inverse-distance-weighted means
//!
//! Estimates a measure at each origin location as a weighted average of the
//! measures taken at every reference location, where weights decay with
//! distance (and, for the population variant, grow with population).
//!
//! Reference:
//! Shepard, D. (1968). A two-dimensional interpolation function for
//! irregularly-spaced data. ACM National Conference.

use serde::{Deserialize, Serialize};
use tracing::debug;
use geoweight_core::{DataFrame, Interrupt, NeverInterrupt, Result, Table};

use super::{check_cadence, check_decay, numeric, reduce_rows, result_table, ColumnNames, Origins};
use crate::distance::batch::one_to_many_with;
use crate::distance::DistanceFunction;
use crate::weighting::DistTransform;

/// Name of the value column produced by the weighted means
pub const WMEASURE_COLUMN: &str = "wmeasure";

/// Parameters for [`dist_weighted_mean`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMeanParams {
    /// Origin / reference column names
    pub columns: ColumnNames,
    /// Distance metric (default: Haversine)
    pub dist_function: DistanceFunction,
    /// Distance transform applied before inversion (default: level)
    pub dist_transform: DistTransform,
    /// Decay exponent of the inverse weight (default: 2.0)
    pub decay: f64,
    /// Poll the interrupt hook every this many rows (default: 100)
    pub interrupt_every: usize,
}

impl Default for WeightedMeanParams {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            dist_function: DistanceFunction::Haversine,
            dist_transform: DistTransform::Level,
            decay: 2.0,
            interrupt_every: 100,
        }
    }
}

/// Parameters for [`popdist_weighted_mean`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopWeightedMeanParams {
    /// Origin / reference column names
    pub columns: ColumnNames,
    /// Population column in the reference table (default: "pop")
    pub pop_col: String,
    /// Distance metric (default: Haversine)
    pub dist_function: DistanceFunction,
    /// Distance transform applied before inversion (default: level)
    pub dist_transform: DistTransform,
    /// Decay exponent of the inverse weight (default: 2.0)
    pub decay: f64,
    /// Poll the interrupt hook every this many rows (default: 1000)
    pub interrupt_every: usize,
}

impl Default for PopWeightedMeanParams {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            pop_col: "pop".into(),
            dist_function: DistanceFunction::Haversine,
            dist_transform: DistTransform::Level,
            decay: 2.0,
            interrupt_every: 1000,
        }
    }
}

macro_rules! impl_name_setters {
    ($params:ty) => {
        impl $params {
            /// Set the distance metric by name ("Haversine" or "Vincenty")
            pub fn with_dist_function(mut self, name: &str) -> Result<Self> {
                self.dist_function = name.parse()?;
                Ok(self)
            }

            /// Set the distance transform by name ("level" or "log")
            pub fn with_dist_transform(mut self, name: &str) -> Result<Self> {
                self.dist_transform = name.parse()?;
                Ok(self)
            }
        }
    };
}

impl_name_setters!(WeightedMeanParams);
impl_name_setters!(PopWeightedMeanParams);

/// Inverse-distance-weighted mean of `measure_col` for every row of `x`.
///
/// # Algorithm
///
/// For each origin row i:
///
/// ```text
/// w_j  = 1 / t(d(x_i, y_j))^p
/// wm_i = Σ(w_j · m_j) / Σ(w_j)
/// ```
///
/// # Returns
/// A table with columns `id` (from `x`) and `wmeasure`.
pub fn dist_weighted_mean<X, Y>(
    x: &X,
    y: &Y,
    measure_col: &str,
    params: WeightedMeanParams,
) -> Result<DataFrame>
where
    X: Table + ?Sized,
    Y: Table + ?Sized,
{
    dist_weighted_mean_with_interrupt(x, y, measure_col, params, &NeverInterrupt)
}

/// [`dist_weighted_mean`] with a host cancellation hook.
pub fn dist_weighted_mean_with_interrupt<X, Y>(
    x: &X,
    y: &Y,
    measure_col: &str,
    params: WeightedMeanParams,
    interrupt: &dyn Interrupt,
) -> Result<DataFrame>
where
    X: Table + ?Sized,
    Y: Table + ?Sized,
{
    check_decay(params.decay)?;
    check_cadence(params.interrupt_every)?;

    let cols = &params.columns;
    let origins = Origins::load(x, cols)?;
    let measure = numeric(y, measure_col)?;
    let ylon = numeric(y, &cols.y_lon)?;
    let ylat = numeric(y, &cols.y_lat)?;

    debug!(
        origins = origins.len(),
        references = ylon.len(),
        metric = %params.dist_function,
        transform = %params.dist_transform,
        decay = params.decay,
        "dist_weighted_mean"
    );

    let fun = params.dist_function.metric();
    let out = reduce_rows(&origins, params.interrupt_every, interrupt, |lon, lat| {
        let dist = one_to_many_with(fun, lon, lat, ylon, ylat);
        let w = params.dist_transform.weights(&dist, params.decay);
        weighted_ratio(&w, measure)
    })?;

    debug!(rows = out.len(), "dist_weighted_mean done");
    result_table(origins.ids, WMEASURE_COLUMN, out)
}

/// Population- and inverse-distance-weighted mean of `measure_col`.
///
/// Like [`dist_weighted_mean`], but each reference row's weight is also
/// multiplied by its population, so nearby and populous locations dominate:
///
/// ```text
/// w_j  = pop_j / t(d(x_i, y_j))^p
/// wm_i = Σ(w_j · m_j) / Σ(w_j)
/// ```
pub fn popdist_weighted_mean<X, Y>(
    x: &X,
    y: &Y,
    measure_col: &str,
    params: PopWeightedMeanParams,
) -> Result<DataFrame>
where
    X: Table + ?Sized,
    Y: Table + ?Sized,
{
    popdist_weighted_mean_with_interrupt(x, y, measure_col, params, &NeverInterrupt)
}

/// [`popdist_weighted_mean`] with a host cancellation hook.
pub fn popdist_weighted_mean_with_interrupt<X, Y>(
    x: &X,
    y: &Y,
    measure_col: &str,
    params: PopWeightedMeanParams,
    interrupt: &dyn Interrupt,
) -> Result<DataFrame>
where
    X: Table + ?Sized,
    Y: Table + ?Sized,
{
    check_decay(params.decay)?;
    check_cadence(params.interrupt_every)?;

    let cols = &params.columns;
    let origins = Origins::load(x, cols)?;
    let measure = numeric(y, measure_col)?;
    let ylon = numeric(y, &cols.y_lon)?;
    let ylat = numeric(y, &cols.y_lat)?;
    let pop = numeric(y, &params.pop_col)?;

    debug!(
        origins = origins.len(),
        references = ylon.len(),
        metric = %params.dist_function,
        transform = %params.dist_transform,
        decay = params.decay,
        pop_col = %params.pop_col,
        "popdist_weighted_mean"
    );

    let fun = params.dist_function.metric();
    let out = reduce_rows(&origins, params.interrupt_every, interrupt, |lon, lat| {
        let dist = one_to_many_with(fun, lon, lat, ylon, ylat);
        let w: Vec<f64> = params
            .dist_transform
            .weights(&dist, params.decay)
            .into_iter()
            .zip(pop)
            .map(|(idw, &p)| idw * p)
            .collect();
        weighted_ratio(&w, measure)
    })?;

    debug!(rows = out.len(), "popdist_weighted_mean done");
    result_table(origins.ids, WMEASURE_COLUMN, out)
}

/// `Σ (w_j / Σw) · m_j`
///
/// Weights are normalised before multiplying so a single finite weight
/// reproduces its measure exactly. A zero or non-finite weight sum yields
/// NaN or infinity; no weights at all yields the empty sum, 0.
fn weighted_ratio(w: &[f64], measure: &[f64]) -> f64 {
    let w_sum: f64 = w.iter().sum();
    w.iter().zip(measure).map(|(&wj, &mj)| wj / w_sum * mj).sum()
}

//! Circle and compactness bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_compactness_err, map_points_err, rng_from_seed};
use mincircle::api::{compactness_xy, contains_xy, enclosing_circle_xy, CircleTuple};
use pyo3::prelude::*;

/// Smallest circle enclosing `points` as `(cx, cy, r)`, or `None` if empty.
#[pyfunction]
#[pyo3(signature = (points, seed=None))]
pub fn minimum_enclosing_circle(
    points: Vec<(f64, f64)>,
    seed: Option<u64>,
) -> PyResult<Option<CircleTuple>> {
    let mut rng = rng_from_seed(seed);
    enclosing_circle_xy(&points, &mut rng).map_err(map_points_err)
}

/// Containment with the same relative slack the solver uses.
#[pyfunction]
pub fn contains(circle: CircleTuple, point: (f64, f64)) -> bool {
    contains_xy(circle, point)
}

/// Polygon area divided by the area of its minimum enclosing circle.
#[pyfunction]
#[pyo3(signature = (ring, seed=None))]
pub fn compactness_index(ring: Vec<(f64, f64)>, seed: Option<u64>) -> PyResult<f64> {
    let mut rng = rng_from_seed(seed);
    compactness_xy(&ring, &mut rng).map_err(map_compactness_err)
}

/// `sqrt(area) / perimeter`, or `None` for a non-positive perimeter.
#[pyfunction]
pub fn compactness_index_sqrt(area: f64, perimeter: f64) -> Option<f64> {
    mincircle::circle::compactness_index_sqrt(area, perimeter)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(minimum_enclosing_circle, m)?)?;
    m.add_function(wrap_pyfunction!(contains, m)?)?;
    m.add_function(wrap_pyfunction!(compactness_index, m)?)?;
    m.add_function(wrap_pyfunction!(compactness_index_sqrt, m)?)?;
    Ok(())
}

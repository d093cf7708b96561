use mincircle::api::{CompactnessError, PointsError};
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Per-call RNG: seeded for reproducible runs, entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

pub fn map_points_err(err: PointsError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_compactness_err(err: CompactnessError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

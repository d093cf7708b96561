//! PyO3 bindings for `mincircle`.
//!
//! Notes
//! - Keep bindings thin and predictable: points are `(x, y)` tuples, circles
//!   are `(center_x, center_y, radius)` tuples, the empty set maps to `None`.
//! - Each call owns its RNG (seeded when `seed` is given), so concurrent calls
//!   from Python threads never share generator state.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn mincircle_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("CONTAIN_EPS", mincircle::circle::CONTAIN_EPS)?;
    m.add("__version__", mincircle::VERSION)?;
    geom::register(m)?;
    Ok(())
}

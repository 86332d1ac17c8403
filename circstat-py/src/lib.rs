//! Python bindings for the circstat circular statistics library.
//!
//! Range arguments are the textual tags `"(0, 360)"`, `"(-180, 180)"`,
//! `"(0, 2pi)"` and `"(-pi, pi)"`; sequences are 1-D float64 numpy arrays.

use numpy::PyReadonlyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use circstat::{AngleRange, CircStatError};

/// Convert a CircStatError to a Python exception.
fn to_py_err(err: CircStatError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_range(tag: &str) -> PyResult<AngleRange> {
    tag.parse().map_err(to_py_err)
}

fn to_vec(values: &PyReadonlyArray1<'_, f64>) -> Vec<f64> {
    match values.as_slice() {
        Ok(slice) => slice.to_vec(),
        Err(_) => values.as_array().iter().copied().collect(),
    }
}

/// Convert an angle between two ranges.
///
/// Args:
///     x: Angle expressed in `from_range`
///     from_range: Range tag of the input, e.g. "(0, 360)"
///     to_range: Range tag of the output, e.g. "(-pi, pi)"
///
/// Returns:
///     The angle expressed in `to_range`
#[pyfunction]
fn convert(x: f64, from_range: &str, to_range: &str) -> PyResult<f64> {
    Ok(circstat::convert(
        x,
        parse_range(from_range)?,
        parse_range(to_range)?,
    ))
}

/// Signed distance from `deg1` to `deg2`, in [-180, 180).
#[pyfunction]
fn angle_distance_degree(deg1: f64, deg2: f64) -> f64 {
    circstat::degree_distance(deg1, deg2)
}

/// Signed distance from `rad1` to `rad2`, in [-pi, pi).
#[pyfunction]
fn angle_distance_radians(rad1: f64, rad2: f64) -> f64 {
    circstat::radian_distance(rad1, rad2)
}

/// Circular mean of radian angles, in (-pi, pi]. NaN for an empty array.
#[pyfunction]
fn radians_angles_average(x: PyReadonlyArray1<'_, f64>) -> f64 {
    circstat::radian_mean(&to_vec(&x))
}

/// Circular mean of degree angles, in (-180, 180]. NaN for an empty array.
#[pyfunction]
fn degrees_angles_average(x: PyReadonlyArray1<'_, f64>) -> f64 {
    circstat::degree_mean(&to_vec(&x))
}

/// Circular correlation coefficient for two paired angle arrays.
///
/// Args:
///     x: First array of angles
///     input_range_x: Range tag of `x`
///     y: Second array of angles, same length as `x`
///     input_range_y: Range tag of `y`
///     parallel: Use the parallel implementation (default: False)
///
/// Returns:
///     Coefficient in [-1, 1], or NaN when either array has no circular variance
///
/// Raises:
///     ValueError: on an unknown range tag or arrays of different length
#[pyfunction]
#[pyo3(signature = (x, input_range_x, y, input_range_y, parallel = false))]
fn compute_pearson_circular_correlation(
    py: Python<'_>,
    x: PyReadonlyArray1<'_, f64>,
    input_range_x: &str,
    y: PyReadonlyArray1<'_, f64>,
    input_range_y: &str,
    parallel: bool,
) -> PyResult<f64> {
    let range_x = parse_range(input_range_x)?;
    let range_y = parse_range(input_range_y)?;
    let x = to_vec(&x);
    let y = to_vec(&y);

    py.detach(|| {
        if parallel {
            circstat::circular_correlation_par(&x, range_x, &y, range_y)
        } else {
            circstat::circular_correlation(&x, range_x, &y, range_y)
        }
    })
    .map_err(to_py_err)
}

/// Python module for circular statistics.
#[pymodule]
fn _circstat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert, m)?)?;
    m.add_function(wrap_pyfunction!(angle_distance_degree, m)?)?;
    m.add_function(wrap_pyfunction!(angle_distance_radians, m)?)?;
    m.add_function(wrap_pyfunction!(radians_angles_average, m)?)?;
    m.add_function(wrap_pyfunction!(degrees_angles_average, m)?)?;
    m.add_function(wrap_pyfunction!(compute_pearson_circular_correlation, m)?)?;

    let ranges: Vec<&str> = AngleRange::ALL.iter().map(|r| r.tag()).collect();
    m.add("RANGES", ranges)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}

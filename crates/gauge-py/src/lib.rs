//! PyO3 bindings for the `gauge` core.
//!
//! Notes
//! - Keep bindings thin: plain tuples in, plain tuples/strings out. Angles are
//!   degrees, as in the Rust crate.
//! - Validation errors surface as `ValueError` with the core's message.

use gauge::api::{classify as classify_angles, compute_angles as angles_of, AngleSet};
use pyo3::prelude::*;

mod common;

use common::{
    domain_from_py, interval_from_py, map_gauge_err, AnglesTuple, DomainTuple, IntervalTuple,
};

fn to_tuple(a: &AngleSet) -> AnglesTuple {
    (
        a.kernel_left,
        a.kernel_right,
        a.support_left,
        a.support_right,
        a.kernel_mid,
    )
}

fn from_tuple(a: AnglesTuple) -> AngleSet {
    AngleSet {
        kernel_left: a.0,
        kernel_right: a.1,
        support_left: a.2,
        support_right: a.3,
        kernel_mid: a.4,
    }
}

/// Angle (degrees) of `value` on a gauge over `domain = (lower, upper)`.
#[pyfunction]
fn map_value_to_angle(domain: DomainTuple, value: f64) -> PyResult<f64> {
    gauge::map_value_to_angle(&domain_from_py(domain), value).map_err(map_gauge_err)
}

/// Boundary angles `(kernel_left, kernel_right, support_left, support_right, kernel_mid)`.
#[pyfunction]
fn compute_angles(domain: DomainTuple, interval: IntervalTuple) -> PyResult<AnglesTuple> {
    angles_of(&domain_from_py(domain), &interval_from_py(interval))
        .map(|a| to_tuple(&a))
        .map_err(map_gauge_err)
}

/// Verdict name (`full-match`, `partial-match`, `no-match`) for two angle tuples.
#[pyfunction]
fn classify(norm: AnglesTuple, value: AnglesTuple) -> &'static str {
    classify_angles(&from_tuple(norm), &from_tuple(value)).as_str()
}

/// Needle outline in the local frame plus its rotation (degrees).
#[pyfunction]
fn needle_arms(value: AnglesTuple, radius: f64) -> (Vec<(f64, f64)>, f64) {
    let arms = from_tuple(value).needle_arms(radius);
    let pts = arms.outline().iter().map(|p| (p.x, p.y)).collect();
    (pts, arms.rotation)
}

#[pymodule]
fn gauge_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(map_value_to_angle, m)?)?;
    m.add_function(wrap_pyfunction!(compute_angles, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_function(wrap_pyfunction!(needle_arms, m)?)?;
    Ok(())
}

use gauge::api::{Domain, FuzzyInterval, GaugeError};
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

/// `(lower, upper)`
pub type DomainTuple = (f64, f64);
/// `(kernel_left, kernel_right, tolerance_left, tolerance_right)`
pub type IntervalTuple = (f64, f64, f64, f64);
/// `(kernel_left, kernel_right, support_left, support_right, kernel_mid)`
pub type AnglesTuple = (f64, f64, f64, f64, f64);

pub fn domain_from_py(d: DomainTuple) -> Domain {
    Domain {
        lower: d.0,
        upper: d.1,
    }
}

pub fn interval_from_py(iv: IntervalTuple) -> FuzzyInterval {
    FuzzyInterval {
        kernel_left: iv.0,
        kernel_right: iv.1,
        tolerance_left: iv.2,
        tolerance_right: iv.3,
    }
}

pub fn map_gauge_err(err: GaugeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

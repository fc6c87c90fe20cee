//! Validation errors raised at the API boundary.
//!
//! Every fallible entry point validates its inputs before computing a single
//! angle, so an error never comes with a partial result.

use thiserror::Error;

/// Errors surfaced by the gauge core.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GaugeError {
    /// `lower >= upper`, or a bound is not finite.
    #[error("invalid domain [{lower}, {upper}]: need finite bounds with lower < upper")]
    InvalidDomain { lower: f64, upper: f64 },
    /// Kernel bounds out of order or not finite, or a tolerance is negative/NaN.
    #[error("invalid interval: {reason}")]
    InvalidInterval { reason: IntervalDefect },
    /// A scalar without a position on the arc (NaN).
    #[error("value {0} cannot be placed on the gauge")]
    InvalidValue(f64),
}

/// What exactly is wrong with a rejected `FuzzyInterval`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum IntervalDefect {
    #[error("kernel bounds must be finite")]
    NonFiniteKernel,
    #[error("kernel_left exceeds kernel_right")]
    KernelOutOfOrder,
    #[error("tolerances must be finite and non-negative")]
    BadTolerance,
}

impl From<IntervalDefect> for GaugeError {
    fn from(reason: IntervalDefect) -> Self {
        GaugeError::InvalidInterval { reason }
    }
}

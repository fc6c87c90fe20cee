//! Input value types: the gauge domain and trapezoidal fuzzy intervals.

use crate::error::{GaugeError, IntervalDefect};

/// Linear range mapped onto the arc.
///
/// Invariants (checked by `validate`):
/// - both bounds finite, `lower < upper`, and `upper - lower` finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub lower: f64,
    pub upper: f64,
}

impl Domain {
    /// Validated constructor.
    pub fn new(lower: f64, upper: f64) -> Result<Self, GaugeError> {
        let d = Self { lower, upper };
        d.validate()?;
        Ok(d)
    }

    pub fn validate(&self) -> Result<(), GaugeError> {
        // `!(a < b)` also catches NaN bounds.
        if !(self.lower < self.upper) || !self.width().is_finite() {
            return Err(GaugeError::InvalidDomain {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }
}

/// Trapezoidal fuzzy number: crisp kernel widened by tolerance margins.
///
/// - kernel  `[kernel_left, kernel_right]`: full membership.
/// - support `[kernel_left - tolerance_left, kernel_right + tolerance_right]`:
///   possible membership.
///
/// Invariants (checked by `validate`):
/// - kernel bounds finite and ordered, tolerances finite and `>= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuzzyInterval {
    pub kernel_left: f64,
    pub kernel_right: f64,
    pub tolerance_left: f64,
    pub tolerance_right: f64,
}

impl FuzzyInterval {
    /// Validated constructor.
    pub fn new(
        kernel_left: f64,
        kernel_right: f64,
        tolerance_left: f64,
        tolerance_right: f64,
    ) -> Result<Self, GaugeError> {
        let iv = Self {
            kernel_left,
            kernel_right,
            tolerance_left,
            tolerance_right,
        };
        iv.validate()?;
        Ok(iv)
    }

    /// Crisp interval (zero tolerances).
    pub fn crisp(left: f64, right: f64) -> Result<Self, GaugeError> {
        Self::new(left, right, 0.0, 0.0)
    }

    pub fn validate(&self) -> Result<(), GaugeError> {
        if !self.kernel_left.is_finite() || !self.kernel_right.is_finite() {
            return Err(IntervalDefect::NonFiniteKernel.into());
        }
        if self.kernel_left > self.kernel_right {
            return Err(IntervalDefect::KernelOutOfOrder.into());
        }
        let tol_ok = |t: f64| t.is_finite() && t >= 0.0;
        if !tol_ok(self.tolerance_left) || !tol_ok(self.tolerance_right) {
            return Err(IntervalDefect::BadTolerance.into());
        }
        Ok(())
    }

    #[inline]
    pub fn support_left(&self) -> f64 {
        self.kernel_left - self.tolerance_left
    }

    #[inline]
    pub fn support_right(&self) -> f64 {
        self.kernel_right + self.tolerance_right
    }

    /// Kernel midpoint, the needle's pointing value. Always within the kernel.
    #[inline]
    pub fn kernel_mid(&self) -> f64 {
        let (l, r) = (self.kernel_left, self.kernel_right);
        let mid = (l + r) / 2.0;
        // The sum overflows only for kernels near f64::MAX; halving first then
        // stays finite. Rounding (subnormals included) is pulled back into
        // `[l, r]`; max/min instead of clamp so an unvalidated kernel cannot panic.
        let mid = if mid.is_finite() { mid } else { l / 2.0 + r / 2.0 };
        mid.max(l).min(r)
    }
}

//! Boundary angles of a fuzzy interval.

use super::needle::NeedleArms;
use super::types::{Domain, FuzzyInterval};
use crate::angle::angle_in;
use crate::error::GaugeError;

/// The five angles (degrees) of one interval on the arc.
///
/// Derived on every call from `(Domain, FuzzyInterval)`; never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSet {
    pub kernel_left: f64,
    pub kernel_right: f64,
    pub support_left: f64,
    pub support_right: f64,
    pub kernel_mid: f64,
}

impl AngleSet {
    /// Kernel as `(left, right)` angles.
    #[inline]
    pub fn kernel(&self) -> (f64, f64) {
        (self.kernel_left, self.kernel_right)
    }

    /// Support (tolerance zone) as `(left, right)` angles.
    #[inline]
    pub fn support(&self) -> (f64, f64) {
        (self.support_left, self.support_right)
    }

    /// `support_left <= kernel_left <= kernel_mid <= kernel_right <= support_right`.
    pub fn is_ordered(&self) -> bool {
        self.support_left <= self.kernel_left
            && self.kernel_left <= self.kernel_mid
            && self.kernel_mid <= self.kernel_right
            && self.kernel_right <= self.support_right
    }

    /// Needle-arm offsets at radius `r`, relative to the needle rotation.
    pub fn needle_arms(&self, r: f64) -> NeedleArms {
        NeedleArms::new(self, r)
    }
}

/// Compute the boundary angles of `interval` on `domain`.
///
/// Both inputs are validated first; an error means nothing was computed.
pub fn compute_angles(domain: &Domain, interval: &FuzzyInterval) -> Result<AngleSet, GaugeError> {
    domain.validate()?;
    interval.validate()?;
    Ok(angles_unchecked(domain, interval))
}

/// `compute_angles` for inputs the caller has already validated.
pub(crate) fn angles_unchecked(domain: &Domain, interval: &FuzzyInterval) -> AngleSet {
    let set = AngleSet {
        kernel_left: angle_in(domain, interval.kernel_left),
        kernel_right: angle_in(domain, interval.kernel_right),
        support_left: angle_in(domain, interval.support_left()),
        support_right: angle_in(domain, interval.support_right()),
        kernel_mid: angle_in(domain, interval.kernel_mid()),
    };
    debug_assert!(set.is_ordered(), "boundary angles out of order: {set:?}");
    set
}

//! One full gauge evaluation: norm angles, value angles, verdict.

use crate::classify::{classify_intervals, Compatibility};
use crate::error::GaugeError;
use crate::interval::angles_unchecked;
use crate::interval::{AngleSet, Domain, FuzzyInterval, NeedleArms};

/// Everything a renderer needs for one frame, minus layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeReading {
    pub norm: AngleSet,
    pub value: AngleSet,
    pub verdict: Compatibility,
}

impl GaugeReading {
    /// Needle arms for the value interval at radius `r`.
    pub fn needle(&self, r: f64) -> NeedleArms {
        self.value.needle_arms(r)
    }
}

/// Validate all three inputs, then map both intervals and classify.
///
/// The verdict comes from the raw boundary values, not from the clamped
/// angles, so intervals past the same domain bound are still told apart.
pub fn evaluate(
    domain: &Domain,
    norm: &FuzzyInterval,
    value: &FuzzyInterval,
) -> Result<GaugeReading, GaugeError> {
    domain.validate()?;
    norm.validate()?;
    value.validate()?;
    Ok(GaugeReading {
        norm: angles_unchecked(domain, norm),
        value: angles_unchecked(domain, value),
        verdict: classify_intervals(norm, value),
    })
}

//! Three-level compatibility of a value interval with a norm interval.
//!
//! Rule, first match wins:
//! 1. `NoMatch`: value support and norm support are disjoint.
//! 2. `FullMatch`: value support lies inside the closed norm kernel.
//! 3. `PartialMatch`: anything else.
//!
//! Containment is inclusive: a value support edge touching a norm kernel edge
//! still counts as inside.
//!
//! `classify_intervals` applies the rule to raw boundary values and is what
//! `evaluate` uses. `classify` applies it to angles; the mapper is monotone, so
//! both agree while the compared bounds stay inside the domain. Past a domain
//! bound angles collapse onto the arc end, and two disjoint supports beyond
//! the same bound look identical to `classify`.

use std::fmt;

use crate::interval::{AngleSet, FuzzyInterval};

/// Verdict of `classify`. Color choice is left to the renderer (`palette`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compatibility {
    FullMatch,
    PartialMatch,
    NoMatch,
}

impl Compatibility {
    pub const ALL: [Compatibility; 3] = [
        Compatibility::FullMatch,
        Compatibility::PartialMatch,
        Compatibility::NoMatch,
    ];

    /// Stable lowercase name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Compatibility::FullMatch => "full-match",
            Compatibility::PartialMatch => "partial-match",
            Compatibility::NoMatch => "no-match",
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boundaries the rule looks at, in any monotone coordinate.
#[derive(Clone, Copy, Debug)]
struct Bounds {
    kernel: (f64, f64),
    support: (f64, f64),
}

fn rule(norm: Bounds, value: Bounds) -> Compatibility {
    let (vl, vr) = value.support;
    if vr < norm.support.0 || vl > norm.support.1 {
        return Compatibility::NoMatch;
    }
    let in_kernel = |a: f64| a >= norm.kernel.0 && a <= norm.kernel.1;
    if in_kernel(vl) && in_kernel(vr) {
        Compatibility::FullMatch
    } else {
        Compatibility::PartialMatch
    }
}

impl From<&AngleSet> for Bounds {
    fn from(a: &AngleSet) -> Self {
        Self {
            kernel: a.kernel(),
            support: a.support(),
        }
    }
}

impl From<&FuzzyInterval> for Bounds {
    fn from(iv: &FuzzyInterval) -> Self {
        Self {
            kernel: (iv.kernel_left, iv.kernel_right),
            support: (iv.support_left(), iv.support_right()),
        }
    }
}

/// Classify `value` against `norm` from their angles. Total over valid angle
/// sets, but blind to anything beyond the domain bounds (see module docs).
pub fn classify(norm: &AngleSet, value: &AngleSet) -> Compatibility {
    rule(norm.into(), value.into())
}

/// Classify `value` against `norm` from their raw boundary values.
///
/// Callers validate both intervals first; `evaluate` does.
pub fn classify_intervals(norm: &FuzzyInterval, value: &FuzzyInterval) -> Compatibility {
    rule(norm.into(), value.into())
}

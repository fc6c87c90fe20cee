//! Fuzzy intervals on a gauge and their angular geometry.
//!
//! Purpose
//! - Hold the two input value types (`Domain`, `FuzzyInterval`) and their
//!   validation rules.
//! - Derive the five boundary angles of an interval (`AngleSet`) through the
//!   angle mapper, and the needle-arm offsets used to draw the pointer.
//!
//! Ordering
//! - For a valid interval, `support_left <= kernel_left <= kernel_mid
//!   <= kernel_right <= support_right` holds for the derived angles. It
//!   follows from mapper monotonicity plus non-negative tolerances; every
//!   comparison in `classify` relies on it.
//!
//! Code cross-refs: `angle::map_value_to_angle`, `classify::classify`

mod geometry;
mod needle;
mod types;

pub(crate) use geometry::angles_unchecked;
pub use geometry::{compute_angles, AngleSet};
pub use needle::NeedleArms;
pub use types::{Domain, FuzzyInterval};

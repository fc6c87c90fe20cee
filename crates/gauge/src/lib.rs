//! Fuzzy gauge core: value-to-angle mapping, interval geometry, compatibility.
//!
//! A gauge shows a measured fuzzy interval ("value") against a reference fuzzy
//! interval ("norm") on a fixed 150° arc. Everything here is a pure function of
//! its explicit inputs; callers re-evaluate whenever domain, norm or value
//! change. Markup and theming belong to the renderer.
//!
//! Evaluation order (leaf first)
//! - `angle`: scalar -> angle on `[MIN_ANGLE, MAX_ANGLE]`, clamped to the domain.
//! - `interval`: five boundary angles per interval, needle-arm coordinates.
//! - `classify`: value support vs. norm support/kernel -> `Compatibility`.
//!
//! Rendering helpers that only consume the numbers above live in `zones`
//! (sector endpoints) and `palette` (verdict colors).

pub mod angle;
pub mod api;
pub mod classify;
mod error;
pub mod interval;
pub mod palette;
pub mod reading;
pub mod sample;
pub mod zones;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use angle::{map_value_to_angle, MAX_ANGLE, MIN_ANGLE};
pub use classify::{classify, classify_intervals, Compatibility};
pub use error::{GaugeError, IntervalDefect};
pub use interval::{compute_angles, AngleSet, Domain, FuzzyInterval, NeedleArms};
pub use reading::{evaluate, GaugeReading};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{map_value_to_angle, MAX_ANGLE, MIN_ANGLE};
    pub use crate::classify::{classify, classify_intervals, Compatibility};
    pub use crate::error::GaugeError;
    pub use crate::interval::{compute_angles, AngleSet, Domain, FuzzyInterval, NeedleArms};
    pub use crate::reading::{evaluate, GaugeReading};
    pub use crate::zones::{GaugeLayout, GaugeZones, Sector};
    pub use nalgebra::Vector2 as Vec2;
}

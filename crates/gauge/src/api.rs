//! Curated surface for renderers and bindings.
//!
//! One import covers a full frame: inputs, the three core stages, and the
//! layout helpers that turn their numbers into sectors and colors.

// Inputs and core stages
pub use crate::angle::{map_value_to_angle, polar_point, MAX_ANGLE, MIN_ANGLE};
pub use crate::classify::{classify, classify_intervals, Compatibility};
pub use crate::error::{GaugeError, IntervalDefect};
pub use crate::interval::{compute_angles, AngleSet, Domain, FuzzyInterval, NeedleArms};
pub use crate::reading::{evaluate, GaugeReading};
// Layout
pub use crate::palette::{verdict_color, zone_fill};
pub use crate::zones::{GaugeLayout, GaugeZones, Sector, ZoneKind};
// Sampling
pub use crate::sample::{
    draw as draw_sample, draw_many as draw_samples, GaugeSample, ReplayToken, SampleCfg,
};

//! Needle-arm coordinates in the needle's own frame.
//!
//! The pointer is drawn once in a local frame whose +y axis is the needle
//! direction (the value kernel's midpoint), then rotated as a whole by
//! `kernel_mid`. Each boundary therefore uses the *relative* angle
//! `boundary - kernel_mid`, so the flared kernel/support wings follow the
//! value interval under any rotation.

use nalgebra::{Rotation2, Vector2};

use super::geometry::AngleSet;
use crate::angle::polar_point;

/// Local-frame offsets of the value boundaries at a fixed radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeedleArms {
    pub radius: f64,
    /// Rotation to apply to the local frame, degrees (= value `kernel_mid`).
    pub rotation: f64,
    pub support_left: Vector2<f64>,
    pub kernel_left: Vector2<f64>,
    pub kernel_right: Vector2<f64>,
    pub support_right: Vector2<f64>,
}

impl NeedleArms {
    pub fn new(angles: &AngleSet, r: f64) -> Self {
        let rel = |a: f64| polar_point(a - angles.kernel_mid, r);
        Self {
            radius: r,
            rotation: angles.kernel_mid,
            support_left: rel(angles.support_left),
            kernel_left: rel(angles.kernel_left),
            kernel_right: rel(angles.kernel_right),
            support_right: rel(angles.support_right),
        }
    }

    /// Needle tip in the local frame, always `(0, r)`.
    #[inline]
    pub fn tip(&self) -> Vector2<f64> {
        Vector2::new(0.0, self.radius)
    }

    /// Outline points left to right: support, kernel, tip, kernel, support.
    pub fn outline(&self) -> [Vector2<f64>; 5] {
        [
            self.support_left,
            self.kernel_left,
            self.tip(),
            self.kernel_right,
            self.support_right,
        ]
    }

    /// Rotation taking the local frame to the gauge frame.
    ///
    /// Gauge angles grow clockwise from +y, so a gauge rotation by `rotation`
    /// is a counterclockwise rotation by `-rotation`.
    #[inline]
    pub fn frame(&self) -> Rotation2<f64> {
        Rotation2::new(-self.rotation.to_radians())
    }

    /// `outline()` rotated into the gauge frame.
    pub fn to_absolute(&self) -> [Vector2<f64>; 5] {
        let rot = self.frame();
        self.outline().map(|p| rot * p)
    }
}

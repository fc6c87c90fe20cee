//! Colored zones as circular sectors from the gauge center.
//!
//! The dial is a fixed sector over the whole arc. On top of it sit the norm
//! tolerance and norm kernel sectors (outer radius) and the value tolerance
//! and value kernel sectors (inner radius). A renderer turns each `Sector`
//! into a path: line to `start_point`, arc to `end_point`, close.
//!
//! Radii are fractions of `GaugeLayout::base_size`. Everything is drawn in
//! that base frame; `size` only sets how large it is shown, via `scale` and a
//! fixed `FRAME_MARGIN` on every side.

use nalgebra::Vector2;

use crate::angle::{polar_point, MAX_ANGLE, MIN_ANGLE};
use crate::interval::AngleSet;
use crate::reading::GaugeReading;

/// Padding around the scaled drawing, in display units.
pub const FRAME_MARGIN: f64 = 5.0;

/// Layout configuration (proportions of the drawing).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeLayout {
    /// Side of the square drawing area.
    pub base_size: f64,
    /// Displayed side of the drawing area.
    pub size: f64,
    /// Dial and norm sectors.
    pub norm_radius: f64,
    /// Value sectors, drawn over the norm ones.
    pub value_radius: f64,
    /// Hub hiding the sector apexes.
    pub hub_radius: f64,
    /// Needle length.
    pub needle_radius: f64,
}

impl Default for GaugeLayout {
    fn default() -> Self {
        Self {
            base_size: 300.0,
            size: 120.0,
            norm_radius: 0.70,
            value_radius: 0.65,
            hub_radius: 0.50,
            needle_radius: 0.85,
        }
    }
}

impl GaugeLayout {
    /// Same proportions, shown at `size`.
    pub fn with_size(self, size: f64) -> Self {
        Self { size, ..self }
    }

    /// Display units per base unit.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.size / self.base_size
    }

    /// Side of the square frame holding the scaled drawing and its margins.
    pub fn frame_size(&self) -> f64 {
        2.0 * FRAME_MARGIN + self.base_size * self.scale()
    }

    /// Base-frame point (y down, as `center`) mapped into the display frame.
    pub fn to_display(&self, p: Vector2<f64>) -> Vector2<f64> {
        p * self.scale() + Vector2::new(FRAME_MARGIN, FRAME_MARGIN)
    }

    /// Absolute radius for a fraction of `base_size`.
    #[inline]
    pub fn scaled(&self, frac: f64) -> f64 {
        self.base_size * frac
    }

    /// Gauge center inside the drawing area: horizontally centered, three
    /// quarters down, leaving the bottom quarter for the label footer.
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.base_size * 0.5, self.base_size * 0.75)
    }

    /// Background sector over the full arc.
    pub fn dial(&self) -> Sector {
        Sector::new(MIN_ANGLE, MAX_ANGLE, self.scaled(self.norm_radius))
    }

    /// Hub sector over the full arc.
    pub fn hub(&self) -> Sector {
        Sector::new(MIN_ANGLE, MAX_ANGLE, self.scaled(self.hub_radius))
    }
}

/// Sector `[start, end]` (degrees) at radius `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub start: f64,
    pub end: f64,
    pub radius: f64,
}

impl Sector {
    #[inline]
    pub fn new(start: f64, end: f64, radius: f64) -> Self {
        Self { start, end, radius }
    }

    /// Arc start, relative to the center, y up.
    pub fn start_point(&self) -> Vector2<f64> {
        polar_point(self.start, self.radius)
    }

    /// Arc end, relative to the center, y up.
    pub fn end_point(&self) -> Vector2<f64> {
        polar_point(self.end, self.radius)
    }

    /// Angular width, degrees.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.sweep() <= 0.0
    }

    /// `other` lies within this sector's angular range.
    pub fn covers(&self, other: &Sector) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// The four interval sectors of one reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeZones {
    pub norm_tolerance: Sector,
    pub norm_kernel: Sector,
    pub value_tolerance: Sector,
    pub value_kernel: Sector,
}

impl GaugeZones {
    pub fn new(norm: &AngleSet, value: &AngleSet, layout: &GaugeLayout) -> Self {
        let rn = layout.scaled(layout.norm_radius);
        let rv = layout.scaled(layout.value_radius);
        Self {
            norm_tolerance: Sector::new(norm.support_left, norm.support_right, rn),
            norm_kernel: Sector::new(norm.kernel_left, norm.kernel_right, rn),
            value_tolerance: Sector::new(value.support_left, value.support_right, rv),
            value_kernel: Sector::new(value.kernel_left, value.kernel_right, rv),
        }
    }

    pub fn from_reading(reading: &GaugeReading, layout: &GaugeLayout) -> Self {
        Self::new(&reading.norm, &reading.value, layout)
    }

    /// Back-to-front draw order.
    pub fn layers(&self) -> [(ZoneKind, Sector); 4] {
        [
            (ZoneKind::NormTolerance, self.norm_tolerance),
            (ZoneKind::NormKernel, self.norm_kernel),
            (ZoneKind::ValueTolerance, self.value_tolerance),
            (ZoneKind::ValueKernel, self.value_kernel),
        ]
    }
}

/// Which zone a sector represents; selects its fill in `palette`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    Dial,
    NormTolerance,
    NormKernel,
    Hub,
    ValueTolerance,
    ValueKernel,
}

impl ZoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKind::Dial => "dial",
            ZoneKind::NormTolerance => "norm-tolerance",
            ZoneKind::NormKernel => "norm-kernel",
            ZoneKind::Hub => "hub",
            ZoneKind::ValueTolerance => "value-tolerance",
            ZoneKind::ValueKernel => "value-kernel",
        }
    }
}

//! Scalar -> angle on the gauge arc.
//!
//! The arc spans 150° symmetrically around the vertical: `MIN_ANGLE = -75°` at
//! the domain's lower bound, `MAX_ANGLE = +75°` at its upper bound. Angles are
//! in degrees everywhere in this crate; trig helpers convert at the last step.
//!
//! Values outside the domain clamp to the arc ends. There is no absolute
//! magnitude guard: clamping against the domain already covers unbounded input,
//! including `±∞`.

use nalgebra::Vector2;

use crate::error::GaugeError;
use crate::interval::Domain;

/// Angle of the domain's lower bound, degrees.
pub const MIN_ANGLE: f64 = -75.0;
/// Angle of the domain's upper bound, degrees.
pub const MAX_ANGLE: f64 = 75.0;
/// `MAX_ANGLE - MIN_ANGLE`.
pub const SPAN: f64 = MAX_ANGLE - MIN_ANGLE;

/// Map `value` onto the arc (degrees), clamping outside `domain`.
///
/// Bounds map exactly: `value == lower` gives `MIN_ANGLE`, `value == upper`
/// gives `MAX_ANGLE`. Non-decreasing in `value`.
///
/// Errors
/// - `InvalidDomain` for a degenerate or non-finite domain.
/// - `InvalidValue` for NaN.
pub fn map_value_to_angle(domain: &Domain, value: f64) -> Result<f64, GaugeError> {
    domain.validate()?;
    if value.is_nan() {
        return Err(GaugeError::InvalidValue(value));
    }
    Ok(angle_in(domain, value))
}

/// Mapping without validation. Callers must have validated `domain` and
/// rejected NaN.
#[inline]
pub(crate) fn angle_in(domain: &Domain, value: f64) -> f64 {
    if value < domain.lower {
        return MIN_ANGLE;
    }
    if value > domain.upper {
        return MAX_ANGLE;
    }
    // Every step is a monotone float op, so rounding cannot reorder inputs.
    MIN_ANGLE + SPAN * ((value - domain.lower) / domain.width())
}

/// Point at `angle` (degrees, 0 = straight up, positive = clockwise) and
/// radius `r` from the gauge center: `(r·sin θ, r·cos θ)`, `y` pointing up.
#[inline]
pub fn polar_point(angle: f64, r: f64) -> Vector2<f64> {
    let (s, c) = angle.to_radians().sin_cos();
    Vector2::new(r * s, r * c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(lower: f64, upper: f64) -> Domain {
        Domain::new(lower, upper).unwrap()
    }

    #[test]
    fn bounds_map_exactly() {
        for dom in [d(0.0, 100.0), d(-3.7, 12.1), d(1e-3, 2e-3), d(-1e9, 1e9)] {
            assert_eq!(map_value_to_angle(&dom, dom.lower).unwrap(), MIN_ANGLE);
            assert_eq!(map_value_to_angle(&dom, dom.upper).unwrap(), MAX_ANGLE);
        }
    }

    #[test]
    fn midpoint_is_vertical() {
        let dom = d(0.0, 100.0);
        assert_eq!(map_value_to_angle(&dom, 50.0).unwrap(), 0.0);
        let dom = d(-20.0, 60.0);
        assert!(map_value_to_angle(&dom, 20.0).unwrap().abs() < 1e-12);
    }

    #[test]
    fn clamps_outside_and_infinite() {
        let dom = d(0.0, 100.0);
        assert_eq!(map_value_to_angle(&dom, -5.0).unwrap(), MIN_ANGLE);
        assert_eq!(map_value_to_angle(&dom, 150.0).unwrap(), MAX_ANGLE);
        assert_eq!(map_value_to_angle(&dom, 2e6).unwrap(), MAX_ANGLE);
        assert_eq!(map_value_to_angle(&dom, f64::NEG_INFINITY).unwrap(), MIN_ANGLE);
        assert_eq!(map_value_to_angle(&dom, f64::INFINITY).unwrap(), MAX_ANGLE);
    }

    #[test]
    fn quarter_points() {
        let dom = d(0.0, 100.0);
        assert!((map_value_to_angle(&dom, 25.0).unwrap() + 37.5).abs() < 1e-12);
        assert!((map_value_to_angle(&dom, 40.0).unwrap() + 15.0).abs() < 1e-12);
        assert!((map_value_to_angle(&dom, 60.0).unwrap() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_domain_and_nan() {
        let flat = Domain {
            lower: 10.0,
            upper: 10.0,
        };
        assert!(matches!(
            map_value_to_angle(&flat, 10.0),
            Err(GaugeError::InvalidDomain { .. })
        ));
        let inverted = Domain {
            lower: 10.0,
            upper: 0.0,
        };
        assert!(map_value_to_angle(&inverted, 5.0).is_err());
        assert!(matches!(
            map_value_to_angle(&d(0.0, 1.0), f64::NAN),
            Err(GaugeError::InvalidValue(_))
        ));
    }

    #[test]
    fn polar_point_axes() {
        let up = polar_point(0.0, 2.0);
        assert!(up.x.abs() < 1e-12 && (up.y - 2.0).abs() < 1e-12);
        let right = polar_point(90.0, 1.0);
        assert!((right.x - 1.0).abs() < 1e-12 && right.y.abs() < 1e-12);
        let max = polar_point(MAX_ANGLE, 1.0);
        let min = polar_point(MIN_ANGLE, 1.0);
        assert!((max.x + min.x).abs() < 1e-12 && (max.y - min.y).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn clamped_below_and_above(lo in -1e6f64..1e6, w in 1e-3f64..1e6, off in 0.0f64..1e9) {
            let dom = d(lo, lo + w);
            prop_assert_eq!(map_value_to_angle(&dom, dom.lower - off).unwrap(), MIN_ANGLE);
            prop_assert_eq!(map_value_to_angle(&dom, dom.upper + off).unwrap(), MAX_ANGLE);
        }

        #[test]
        fn monotone_inside_domain(lo in -1e6f64..1e6, w in 1e-3f64..1e6, s in 0.0f64..=1.0, t in 0.0f64..=1.0) {
            let dom = d(lo, lo + w);
            let (s, t) = if s <= t { (s, t) } else { (t, s) };
            let a = dom.lower + s * dom.width();
            let b = dom.lower + t * dom.width();
            let (fa, fb) = (angle_in(&dom, a), angle_in(&dom, b));
            prop_assert!(fa <= fb);
            prop_assert!((MIN_ANGLE..=MAX_ANGLE).contains(&fa));
            prop_assert!((MIN_ANGLE..=MAX_ANGLE).contains(&fb));
        }
    }
}

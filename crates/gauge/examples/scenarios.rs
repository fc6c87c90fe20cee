//! Walk the reference scenarios and print angles, verdict and color.
//!
//! Domain [0, 100], norm kernel [40, 60] with 5 units of tolerance per side,
//! then a few measured values: inside the kernel, overlapping the tolerance,
//! far outside, at the lower bound, and beyond the upper bound.

use gauge::api::{evaluate, verdict_color, Domain, FuzzyInterval, GaugeError};

fn main() -> Result<(), GaugeError> {
    let domain = Domain::new(0.0, 100.0)?;
    let norm = FuzzyInterval::new(40.0, 60.0, 5.0, 5.0)?;
    let values = [
        ("inside", FuzzyInterval::new(50.0, 50.0, 2.0, 2.0)?),
        ("overlap", FuzzyInterval::new(65.0, 70.0, 2.0, 2.0)?),
        ("outside", FuzzyInterval::new(90.0, 95.0, 1.0, 1.0)?),
        ("lower-bound", FuzzyInterval::crisp(0.0, 0.0)?),
        ("beyond", FuzzyInterval::crisp(150.0, 150.0)?),
    ];
    for (label, value) in values {
        let r = evaluate(&domain, &norm, &value)?;
        println!(
            "{label:<12} mid={:>7.2}° support=[{:>7.2}°, {:>7.2}°] verdict={} color={}",
            r.value.kernel_mid,
            r.value.support_left,
            r.value.support_right,
            r.verdict,
            verdict_color(r.verdict),
        );
    }
    Ok(())
}

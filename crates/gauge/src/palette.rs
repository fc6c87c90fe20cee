//! Display colors. Verdicts stay abstract until a renderer asks for a fill.

use crate::classify::Compatibility;
use crate::zones::ZoneKind;

/// Footer color for a verdict.
pub fn verdict_color(verdict: Compatibility) -> &'static str {
    match verdict {
        Compatibility::FullMatch => "#5bca72",
        Compatibility::PartialMatch => "#f1b463",
        Compatibility::NoMatch => "#da2d2a",
    }
}

/// Fill for a zone sector.
pub fn zone_fill(kind: ZoneKind) -> &'static str {
    match kind {
        ZoneKind::Dial => "#cc0000",
        ZoneKind::NormTolerance => "#f1b463",
        ZoneKind::NormKernel => "#5bca72",
        ZoneKind::Hub => "#ffffff",
        ZoneKind::ValueTolerance => "#222222",
        ZoneKind::ValueKernel => "#000000",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts_get_distinct_colors() {
        let mut colors: Vec<_> = Compatibility::ALL.iter().map(|&v| verdict_color(v)).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 3);
        assert_eq!(verdict_color(Compatibility::NoMatch), "#da2d2a");
    }

    #[test]
    fn kernel_zone_matches_full_match_color() {
        assert_eq!(
            zone_fill(ZoneKind::NormKernel),
            verdict_color(Compatibility::FullMatch)
        );
        assert_eq!(
            zone_fill(ZoneKind::NormTolerance),
            verdict_color(Compatibility::PartialMatch)
        );
    }
}

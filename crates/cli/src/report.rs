//! JSON rendering of one gauge evaluation.

use gauge::api::{
    verdict_color, zone_fill, AngleSet, GaugeLayout, GaugeReading, GaugeZones, NeedleArms, Sector,
    ZoneKind,
};
use gauge::prelude::Vec2;
use serde_json::{json, Value};

fn point(p: Vec2<f64>) -> Value {
    json!({ "x": p.x, "y": p.y })
}

pub fn angles(a: &AngleSet) -> Value {
    json!({
        "kernel_left": a.kernel_left,
        "kernel_right": a.kernel_right,
        "support_left": a.support_left,
        "support_right": a.support_right,
        "kernel_mid": a.kernel_mid,
    })
}

fn needle(n: &NeedleArms) -> Value {
    json!({
        "radius": n.radius,
        "rotation": n.rotation,
        "local": n.outline().map(point),
    })
}

fn sector(kind: ZoneKind, s: &Sector) -> Value {
    json!({
        "zone": kind.as_str(),
        "fill": zone_fill(kind),
        "start": s.start,
        "end": s.end,
        "radius": s.radius,
        "start_point": point(s.start_point()),
        "end_point": point(s.end_point()),
    })
}

/// Full report: angles, verdict, needle and sectors in draw order.
pub fn reading(name: &str, r: &GaugeReading, layout: &GaugeLayout, needle_radius: f64) -> Value {
    let zones = GaugeZones::from_reading(r, layout);
    let mut sectors = vec![sector(ZoneKind::Dial, &layout.dial())];
    sectors.extend(zones.layers().iter().take(2).map(|(k, s)| sector(*k, s)));
    sectors.push(sector(ZoneKind::Hub, &layout.hub()));
    sectors.extend(zones.layers().iter().skip(2).map(|(k, s)| sector(*k, s)));
    json!({
        "name": name,
        "verdict": r.verdict.as_str(),
        "color": verdict_color(r.verdict),
        "norm": angles(&r.norm),
        "value": angles(&r.value),
        "needle": needle(&r.needle(needle_radius)),
        "center": point(layout.center()),
        "frame": {
            "base_size": layout.base_size,
            "size": layout.frame_size(),
            "scale": layout.scale(),
        },
        "sectors": sectors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge::api::{evaluate, Domain, FuzzyInterval};

    #[test]
    fn report_carries_verdict_and_layers() {
        let d = Domain::new(0.0, 100.0).unwrap();
        let norm = FuzzyInterval::new(40.0, 60.0, 5.0, 5.0).unwrap();
        let value = FuzzyInterval::new(90.0, 95.0, 1.0, 1.0).unwrap();
        let r = evaluate(&d, &norm, &value).unwrap();
        let v = reading("pH", &r, &GaugeLayout::default(), 255.0);
        assert_eq!(v["name"], "pH");
        assert_eq!(v["verdict"], "no-match");
        assert_eq!(v["color"], "#da2d2a");
        assert_eq!(v["norm"]["kernel_mid"], 0.0);
        let zones: Vec<_> = v["sectors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["zone"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            zones,
            [
                "dial",
                "norm-tolerance",
                "norm-kernel",
                "hub",
                "value-tolerance",
                "value-kernel"
            ]
        );
        assert_eq!(v["needle"]["local"].as_array().unwrap().len(), 5);
        assert_eq!(v["needle"]["local"][2]["y"], 255.0);
        assert_eq!(v["frame"]["size"], 130.0);
    }

    #[test]
    fn frame_follows_display_size() {
        let d = Domain::new(0.0, 14.0).unwrap();
        let norm = FuzzyInterval::new(6.5, 7.5, 0.5, 0.5).unwrap();
        let r = evaluate(&d, &norm, &FuzzyInterval::crisp(7.0, 7.0).unwrap()).unwrap();
        let layout = GaugeLayout::default().with_size(300.0);
        let v = reading("pH", &r, &layout, 255.0);
        assert_eq!(v["frame"]["scale"], 1.0);
        assert_eq!(v["frame"]["size"], 310.0);
        // Geometry stays in base units whatever the display size.
        assert_eq!(v["center"]["y"], 225.0);
    }
}

//! Random gauge inputs (valid by construction) with replay tokens.
//!
//! Purpose
//! - Feed benchmarks and experiments with reproducible `(domain, norm, value)`
//!   triples. Every draw passes validation; values may overshoot the domain
//!   to exercise clamping.
//!
//! Model
//! - Domain: lower bound uniform in `lower_range`, width uniform in `width_range`.
//! - Intervals: kernel endpoints uniform over the domain widened by
//!   `overshoot_frac` on both sides, tolerances uniform in
//!   `[0, max_tolerance_frac * width]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::interval::{Domain, FuzzyInterval};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub lower_range: (f64, f64),
    /// Domain width range; widths are raised to at least `max(1e-6, 1e-9·|lower|)`.
    pub width_range: (f64, f64),
    /// How far (fraction of the width) kernels may fall outside the domain.
    pub overshoot_frac: f64,
    pub max_tolerance_frac: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            lower_range: (-100.0, 100.0),
            width_range: (1.0, 1000.0),
            overshoot_frac: 0.25,
            max_tolerance_frac: 0.1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }
}

/// One drawn gauge input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeSample {
    pub domain: Domain,
    pub norm: FuzzyInterval,
    pub value: FuzzyInterval,
}

/// Uniform in `[lo, hi)`, or `lo` for an empty range.
fn uniform<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

fn draw_interval<R: Rng>(rng: &mut R, domain: &Domain, cfg: &SampleCfg) -> FuzzyInterval {
    let w = domain.width();
    let over = cfg.overshoot_frac.max(0.0) * w;
    let range = (domain.lower - over, domain.upper + over);
    let a = uniform(rng, range);
    let b = uniform(rng, range);
    let tol = (0.0, cfg.max_tolerance_frac.max(0.0) * w);
    FuzzyInterval {
        kernel_left: a.min(b),
        kernel_right: a.max(b),
        tolerance_left: uniform(rng, tol),
        tolerance_right: uniform(rng, tol),
    }
}

/// Draw one valid `(domain, norm, value)` triple.
pub fn draw(cfg: SampleCfg, tok: ReplayToken) -> GaugeSample {
    let mut rng = tok.to_std_rng();
    let lower = uniform(&mut rng, cfg.lower_range);
    // The minimum width grows with |lower| so `lower + width` never rounds
    // back onto `lower`.
    let min_width = (lower.abs() * 1e-9).max(1e-6);
    let width = uniform(&mut rng, cfg.width_range).max(min_width);
    let domain = Domain {
        lower,
        upper: lower + width,
    };
    let norm = draw_interval(&mut rng, &domain, &cfg);
    let value = draw_interval(&mut rng, &domain, &cfg);
    GaugeSample {
        domain,
        norm,
        value,
    }
}

/// `count` consecutive draws starting at `tok`.
pub fn draw_many(cfg: SampleCfg, tok: ReplayToken, count: usize) -> Vec<GaugeSample> {
    let mut out = Vec::with_capacity(count);
    let mut t = tok;
    for _ in 0..count {
        out.push(draw(cfg, t));
        t = t.next();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::evaluate;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(draw(SampleCfg::default(), tok), draw(SampleCfg::default(), tok));
        assert_ne!(
            draw(SampleCfg::default(), tok),
            draw(SampleCfg::default(), tok.next())
        );
    }

    #[test]
    fn draws_are_valid_inputs() {
        let tok = ReplayToken { seed: 3, index: 0 };
        for s in draw_many(SampleCfg::default(), tok, 256) {
            let r = evaluate(&s.domain, &s.norm, &s.value).expect("valid sample");
            assert!(r.norm.is_ordered() && r.value.is_ordered());
        }
    }

    #[test]
    fn large_offsets_still_give_valid_domains() {
        let cfg = SampleCfg {
            lower_range: (1e12, 1e15),
            width_range: (0.0, 1e-3),
            ..SampleCfg::default()
        };
        for s in draw_many(cfg, ReplayToken { seed: 9, index: 0 }, 64) {
            assert!(s.domain.validate().is_ok(), "{:?}", s.domain);
            assert!(evaluate(&s.domain, &s.norm, &s.value).is_ok());
        }
    }

    #[test]
    fn degenerate_ranges_fall_back_to_lower_end() {
        let cfg = SampleCfg {
            lower_range: (5.0, 5.0),
            width_range: (0.0, 0.0),
            overshoot_frac: 0.0,
            max_tolerance_frac: 0.0,
        };
        let s = draw(cfg, ReplayToken { seed: 0, index: 0 });
        assert_eq!(s.domain.lower, 5.0);
        assert!(s.domain.validate().is_ok());
        assert_eq!(s.value.tolerance_left, 0.0);
    }
}

use std::f64::consts::TAU;

use log::debug;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::band::BandId;
use crate::config::TorusConfig;
use crate::ellipse::Ellipse;
use crate::error::TorusError;

/// The two center-line ellipses of a valid configuration meet at exactly this
/// many points.
pub const NUM_CROSSINGS: usize = 4;

/// One point where the two bands' center-line ellipses meet, identified by
/// its parameter on each ellipse. `tb` is an `atan2` result in `(-π, π]`;
/// consumers normalize into `[0, 2π)` as needed.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub ta: f64,
    pub tb: f64,
}

impl Crossing {
    pub fn t(&self, id: BandId) -> f64 {
        match id {
            BandId::A => self.ta,
            BandId::B => self.tb,
        }
    }
}

/// Locate the crossings of the two center-line ellipses, sorted by `ta`
/// ascending.
///
/// Brute-force numerical search: sample `ta` densely over one revolution,
/// project each point on A into B's unit-circle frame, and accept samples
/// that land on B's boundary within tolerance. Consecutive samples straddling
/// the same true crossing are collapsed by the minimum-separation rule; the
/// parameter on B is recovered from the projected coordinates.
pub fn find_crossings(a: &Ellipse, b: &Ellipse, config: &TorusConfig) -> Result<Vec<Crossing>, TorusError> {
    let mut crossings: Vec<Crossing> = Vec::new();
    let n = config.crossing_samples;
    for i in 0..n {
        let ta = TAU * i as f64 / n as f64;
        let u = b.project(a.point(ta));
        if u.x.abs() > 1. || u.y.abs() > 1. {
            continue;
        }
        if (u.norm2() - 1.).abs() >= config.crossing_tolerance {
            continue;
        }
        // Deduplicate: a cluster of samples hitting one true crossing keeps
        // its first representative.
        if crossings.iter().any(|c| (ta - c.ta).abs() < config.min_crossing_separation) {
            continue;
        }
        let tb = u.atan2();
        debug!("crossing candidate at ta={:.4}, tb={:.4}", ta, tb);
        crossings.push(Crossing { ta, tb });
    }
    crossings.sort_by_key(|c| OrderedFloat(c.ta));
    if crossings.len() != NUM_CROSSINGS {
        return Err(TorusError::CrossingCount { found: crossings.len() });
    }
    Ok(crossings)
}

#[cfg(test)]
mod tests {
    use crate::r2::R2;

    use super::*;

    #[test]
    fn test_four_crossings_at_default_radii() {
        let config = TorusConfig::default();
        let a = config.ellipse(BandId::A);
        let b = config.ellipse(BandId::B);
        let crossings = find_crossings(&a, &b, &config).unwrap();
        assert_eq!(crossings.len(), NUM_CROSSINGS);

        for c in &crossings {
            // Each crossing lies on both ellipses within tolerance.
            let p = a.point(c.ta);
            assert_relative_eq!(a.project(p).norm2(), 1., epsilon = 1e-12);
            assert!((b.project(p).norm2() - 1.).abs() < config.crossing_tolerance);
            // tb points at (approximately) the same location on B.
            assert_relative_eq!(b.point(c.tb), p, epsilon = 0.05);
        }
    }

    #[test]
    fn test_crossings_sorted_and_separated() {
        let config = TorusConfig::default();
        let a = config.ellipse(BandId::A);
        let b = config.ellipse(BandId::B);
        let crossings = find_crossings(&a, &b, &config).unwrap();
        for w in crossings.windows(2) {
            assert!(w[0].ta < w[1].ta);
            assert!(w[1].ta - w[0].ta >= config.min_crossing_separation);
        }
    }

    #[test]
    fn test_concentric_circles_fail() {
        // Two concentric circles of different radii never touch.
        let config = TorusConfig::default();
        let a = Ellipse { c: config.center, r: R2 { x: 2., y: 2. } };
        let b = Ellipse { c: config.center, r: R2 { x: 5., y: 5. } };
        assert_eq!(
            find_crossings(&a, &b, &config),
            Err(TorusError::CrossingCount { found: 0 })
        );
    }

    #[test]
    fn test_coincident_ellipses_fail() {
        // Identical ellipses cross everywhere; dedup leaves far more than 4.
        let config = TorusConfig::default();
        let a = config.ellipse(BandId::A);
        let err = find_crossings(&a, &a, &config).unwrap_err();
        match err {
            TorusError::CrossingCount { found } => assert!(found > NUM_CROSSINGS),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::band::{Band, BandId};
use crate::ellipse::Ellipse;
use crate::r2::R2;

/// All constants of one logo run. Immutable once built; every component takes
/// it by reference, so tests can run the pipeline at other radii/thickness
/// values without touching process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorusConfig {
    /// Shared center of both bands' center-line ellipses.
    pub center: R2<f64>,
    /// Radii of band A (wide, horizontal-major).
    pub a_radii: R2<f64>,
    /// Radii of band B (tall, vertical-major).
    pub b_radii: R2<f64>,
    /// Annulus inner-to-outer width of each band.
    pub thickness: f64,
    /// Extra visible space around each crossing, in canvas units.
    pub gap_margin: f64,
    /// Which band is drawn in front at each crossing, indexed by crossing
    /// rank (crossings sorted by parameter-on-A). A design constant defining
    /// the illusion's topology, not derived from geometry.
    pub over: [BandId; 4],
    /// Side length of the square output canvas.
    pub canvas_size: f64,
    /// Samples per revolution for the crossing search.
    pub crossing_samples: usize,
    /// Tolerance on the implicit ellipse equation for accepting a sample as
    /// a crossing candidate.
    pub crossing_tolerance: f64,
    /// Minimum parameter-on-A distance between distinct crossings; closer
    /// candidates are collapsed into one.
    pub min_crossing_separation: f64,
    /// Floor for the tangent crossing angle, guarding the near-parallel case.
    pub min_tangent_angle: f64,
    /// Sample points per arc when emitting annulus outlines.
    pub arc_samples: usize,
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            center: R2 { x: 12., y: 12. },
            a_radii: R2 { x: 9., y: 5.5 },
            b_radii: R2 { x: 5.5, y: 9. },
            thickness: 2.2,
            gap_margin: 0.4,
            over: [BandId::A, BandId::B, BandId::A, BandId::B],
            canvas_size: 24.,
            crossing_samples: 7200,
            crossing_tolerance: 0.003,
            min_crossing_separation: 0.05,
            min_tangent_angle: 0.01,
            arc_samples: 60,
        }
    }
}

impl TorusConfig {
    pub fn radii(&self, id: BandId) -> R2<f64> {
        match id {
            BandId::A => self.a_radii,
            BandId::B => self.b_radii,
        }
    }

    /// Center-line ellipse of the given band.
    pub fn ellipse(&self, id: BandId) -> Ellipse {
        Ellipse { c: self.center, r: self.radii(id) }
    }

    pub fn band(&self, id: BandId) -> Band {
        Band { ellipse: self.ellipse(id), thickness: self.thickness }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_occlusion_alternates() {
        let config = TorusConfig::default();
        for i in 0..4 {
            assert_ne!(config.over[i], config.over[(i + 1) % 4]);
        }
    }

    #[test]
    fn test_bands() {
        let config = TorusConfig::default();
        let a = config.band(BandId::A);
        let b = config.band(BandId::B);
        assert_eq!(a.ellipse.c, b.ellipse.c);
        assert_eq!(a.ellipse.r, R2 { x: 9., y: 5.5 });
        assert_eq!(b.ellipse.r, R2 { x: 5.5, y: 9. });
    }
}

use log::{debug, info};
use serde::Serialize;

use crate::band::BandId;
use crate::config::TorusConfig;
use crate::crossings::{find_crossings, Crossing, NUM_CROSSINGS};
use crate::error::TorusError;
use crate::gap::gap_half_angle;
use crate::polygon::Polygon;
use crate::segment::{band_segments, ArcSegment, Layer};

/// The fully computed logo: the crossing topology and both bands' surviving
/// annulus segments, already ordered back to front.
///
/// Everything here is a pure function of the [`TorusConfig`]; rebuilding
/// from the same config yields an identical scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub config: TorusConfig,
    pub crossings: Vec<Crossing>,
    pub segments: Vec<ArcSegment>,
}

impl Scene {
    /// Run the full pipeline: find crossings, compute each under band's gap
    /// half-angles, assemble and rank both bands' arcs.
    pub fn new(config: TorusConfig) -> Result<Scene, TorusError> {
        let a = config.ellipse(BandId::A);
        let b = config.ellipse(BandId::B);
        let crossings = find_crossings(&a, &b, &config)?;

        // One gap per crossing, attached to whichever band goes under there.
        let mut a_gaps = [None; NUM_CROSSINGS];
        let mut b_gaps = [None; NUM_CROSSINGS];
        for (ci, crossing) in crossings.iter().enumerate() {
            match config.over[ci] {
                BandId::A => {
                    b_gaps[ci] = Some(gap_half_angle(&b, &a, crossing.tb, crossing.ta, &config));
                }
                BandId::B => {
                    a_gaps[ci] = Some(gap_half_angle(&a, &b, crossing.ta, crossing.tb, &config));
                }
            }
            debug!(
                "crossing {}: ta={:.4} tb={:.4}, {} over",
                ci, crossing.ta, crossing.tb, config.over[ci]
            );
        }

        let mut segments = band_segments(BandId::A, &crossings, &a_gaps, &config.over);
        segments.extend(band_segments(BandId::B, &crossings, &b_gaps, &config.over));
        // Stable: within a layer, A's arcs precede B's, each in angular order.
        segments.sort_by_key(|s| s.layer);

        info!(
            "{} crossings, {} of {} candidate arcs survive",
            crossings.len(),
            segments.len(),
            2 * NUM_CROSSINGS,
        );
        Ok(Scene { config, crossings, segments })
    }

    /// One closed outline per surviving segment, in draw order.
    pub fn shapes(&self) -> Vec<Polygon> {
        self.segments
            .iter()
            .map(|s| self.config.band(s.band).outline(s.t0, s.t1, self.config.arc_samples))
            .collect()
    }

    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.segments.iter().map(|s| s.layer)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::r2::R2;

    use super::*;

    #[test]
    fn test_default_scene() {
        let scene = Scene::new(TorusConfig::default()).unwrap();
        assert_eq!(scene.crossings.len(), 4);
        // All 8 candidate arcs survive at the default radii/thickness.
        assert_eq!(scene.segments.len(), 8);
        assert_eq!(scene.segments.iter().filter(|s| s.band == BandId::A).count(), 4);
        assert_eq!(scene.segments.iter().filter(|s| s.band == BandId::B).count(), 4);
    }

    #[test]
    fn test_back_before_front() {
        let scene = Scene::new(TorusConfig::default()).unwrap();
        let first_front = scene.layers().position(|l| l == Layer::Front).unwrap();
        assert!(scene.layers().skip(first_front).all(|l| l == Layer::Front));
        assert_eq!(scene.layers().filter(|&l| l == Layer::Back).count(), 4);
    }

    #[test]
    fn test_segments_well_formed() {
        let scene = Scene::new(TorusConfig::default()).unwrap();
        for s in &scene.segments {
            assert!(s.t0 < s.t1);
        }
    }

    #[test]
    fn test_shapes_within_canvas() {
        let scene = Scene::new(TorusConfig::default()).unwrap();
        let shapes = scene.shapes();
        assert_eq!(shapes.len(), scene.segments.len());
        let config = &scene.config;
        let slack = config.thickness / 2.;
        for shape in &shapes {
            let (min, max) = shape.bounds();
            assert!(min.x >= -slack && min.y >= -slack);
            assert!(max.x <= config.canvas_size + slack);
            assert!(max.y <= config.canvas_size + slack);
        }
    }

    #[test]
    fn test_deterministic() {
        let first = Scene::new(TorusConfig::default()).unwrap();
        let second = Scene::new(TorusConfig::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.shapes(), second.shapes());
    }

    #[test]
    fn test_oversized_margin_swallows_arcs() {
        // Cranking the margin up makes gaps wider than the arcs they trim;
        // some arcs must drop out, and that is not an error.
        let config = TorusConfig { gap_margin: 10., ..TorusConfig::default() };
        let scene = Scene::new(config).unwrap();
        assert_eq!(scene.segments.len(), 4);
        for s in &scene.segments {
            assert!(s.t0 < s.t1);
        }
    }

    #[test]
    fn test_other_center() {
        // The whole figure translates with the shared center.
        let config = TorusConfig {
            center: R2 { x: 50., y: 40. },
            canvas_size: 100.,
            ..TorusConfig::default()
        };
        let scene = Scene::new(config).unwrap();
        assert_eq!(scene.segments.len(), 8);
        for shape in scene.shapes() {
            let (min, max) = shape.bounds();
            assert!(min.x > 50. - 11. && max.x < 50. + 11.);
            assert!(min.y > 40. - 11. && max.y < 40. + 11.);
        }
    }
}

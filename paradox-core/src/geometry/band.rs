use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ellipse::Ellipse;
use crate::polygon::Polygon;

/// Identifies one of the two bands: A is the wide (horizontal-major) band,
/// B the tall (vertical-major) one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandId {
    A,
    B,
}

impl Display for BandId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BandId::A => write!(f, "A"),
            BandId::B => write!(f, "B"),
        }
    }
}

/// An elliptical ring of finite thickness, drawn as filled annulus segments.
///
/// The thickness is applied as an inward/outward offset along the radii of
/// the center-line ellipse.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub ellipse: Ellipse,
    pub thickness: f64,
}

impl Band {
    pub fn outer(&self) -> Ellipse {
        self.ellipse.offset(self.thickness / 2.)
    }

    pub fn inner(&self) -> Ellipse {
        self.ellipse.offset(-self.thickness / 2.)
    }

    /// Closed outline of the annulus segment spanning `[t0, t1]`: the outer
    /// offset ellipse sampled forward, then the inner sampled backward.
    pub fn outline(&self, t0: f64, t1: f64, samples: usize) -> Polygon {
        let outer = self.outer();
        let inner = self.inner();
        let n = samples as f64;
        let mut vertices = Vec::with_capacity(2 * (samples + 1));
        for i in 0..=samples {
            let t = t0 + (t1 - t0) * i as f64 / n;
            vertices.push(outer.point(t));
        }
        for i in 0..=samples {
            let t = t1 + (t0 - t1) * i as f64 / n;
            vertices.push(inner.point(t));
        }
        Polygon::new(vertices)
    }
}

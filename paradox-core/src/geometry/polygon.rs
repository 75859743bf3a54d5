use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::r2::R2;

/// A closed polygon (the closing edge from last vertex back to first is
/// implicit). One is emitted per surviving annulus segment.
#[derive(Debug, Clone, From, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<R2<f64>>,
}

impl Polygon {
    pub fn new(vertices: Vec<R2<f64>>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        Polygon { vertices }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Axis-aligned bounding box, as (min corner, max corner).
    pub fn bounds(&self) -> (R2<f64>, R2<f64>) {
        let mut min = R2 { x: f64::INFINITY, y: f64::INFINITY };
        let mut max = R2 { x: f64::NEG_INFINITY, y: f64::NEG_INFINITY };
        for v in &self.vertices {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let p = Polygon::new(vec![
            R2 { x: 0., y: 0. },
            R2 { x: 2., y: -1. },
            R2 { x: 1., y: 3. },
        ]);
        let (min, max) = p.bounds();
        assert_eq!(min, R2 { x: 0., y: -1. });
        assert_eq!(max, R2 { x: 2., y: 3. });
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn test_too_few_vertices() {
        Polygon::new(vec![R2 { x: 0., y: 0. }, R2 { x: 1., y: 1. }]);
    }
}

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::r2::R2;

/// Axis-aligned ellipse: the center-line of one band of the torus.
///
/// Parameterized as `c + (rx cos t, ry sin t)` for `t ∈ [0, 2π)`. Note that
/// equal increments of `t` do not correspond to equal arc lengths when
/// `rx != ry`; conversions between spatial widths and parameter deltas must
/// go through [`Ellipse::speed`].
#[derive(Debug, Copy, Clone, From, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub c: R2<f64>,
    pub r: R2<f64>,
}

impl Ellipse {
    pub fn point(&self, t: f64) -> R2<f64> {
        R2 {
            x: self.c.x + self.r.x * t.cos(),
            y: self.c.y + self.r.y * t.sin(),
        }
    }

    /// Derivative of [`Ellipse::point`] with respect to `t` (not normalized).
    pub fn derivative(&self, t: f64) -> R2<f64> {
        R2 {
            x: -self.r.x * t.sin(),
            y: self.r.y * t.cos(),
        }
    }

    /// Speed `|d/dt point(t)|`; non-constant when `rx != ry`.
    pub fn speed(&self, t: f64) -> f64 {
        self.derivative(t).norm()
    }

    /// Unit tangent vector at `t`.
    pub fn tangent(&self, t: f64) -> R2<f64> {
        let d = self.derivative(t);
        d / self.speed(t)
    }

    /// Map a point into this ellipse's unit-circle frame: `(p - c) / r`.
    ///
    /// A point lies on the ellipse iff its projection has norm 1.
    pub fn project(&self, p: R2<f64>) -> R2<f64> {
        (p - self.c) / self.r
    }

    /// Recover the parameter of a point (assumed on or near the ellipse).
    pub fn theta(&self, p: R2<f64>) -> f64 {
        self.project(p).atan2()
    }

    /// Ellipse offset outward (`d > 0`) or inward (`d < 0`) along both radii.
    ///
    /// An approximation of the true offset curve, acceptable at band-thickness
    /// scale.
    pub fn offset(&self, d: f64) -> Ellipse {
        Ellipse {
            c: self.c,
            r: R2 { x: self.r.x + d, y: self.r.y + d },
        }
    }
}

use std::f64::consts::TAU;

use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::band::BandId;
use crate::crossings::{Crossing, NUM_CROSSINGS};

/// Draw order of a segment: everything `Back` paints before anything
/// `Front`, so over bands cover the stubs of under bands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Layer {
    Back,
    Front,
}

/// A contiguous stretch of one band between two angularly consecutive
/// crossings, with endpoints already retracted by the crossings' gaps.
/// Always `t0 < t1` (`t1` may exceed 2π for the wrapping arc).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub band: BandId,
    pub t0: f64,
    pub t1: f64,
    pub layer: Layer,
}

/// Normalize an angle to `[0, 2π)`.
pub fn normalize_angle(a: f64) -> f64 {
    a.rem_euclid(TAU)
}

/// Partition one band's parameter range into arcs between consecutive
/// crossings, trim each end by the gap of its crossing where this band goes
/// under, and rank each surviving arc by who occludes whom at its start.
///
/// `gaps[ci]` is the gap half-angle for this band at crossing `ci`, present
/// exactly where the band is the under band there. An arc whose retracted
/// end no longer exceeds its start is swallowed by its gaps; that is a valid
/// outcome, not an error.
pub fn band_segments(
    band: BandId,
    crossings: &[Crossing],
    gaps: &[Option<f64>; NUM_CROSSINGS],
    over: &[BandId; NUM_CROSSINGS],
) -> Vec<ArcSegment> {
    let angles: Vec<f64> = crossings.iter().map(|c| normalize_angle(c.t(band))).collect();
    let order: Vec<usize> = (0..angles.len()).sorted_by_key(|&ci| OrderedFloat(angles[ci])).collect();

    let mut segments = Vec::with_capacity(order.len());
    for idx in 0..order.len() {
        let ci0 = order[idx];
        let ci1 = order[(idx + 1) % order.len()];
        let mut t0 = angles[ci0];
        let mut t1 = angles[ci1];
        if t1 <= t0 {
            // The last arc wraps past 2π back to the first crossing.
            t1 += TAU;
        }
        if let Some(gap) = gaps[ci0] {
            t0 += gap;
        }
        if let Some(gap) = gaps[ci1] {
            t1 -= gap;
        }
        if t1 <= t0 {
            debug!("band {} arc between crossings {} and {} swallowed by gaps", band, ci0, ci1);
            continue;
        }
        let layer = if over[ci0] == band { Layer::Front } else { Layer::Back };
        segments.push(ArcSegment { band, t0, t1, layer });
    }
    segments
}

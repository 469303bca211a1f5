// Copyright 2025 the Fatline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fat lines: parallel strips bounding a curve.

use crate::{CubicBez, Line};

/// Squared distance below which two control points count as coincident
/// for choosing a baseline.
const COINCIDENT_EPSILON2: f64 = 1e-24;

/// A strip of two parallel lines containing a whole curve.
///
/// The strip is described by a `baseline` and the two parallels of the
/// control polygon's extremal signed distances. By the convex-hull
/// property of Bézier curves, the curve itself lies inside the convex
/// hull of its control points and therefore inside the strip.
///
/// All three lines share the same normalized `(a, b)` coefficients, so
/// the strip is given by the `c` range `min.c ..= max.c`. A point `p`
/// lies inside the strip exactly when both `(-min).signed_distance(p)`
/// and `max.signed_distance(p)` are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FatLine {
    /// The line the strip is parallel to, normally the curve's chord.
    pub baseline: Line,
    /// The bounding parallel with the smaller constant term.
    pub min: Line,
    /// The bounding parallel with the larger constant term.
    pub max: Line,
}

impl FatLine {
    /// The fat line bounding the given curve.
    ///
    /// The baseline is the chord through the curve's endpoints. When the
    /// endpoints coincide the chord determines no direction, and the
    /// baseline instead runs through the start point and the first
    /// interior control point distinct from it; the strip still bounds
    /// the curve, it is merely wider than the optimal one. Returns
    /// `None` when all four control points coincide, as a single point
    /// supports no line at all.
    pub fn of_curve(c: &CubicBez) -> Option<FatLine> {
        let baseline = Self::baseline(c)?;
        let candidates = [c.p0, c.p1, c.p2, c.p3].map(|p| baseline.parallel_through(p).c);
        let mut min_c = candidates[0];
        let mut max_c = candidates[0];
        for &cand in &candidates[1..] {
            min_c = min_c.min(cand);
            max_c = max_c.max(cand);
        }
        Some(FatLine {
            baseline,
            min: baseline.with_c(min_c),
            max: baseline.with_c(max_c),
        })
    }

    fn baseline(c: &CubicBez) -> Option<Line> {
        for p in [c.p3, c.p1, c.p2] {
            if c.p0.distance_squared(p) > COINCIDENT_EPSILON2 {
                return Some(Line::from_points(c.p0, p));
            }
        }
        None
    }

    /// The width of the strip, the distance between the two bounding
    /// parallels.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.c - self.min.c
    }
}

// Copyright 2025 the Fatline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::Range;

use crate::Point;

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

/// Interpolate so that the result is exactly `p` at `t = 0` and exactly
/// `q` at `t = 1`.
///
/// The symmetric weighted form is used rather than `p + t * (q - p)`,
/// which can miss the endpoint at `t = 1` by a rounding error. Endpoint
/// exactness keeps repeated subdivision from drifting off the curve's
/// own endpoints.
#[inline]
fn wlerp(p: Point, q: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    Point::new(mt * p.x + t * q.x, mt * p.y + t * q.y)
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline(always)]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> CubicBez {
        CubicBez { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1], but the Bernstein
    /// polynomial extends beyond the segment.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    /// Subdivide into halves at parameter `t`, using de Casteljau.
    ///
    /// The left segment traces `[0, t]` of the original and the right
    /// segment traces `[t, 1]`, each reparametrized to [0..1]. At
    /// `t = 0` and `t = 1` one of the two segments is exactly the
    /// original and the other collapses to an endpoint.
    pub fn split(&self, t: f64) -> (CubicBez, CubicBez) {
        let p01 = wlerp(self.p0, self.p1, t);
        let p12 = wlerp(self.p1, self.p2, t);
        let p23 = wlerp(self.p2, self.p3, t);
        let p012 = wlerp(p01, p12, t);
        let p123 = wlerp(p12, p23, t);
        let split = wlerp(p012, p123, t);
        (
            CubicBez::new(self.p0, p01, p012, split),
            CubicBez::new(split, p123, p23, self.p3),
        )
    }

    /// Subdivide into three segments at parameters `t0 <= t1`.
    ///
    /// The middle segment traces `[t0, t1]` of the original. The second
    /// cut happens on the right segment of the first, at the ratio
    /// `(t1 - t0) / (1 - t0)`; when `t0 = 1` the right segment is a
    /// single point and is returned as both the middle and the right
    /// result rather than dividing by zero.
    pub fn split2(&self, t0: f64, t1: f64) -> (CubicBez, CubicBez, CubicBez) {
        let (left, rest) = self.split(t0);
        if t0 >= 1.0 {
            return (left, rest, rest);
        }
        let (mid, right) = rest.split((t1 - t0) / (1.0 - t0));
        (left, mid, right)
    }

    /// The segment of the curve over the given parameter range,
    /// reparametrized to [0..1].
    #[inline]
    pub fn subsegment(&self, range: Range<f64>) -> CubicBez {
        let (_, mid, _) = self.split2(range.start, range.end);
        mid
    }

    /// Is this curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// Is this curve NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan() || self.p3.is_nan()
    }
}

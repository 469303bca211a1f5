// Copyright 2025 the Fatline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clipping a curve's parameter domain against lines and fat lines.

use core::ops::Range;

use arrayvec::ArrayVec;

use crate::{CubicBez, FatLine, Line, Point};

impl CubicBez {
    /// Bound where this curve can lie on the non-negative side of a line.
    ///
    /// The curve's distance to the line is itself a cubic in `t`, with
    /// control values the signed distances of the four control points,
    /// placed at `t = 0, 1/3, 2/3, 1`. The convex hull of those four
    /// samples bounds the distance cubic, so the parameter interval in
    /// which the hull reaches non-negative distance bounds the interval
    /// in which the curve does.
    ///
    /// Returns `(low, high)` in this curve's own parameter space. The
    /// bound is conservative: it may retain parameters whose curve
    /// points are strictly on the negative side, but it never discards
    /// a parameter whose point is on the non-negative side. When the
    /// hull lies entirely on the negative side the result is inverted
    /// (`low > high`), denoting an empty interval.
    pub fn clip_against(&self, line: &Line) -> (f64, f64) {
        let e0 = Point::new(0.0, line.signed_distance(self.p0));
        let e1 = Point::new(1.0 / 3.0, line.signed_distance(self.p1));
        let e2 = Point::new(2.0 / 3.0, line.signed_distance(self.p2));
        let e3 = Point::new(1.0, line.signed_distance(self.p3));

        // A start sample on the negative side moves the low bound up to
        // the first place a hull edge from that sample can cross zero.
        let low = if e0.y < 0.0 {
            crossings(e0, [e1, e2, e3])
                .into_iter()
                .filter(|&x| x > 0.0)
                .fold(1.0, f64::min)
        } else {
            0.0
        };

        // Symmetrically from the end sample for the high bound.
        let high = if e3.y < 0.0 {
            crossings(e3, [e0, e1, e2])
                .into_iter()
                .filter(|&x| x < 1.0)
                .fold(0.0, f64::max)
        } else {
            1.0
        };

        (low, high)
    }

    /// Restrict this curve's parameter domain to a fat-line strip.
    ///
    /// Clips against the inward-facing sides of both bounding parallels
    /// and intersects the two intervals. Returns the sub-interval of
    /// [0..1] in which this curve can lie inside the strip, or `None`
    /// when it provably lies entirely outside.
    pub fn clip_to_fat_line(&self, fat: &FatLine) -> Option<Range<f64>> {
        let (low0, high0) = self.clip_against(&-fat.min);
        let (low1, high1) = self.clip_against(&fat.max);
        let start = low0.max(low1);
        let end = high0.min(high1);
        (start <= end).then_some(start..end)
    }
}

/// Zero crossings of the hull edges from `anchor` to each other sample.
///
/// Edges at constant distance never cross and contribute no candidate.
fn crossings(anchor: Point, others: [Point; 3]) -> ArrayVec<f64, 3> {
    let mut xs = ArrayVec::new();
    for p in others {
        if let Some(x) = Line::from_points(anchor, p).x_intercept() {
            xs.push(x);
        }
    }
    xs
}

#[cfg(test)]
mod tests {
    use crate::{CubicBez, FatLine, Line, Point};

    fn assert_near(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() < eps, "{a} != {b}");
    }

    fn curve_a() -> CubicBez {
        CubicBez::new(
            Point::new(24.0, 21.0),
            Point::new(189.0, 40.0),
            Point::new(159.0, 137.0),
            Point::new(101.0, 261.0),
        )
    }

    fn curve_b() -> CubicBez {
        CubicBez::new(
            Point::new(18.0, 122.0),
            Point::new(15.0, 178.0),
            Point::new(247.0, 173.0),
            Point::new(251.0, 242.0),
        )
    }

    #[test]
    fn fully_accepted() {
        // The x-axis, accepting the upper half-plane; the whole control
        // polygon of the curve lies above it.
        let line = Line::new(0.0, 1.0, 0.0);
        assert_eq!(curve_a().clip_against(&line), (0.0, 1.0));
    }

    #[test]
    fn clips_known_crossing() {
        // Distance samples (-1, -1, 1, 1): the hull first reaches zero
        // on the edge from (0, -1) to (2/3, 1), at t = 1/3. The curve's
        // own crossing at t = 0.5 must stay inside the bound.
        let line = Line::new(0.0, 1.0, 0.0);
        let c = CubicBez::new(
            Point::new(0.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(2.0, 1.0),
            Point::new(3.0, 1.0),
        );
        let (low, high) = c.clip_against(&line);
        assert_near(low, 1.0 / 3.0, 1e-12);
        assert_near(high, 1.0, 1e-12);
        assert!((low..=high).contains(&0.5));
        assert_near(c.eval(0.5).y, 0.0, 1e-12);
    }

    #[test]
    fn rejects_hull_below() {
        let line = Line::new(0.0, 1.0, 0.0);
        let c = CubicBez::new(
            Point::new(0.0, -10.0),
            Point::new(1.0, -5.0),
            Point::new(2.0, -5.0),
            Point::new(3.0, -10.0),
        );
        let (low, high) = c.clip_against(&line);
        assert!(low > high);
    }

    #[test]
    fn first_clip_of_crossing_pair() {
        let fat = FatLine::of_curve(&curve_b()).unwrap();
        let clip = curve_a().clip_to_fat_line(&fat).unwrap();
        assert_near(clip.start, 0.185433, 1e-4);
        assert_near(clip.end, 0.916146, 1e-4);
    }

    #[test]
    fn disjoint_curves_clip_empty() {
        let fat = FatLine::of_curve(&CubicBez::new(
            Point::new(0.0, 100.0),
            Point::new(50.0, 120.0),
            Point::new(150.0, 120.0),
            Point::new(200.0, 100.0),
        ))
        .unwrap();
        let below = CubicBez::new(
            Point::new(0.0, 0.0),
            Point::new(50.0, -20.0),
            Point::new(150.0, -20.0),
            Point::new(200.0, 0.0),
        );
        assert!(below.clip_to_fat_line(&fat).is_none());
    }
}

// Copyright 2025 the Fatline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve-curve intersection by alternating fat-line clipping.

use core::ops::Range;

use crate::{CubicBez, FatLine};

/// The default accuracy for the intersection solver, in parameter space.
pub const DEFAULT_ACCURACY: f64 = 1e-5;

/// Hard cap on clipping iterations before giving up.
const MAX_ITERATIONS: usize = 64;

/// Fraction of its domain a clip must retain to count as stalled.
const STALL_RATIO: f64 = 0.8;

/// Consecutive stalled clips before giving up.
const STALL_LIMIT: u32 = 4;

/// The outcome of a curve-curve intersection query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// The curves cross at the given parameter pair, each parameter in
    /// its curve's original [0..1] domain, accurate to the requested
    /// tolerance.
    Point {
        /// The parameter on the first curve.
        t0: f64,
        /// The parameter on the second curve.
        t1: f64,
    },
    /// The curves provably do not cross: one curve lies entirely
    /// outside a fat line bounding the other.
    None,
    /// Clipping stopped making progress before reaching the tolerance.
    ///
    /// This is the typical outcome for curves that are tangent, overlap
    /// along an arc, or cross more than once, all of which keep large
    /// parts of both domains inside each other's fat lines.
    Inconclusive,
}

/// Which curve is being clipped in the current step.
#[derive(Clone, Copy)]
enum Phase {
    /// The first curve is the reference; the second is clipped.
    ClipSecond,
    /// The second curve is the reference; the first is clipped.
    ClipFirst,
}

/// Find where two cubic Bézier curves cross, to the given accuracy.
///
/// This is the Bézier-clipping scheme: the reference curve is bounded
/// by a fat line, the other curve's parameter domain is clipped against
/// that strip, the clipped curve is re-subdivided, and the roles swap.
/// Each clip is conservative, so an intersection present at the start
/// is never clipped away, and an empty clip is a proof that none
/// exists.
///
/// `accuracy` bounds, in parameter space of the original curves, the
/// width of the interval each returned parameter is the midpoint of.
/// Both intervals must reach the bound before the solver reports a
/// [`Intersection::Point`].
///
/// The solver finds a single crossing. When the curves touch more than
/// once, or touch tangentially, clipping cannot isolate a parameter
/// pair and the outcome is [`Intersection::Inconclusive`].
///
/// # Example
///
/// ```
/// use fatline::{curve_curve_intersection, CubicBez, Intersection, Point};
///
/// let a = CubicBez::new(
///     Point::new(0.0, -10.0),
///     Point::new(30.0, 10.0),
///     Point::new(70.0, 10.0),
///     Point::new(100.0, -10.0),
/// );
/// let b = CubicBez::new(
///     Point::new(50.0, -20.0),
///     Point::new(55.0, 0.0),
///     Point::new(45.0, 20.0),
///     Point::new(50.0, 40.0),
/// );
/// let Intersection::Point { t0, t1 } = curve_curve_intersection(&a, &b, 1e-5) else {
///     panic!("curves cross");
/// };
/// assert!(a.eval(t0).distance(b.eval(t1)) < 1e-2);
/// ```
pub fn curve_curve_intersection(a: &CubicBez, b: &CubicBez, accuracy: f64) -> Intersection {
    let mut cur_a = *a;
    let mut cur_b = *b;
    let mut dom_a = 0.0..1.0;
    let mut dom_b = 0.0..1.0;
    let mut phase = Phase::ClipSecond;
    let mut stalled = 0;

    for _ in 0..MAX_ITERATIONS {
        let (reference, target, domain) = match phase {
            Phase::ClipSecond => (&cur_a, &mut cur_b, &mut dom_b),
            Phase::ClipFirst => (&cur_b, &mut cur_a, &mut dom_a),
        };

        let Some(fat) = FatLine::of_curve(reference) else {
            // The reference has collapsed to a point; no strip to clip
            // against, so no further progress is possible.
            return Intersection::Inconclusive;
        };
        let Some(clip) = target.clip_to_fat_line(&fat) else {
            return Intersection::None;
        };

        let retained = clip.end - clip.start;
        let width = domain.end - domain.start;
        *domain = domain.start + clip.start * width..domain.start + clip.end * width;
        *target = target.subsegment(clip);

        if dom_a.end - dom_a.start <= accuracy && dom_b.end - dom_b.start <= accuracy {
            return Intersection::Point {
                t0: midpoint(&dom_a),
                t1: midpoint(&dom_b),
            };
        }

        if retained > STALL_RATIO {
            stalled += 1;
            if stalled >= STALL_LIMIT {
                return Intersection::Inconclusive;
            }
        } else {
            stalled = 0;
        }

        phase = match phase {
            Phase::ClipSecond => Phase::ClipFirst,
            Phase::ClipFirst => Phase::ClipSecond,
        };
    }

    Intersection::Inconclusive
}

/// Find where two cubic Bézier curves cross, to [`DEFAULT_ACCURACY`].
#[inline]
pub fn curve_curve_intersection_default(a: &CubicBez, b: &CubicBez) -> Intersection {
    curve_curve_intersection(a, b, DEFAULT_ACCURACY)
}

#[inline]
fn midpoint(domain: &Range<f64>) -> f64 {
    0.5 * (domain.start + domain.end)
}

#[cfg(test)]
mod tests {
    use super::{curve_curve_intersection, curve_curve_intersection_default, Intersection};
    use crate::{CubicBez, Point, DEFAULT_ACCURACY};

    fn crossing_pair() -> (CubicBez, CubicBez) {
        (
            CubicBez::new(
                Point::new(18.0, 122.0),
                Point::new(15.0, 178.0),
                Point::new(247.0, 173.0),
                Point::new(251.0, 242.0),
            ),
            CubicBez::new(
                Point::new(24.0, 21.0),
                Point::new(189.0, 40.0),
                Point::new(159.0, 137.0),
                Point::new(101.0, 261.0),
            ),
        )
    }

    fn expect_point(outcome: Intersection) -> (f64, f64) {
        match outcome {
            Intersection::Point { t0, t1 } => (t0, t1),
            other => panic!("expected a point intersection, got {other:?}"),
        }
    }

    #[test]
    fn transversal_crossing() {
        let (a, b) = crossing_pair();
        let (t0, t1) = expect_point(curve_curve_intersection(&a, &b, DEFAULT_ACCURACY));
        assert!((0.0..=1.0).contains(&t0));
        assert!((0.0..=1.0).contains(&t1));
        // Both curves evaluate to the same spatial point at the
        // reported parameters.
        assert!(a.eval(t0).distance(b.eval(t1)) < 0.05);
    }

    #[test]
    fn shared_endpoint() {
        let a = CubicBez::new(
            Point::new(0.0, 0.0),
            Point::new(60.0, 40.0),
            Point::new(140.0, 40.0),
            Point::new(200.0, 0.0),
        );
        let b = CubicBez::new(
            Point::new(200.0, 0.0),
            Point::new(240.0, 80.0),
            Point::new(210.0, 160.0),
            Point::new(220.0, 240.0),
        );
        let (t0, t1) = expect_point(curve_curve_intersection(&a, &b, DEFAULT_ACCURACY));
        assert!(t0 > 0.999, "expected the end of the first curve, got {t0}");
        assert!(t1 < 0.001, "expected the start of the second curve, got {t1}");
        assert!(a.eval(t0).distance(b.eval(t1)) < 0.05);
    }

    #[test]
    fn disjoint_curves() {
        let a = CubicBez::new(
            Point::new(0.0, 0.0),
            Point::new(50.0, 50.0),
            Point::new(150.0, 50.0),
            Point::new(200.0, 0.0),
        );
        let b = CubicBez::new(
            Point::new(0.0, 200.0),
            Point::new(50.0, 250.0),
            Point::new(150.0, 250.0),
            Point::new(200.0, 200.0),
        );
        assert_eq!(
            curve_curve_intersection(&a, &b, DEFAULT_ACCURACY),
            Intersection::None
        );
    }

    #[test]
    fn swap_symmetry() {
        let (a, b) = crossing_pair();
        let (t0, t1) = expect_point(curve_curve_intersection(&a, &b, DEFAULT_ACCURACY));
        let (s0, s1) = expect_point(curve_curve_intersection(&b, &a, DEFAULT_ACCURACY));
        assert!((t0 - s1).abs() < 1e-4, "{t0} vs {s1}");
        assert!((t1 - s0).abs() < 1e-4, "{t1} vs {s0}");
    }

    #[test]
    fn default_accuracy_wrapper() {
        let (a, b) = crossing_pair();
        let with_default = curve_curve_intersection_default(&a, &b);
        let explicit = curve_curve_intersection(&a, &b, DEFAULT_ACCURACY);
        assert_eq!(with_default, explicit);
    }

    #[test]
    fn point_reference_is_inconclusive() {
        let p = Point::new(10.0, 10.0);
        let a = CubicBez::new(p, p, p, p);
        let (_, b) = crossing_pair();
        assert_eq!(
            curve_curve_intersection(&a, &b, DEFAULT_ACCURACY),
            Intersection::Inconclusive
        );
    }
}

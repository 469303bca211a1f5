// Copyright 2025 the Fatline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinite lines in normalized implicit form.

use core::fmt;
use core::ops::Neg;

use crate::Point;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// An infinite line in normalized implicit form.
///
/// The line is the zero set of `a·x + b·y + c`, with the coefficients
/// scaled so that `a² + b² = 1`. Under that normalization,
/// [`signed_distance`] evaluates the implicit form directly and yields
/// the true Euclidean distance from a point to the line, with a sign
/// telling which side the point lies on.
///
/// Two normalized coefficient triples describe each geometric line, one
/// the negation of the other. [`Neg`] flips between them, which swaps
/// the sign convention of [`signed_distance`].
///
/// [`signed_distance`]: Line::signed_distance
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The coefficient of `x` in the implicit form.
    pub a: f64,
    /// The coefficient of `y` in the implicit form.
    pub b: f64,
    /// The constant term of the implicit form.
    pub c: f64,
}

impl Line {
    /// Create a new line from implicit coefficients, normalizing them.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` are both zero, as the coefficients then
    /// describe no line, or if any coefficient is not finite.
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Line {
        assert!(
            a.is_finite() && b.is_finite() && c.is_finite(),
            "line coefficients must be finite"
        );
        let norm = a.hypot(b);
        assert!(norm != 0.0, "line coefficients (a, b) must not both be zero");
        let scale = norm.recip();
        Line {
            a: a * scale,
            b: b * scale,
            c: c * scale,
        }
    }

    /// Create the line through two distinct points.
    ///
    /// The implicit normal `(a, b)` is the segment direction rotated a
    /// quarter turn, so vertical and horizontal segments need no special
    /// treatment.
    ///
    /// # Panics
    ///
    /// Panics if the two points coincide, as they then determine no
    /// direction.
    #[inline]
    pub fn from_points(p0: Point, p1: Point) -> Line {
        let d = p1 - p0;
        assert!(
            d.x != 0.0 || d.y != 0.0,
            "cannot construct a line through coincident points"
        );
        Line::new(d.y, -d.x, d.x * p0.y - d.y * p0.x)
    }

    /// The `y` coordinate of the line at the given `x`.
    ///
    /// Returns `None` for a vertical line (`b = 0`), which has no unique
    /// `y` for any `x`.
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        if self.b == 0.0 {
            None
        } else {
            Some(-(self.a * x + self.c) / self.b)
        }
    }

    /// The `x` coordinate at which the line crosses the x-axis.
    ///
    /// Returns `None` for a horizontal line (`a = 0`), which either
    /// never crosses the x-axis or is the x-axis.
    #[inline]
    pub fn x_intercept(&self) -> Option<f64> {
        if self.a == 0.0 {
            None
        } else {
            Some(-self.c / self.a)
        }
    }

    /// Signed Euclidean distance from a point to the line.
    ///
    /// Zero on the line; the sign distinguishes the two half-planes and
    /// follows the orientation of `(a, b)`.
    #[inline]
    pub fn signed_distance(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// The parallel line through the given point.
    ///
    /// Keeps `(a, b)`, choosing `c` so the implicit form vanishes at `p`.
    #[inline]
    pub fn parallel_through(&self, p: Point) -> Line {
        Line {
            a: self.a,
            b: self.b,
            c: -(self.a * p.x + self.b * p.y),
        }
    }

    /// The parallel line with the given constant term.
    ///
    /// Keeps `(a, b)`, which stay normalized, so the result is offset
    /// from `self` by `self.c - c` in signed distance.
    #[inline]
    pub fn with_c(&self, c: f64) -> Line {
        Line {
            a: self.a,
            b: self.b,
            c,
        }
    }

    /// Is this line finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

impl Neg for Line {
    type Output = Line;

    /// The same geometric line with the opposite sign convention.
    #[inline]
    fn neg(self) -> Line {
        Line {
            a: -self.a,
            b: -self.b,
            c: -self.c,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.a, formatter)?;
        write!(formatter, "x + ")?;
        fmt::Display::fmt(&self.b, formatter)?;
        write!(formatter, "y + ")?;
        fmt::Display::fmt(&self.c, formatter)?;
        write!(formatter, " = 0")
    }
}

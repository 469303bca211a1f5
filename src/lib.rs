// Copyright 2025 the Fatline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier curve intersection via fat-line clipping.
//!
//! The fatline library computes the parameter values at which two cubic
//! Bézier curves cross, to a bounded tolerance, without brute-force
//! sampling. It implements the classic Bézier-clipping scheme: each curve
//! is bounded by a "fat line" (a strip of two parallel lines that is
//! guaranteed, by the convex-hull property, to contain the whole curve),
//! and the other curve's parameter domain is clipped against that strip
//! using its control polygon as a piecewise-linear proxy. Alternating the
//! roles and re-subdividing narrows both parameter intervals toward the
//! intersection.
//!
//! The building blocks ([`Point`], [`Line`], [`CubicBez`], [`FatLine`] and
//! the clipping queries) are exposed directly, so callers can evaluate
//! curves for display or draw debug overlays of the bounding strips and
//! clip intervals without going through the solver.
//!
//! # Example
//!
//! ```
//! use fatline::{curve_curve_intersection, CubicBez, Intersection, Point, DEFAULT_ACCURACY};
//!
//! let a = CubicBez::new(
//!     Point::new(18.0, 122.0),
//!     Point::new(15.0, 178.0),
//!     Point::new(247.0, 173.0),
//!     Point::new(251.0, 242.0),
//! );
//! let b = CubicBez::new(
//!     Point::new(24.0, 21.0),
//!     Point::new(189.0, 40.0),
//!     Point::new(159.0, 137.0),
//!     Point::new(101.0, 261.0),
//! );
//! match curve_curve_intersection(&a, &b, DEFAULT_ACCURACY) {
//!     Intersection::Point { t0, t1 } => {
//!         assert!(a.eval(t0).distance(b.eval(t1)) < 0.1);
//!     }
//!     outcome => panic!("expected an intersection, got {outcome:?}"),
//! }
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::unreadable_literal, clippy::many_single_char_names)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("fatline requires either the `std` or `libm` feature");

mod clip;
mod common;
mod cubicbez;
mod fat_line;
mod intersect;
mod line;
mod point;
mod vec2;

pub use crate::cubicbez::*;
pub use crate::fat_line::*;
pub use crate::intersect::*;
pub use crate::line::*;
pub use crate::point::*;
pub use crate::vec2::*;

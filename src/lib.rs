//!
//! # flo_bezier
//!
//! Routines for working with quadratic and cubic bezier curves: evaluating and
//! subdividing them, measuring their arc length, computing approximate offset
//! curves and fitting curves to sampled values.
//!
//! Most operations are supplied as free functions taking a curve's weights
//! (its control points) directly, with the `QuadBezier` and `CubicBezier` types
//! providing a value representation where one is more convenient, and
//! `SplinePath` deriving a smooth chain of cubic sections from a list of
//! guide points.
//!
//! Everything is generic over the coordinate type: anything implementing
//! `Coordinate` can describe a curve, including bare `f32` and `f64` values for
//! 1-dimensional curves. The same algorithms therefore work on 2D points,
//! 3D points or plain scalars (which is how the tapered offset functions treat
//! their taper curve).
//!

#![warn(bare_trait_objects)]

pub mod bezier;

pub mod scalar;
pub use self::scalar::*;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::{BezierCurve, QuadBezier, CubicBezier, SplinePath};

//!
//! # Routines for bezier curves
//!
//! The functions here work directly on curve weights (the control points), so
//! they can be used without committing to any particular curve representation:
//! `basis4` evaluates a cubic curve given its four weights, `subdivide4` splits
//! one into two halves, `length4` estimates its arc length and so on. Functions
//! ending in `2` work on lines, `3` on quadratic curves and `4` on cubic ones.
//!
//! The `QuadBezier` and `CubicBezier` types wrap a set of weights up as a value
//! for when that is more convenient, and `SplinePath` turns a list of guide
//! points into a connected run of cubic segments.
//!
//! The offset functions produce approximate parallel curves, offset either by a
//! fixed distance or by a distance that is itself described by a bezier curve.
//! `fit_cubic` goes the other way and finds the cubic curve that best passes
//! through a set of sampled values.
//!

mod basis;
mod derivative;
mod length;
mod subdivide;
mod through;
mod coefficients;
mod bounds;
mod fit;
mod offset;
mod curve;
mod path;

pub use self::basis::*;
pub use self::derivative::*;
pub use self::length::*;
pub use self::subdivide::*;
pub use self::through::*;
pub use self::coefficients::*;
pub use self::bounds::*;
pub use self::fit::*;
pub use self::offset::*;
pub use self::curve::*;
pub use self::path::*;

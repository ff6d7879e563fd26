//!
//! # Basic geometric definitions
//!
//! The `Geo` trait is implemented by any type that works with one particular kind of coordinate:
//! the curve and path types implement it to say what they use for points. `BoundingBox` describes
//! axis-aligned bounding boxes, and is also a trait so that the bounding box functions can return
//! their results as whatever type suits the caller rather than only as the `Bounds` type supplied
//! by this library.
//!

mod geo;
mod bounding_box;

pub use self::geo::*;
pub use self::bounding_box::*;
pub use super::coordinate::*;

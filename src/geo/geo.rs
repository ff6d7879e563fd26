use super::super::coordinate::*;

///
/// Implemented by types that are geometric in nature, to say what they use for
/// points
///
pub trait Geo {
    /// The coordinate type this geometry is defined over
    type Point: Coordinate;
}

use super::geo::*;
use super::super::coordinate::*;

///
/// Trait implemented by types that can describe an axis-aligned bounding box
///
/// A bounding box whose corners coincide is considered empty, and acts as the
/// identity when unioned with other bounding boxes.
///
pub trait BoundingBox : Geo+Sized {
    ///
    /// Creates a bounding box from its minimum and maximum corners
    ///
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self;

    ///
    /// The corner of this bounding box with the smallest coordinate components
    ///
    fn min(&self) -> Self::Point;

    ///
    /// The corner of this bounding box with the largest coordinate components
    ///
    fn max(&self) -> Self::Point;

    ///
    /// Creates a bounding box that covers nothing
    ///
    fn empty() -> Self {
        let nowhere = Self::Point::origin();

        Self::from_min_max(nowhere, nowhere)
    }

    ///
    /// True if this bounding box covers nothing
    ///
    #[inline]
    fn is_empty(&self) -> bool {
        self.min() == self.max()
    }

    ///
    /// Expands this bounding box just far enough to cover a point
    ///
    fn grow_to_include(self, point: Self::Point) -> Self {
        let min = Self::Point::from_smallest_components(self.min(), point);
        let max = Self::Point::from_biggest_components(self.max(), point);

        Self::from_min_max(min, max)
    }

    ///
    /// The smallest bounding box covering both this and another bounding box
    ///
    /// An empty bounding box on either side leaves the other side unchanged
    /// rather than dragging its corners towards the origin.
    ///
    fn union_bounds(self, other: Self) -> Self {
        if self.is_empty() {
            other
        } else if other.is_empty() {
            self
        } else {
            self.grow_to_include(other.min()).grow_to_include(other.max())
        }
    }
}

///
/// A bounding box stored as its two corners, kept in minimum/maximum order
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds<Point: Coordinate>(pub Point, pub Point);

impl<Point: Coordinate> Geo for Bounds<Point> {
    type Point = Point;
}

impl<Point: Coordinate> BoundingBox for Bounds<Point> {
    #[inline]
    fn from_min_max(min: Point, max: Point) -> Bounds<Point> {
        Bounds(min, max)
    }

    #[inline]
    fn min(&self) -> Point {
        self.0
    }

    #[inline]
    fn max(&self) -> Point {
        self.1
    }
}

impl<Point: Coordinate> Geo for (Point, Point) {
    type Point = Point;
}

///
/// A plain pair of points also works as a bounding box: the corners are sorted
/// as they are read, so the pair itself can be in any order
///
impl<Point: Coordinate> BoundingBox for (Point, Point) {
    #[inline]
    fn from_min_max(min: Point, max: Point) -> (Point, Point) {
        (min, max)
    }

    #[inline]
    fn min(&self) -> Point {
        Point::from_smallest_components(self.0, self.1)
    }

    #[inline]
    fn max(&self) -> Point {
        Point::from_biggest_components(self.0, self.1)
    }
}

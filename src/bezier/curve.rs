use super::basis::*;
use super::length::*;
use super::derivative::*;
use super::subdivide::*;
use super::super::geo::*;

use std::ops::{Index, IndexMut};

///
/// Trait implemented by bezier curves of any degree
///
pub trait BezierCurve : Geo {
    ///
    /// The point on this curve at position t, where 0 is the start of the
    /// curve and 1 is the end
    ///
    fn point_at_pos(&self, t: <Self::Point as Coordinate>::Scalar) -> Self::Point;

    ///
    /// Estimates the arc length of this curve
    ///
    fn length(&self) -> <Self::Point as Coordinate>::Scalar;
}

///
/// A quadratic bezier curve, described by its three weights
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuadBezier<Point: Coordinate> {
    pub points: [Point; 3]
}

///
/// A cubic bezier curve, described by its four weights
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CubicBezier<Point: Coordinate> {
    pub points: [Point; 4]
}

impl<Point: Coordinate> QuadBezier<Point> {
    ///
    /// Creates a new quadratic bezier curve from its weights
    ///
    pub fn new(w1: Point, w2: Point, w3: Point) -> QuadBezier<Point> {
        QuadBezier { points: [w1, w2, w3] }
    }

    ///
    /// The point where this curve starts
    ///
    #[inline]
    pub fn start_point(&self) -> Point {
        self.points[0]
    }

    ///
    /// The point where this curve ends
    ///
    #[inline]
    pub fn end_point(&self) -> Point {
        self.points[2]
    }

    ///
    /// The weights of the linear curve that gives the derivative of this curve
    ///
    pub fn derivative(&self) -> (Point, Point) {
        derivative3(self.points[0], self.points[1], self.points[2])
    }

    ///
    /// The unit tangent to this curve at position t
    ///
    pub fn tangent_at(&self, t: Point::Scalar) -> Point {
        tangent3(t, self.points[0], self.points[1], self.points[2])
    }

    ///
    /// Subdivides this curve at position t, returning the two curves that
    /// together cover the same path
    ///
    pub fn subdivide(&self, t: Point::Scalar) -> (QuadBezier<Point>, QuadBezier<Point>) {
        let ((l1, l2, l3), (r1, r2, r3)) = subdivide3(t, self.points[0], self.points[1], self.points[2]);

        (QuadBezier::new(l1, l2, l3), QuadBezier::new(r1, r2, r3))
    }

    ///
    /// The curve that follows the same path as this one between positions
    /// t_min and t_max
    ///
    pub fn section(&self, t_min: Point::Scalar, t_max: Point::Scalar) -> QuadBezier<Point> {
        let (w1, w2, w3) = section3(t_min, t_max, self.points[0], self.points[1], self.points[2]);

        QuadBezier::new(w1, w2, w3)
    }
}

impl<Point: Coordinate+Coordinate2D> QuadBezier<Point> {
    ///
    /// The unit normal to this curve at position t
    ///
    pub fn normal_at(&self, t: Point::Scalar) -> Point {
        normal3(t, self.points[0], self.points[1], self.points[2])
    }
}

impl<Point: Coordinate> CubicBezier<Point> {
    ///
    /// Creates a new cubic bezier curve from its weights
    ///
    pub fn new(w1: Point, w2: Point, w3: Point, w4: Point) -> CubicBezier<Point> {
        CubicBezier { points: [w1, w2, w3, w4] }
    }

    ///
    /// The point where this curve starts
    ///
    #[inline]
    pub fn start_point(&self) -> Point {
        self.points[0]
    }

    ///
    /// The point where this curve ends
    ///
    #[inline]
    pub fn end_point(&self) -> Point {
        self.points[3]
    }

    ///
    /// The weights of the quadratic curve that gives the derivative of this curve
    ///
    pub fn derivative(&self) -> (Point, Point, Point) {
        derivative4(self.points[0], self.points[1], self.points[2], self.points[3])
    }

    ///
    /// The unit tangent to this curve at position t
    ///
    pub fn tangent_at(&self, t: Point::Scalar) -> Point {
        tangent4(t, self.points[0], self.points[1], self.points[2], self.points[3])
    }

    ///
    /// Subdivides this curve at position t, returning the two curves that
    /// together cover the same path
    ///
    pub fn subdivide(&self, t: Point::Scalar) -> (CubicBezier<Point>, CubicBezier<Point>) {
        let ((l1, l2, l3, l4), (r1, r2, r3, r4)) = subdivide4(t, self.points[0], self.points[1], self.points[2], self.points[3]);

        (CubicBezier::new(l1, l2, l3, l4), CubicBezier::new(r1, r2, r3, r4))
    }

    ///
    /// The curve that follows the same path as this one between positions
    /// t_min and t_max
    ///
    pub fn section(&self, t_min: Point::Scalar, t_max: Point::Scalar) -> CubicBezier<Point> {
        let (w1, w2, w3, w4) = section4(t_min, t_max, self.points[0], self.points[1], self.points[2], self.points[3]);

        CubicBezier::new(w1, w2, w3, w4)
    }
}

impl<Point: Coordinate+Coordinate2D> CubicBezier<Point> {
    ///
    /// The unit normal to this curve at position t
    ///
    pub fn normal_at(&self, t: Point::Scalar) -> Point {
        normal4(t, self.points[0], self.points[1], self.points[2], self.points[3])
    }
}

impl<Point: Coordinate> Geo for QuadBezier<Point> {
    type Point = Point;
}

impl<Point: Coordinate> Geo for CubicBezier<Point> {
    type Point = Point;
}

impl<Point: Coordinate> BezierCurve for QuadBezier<Point> {
    #[inline]
    fn point_at_pos(&self, t: Point::Scalar) -> Point {
        basis3(t, self.points[0], self.points[1], self.points[2])
    }

    fn length(&self) -> Point::Scalar {
        length3(self.points[0], self.points[1], self.points[2])
    }
}

impl<Point: Coordinate> BezierCurve for CubicBezier<Point> {
    #[inline]
    fn point_at_pos(&self, t: Point::Scalar) -> Point {
        basis4(t, self.points[0], self.points[1], self.points[2], self.points[3])
    }

    fn length(&self) -> Point::Scalar {
        length4(self.points[0], self.points[1], self.points[2], self.points[3])
    }
}

impl<Point: Coordinate> Index<usize> for QuadBezier<Point> {
    type Output = Point;

    #[inline]
    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<Point: Coordinate> IndexMut<usize> for QuadBezier<Point> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Point {
        &mut self.points[index]
    }
}

impl<Point: Coordinate> Index<usize> for CubicBezier<Point> {
    type Output = Point;

    #[inline]
    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<Point: Coordinate> IndexMut<usize> for CubicBezier<Point> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Point {
        &mut self.points[index]
    }
}

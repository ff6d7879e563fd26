use super::basis::*;
use super::super::coordinate::*;

///
/// Returns the 1st derivative of a cubic bezier curve
///
/// The derivative of a cubic curve is a quadratic curve, so this returns the
/// three weights of that curve.
///
#[inline]
pub fn derivative4<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point) {
    let three = Point::Scalar::from_f64(3.0);

    ((w2-w1)*three, (w3-w2)*three, (w4-w3)*three)
}

///
/// Returns the 1st derivative of a quadratic bezier curve (or the 2nd derivative of a cubic curve)
///
#[inline]
pub fn derivative3<Point: Coordinate>(wn1: Point, wn2: Point, wn3: Point) -> (Point, Point) {
    let two = Point::Scalar::from_f64(2.0);

    ((wn2-wn1)*two, (wn3-wn2)*two)
}

///
/// Returns the 1st derivative of a line (or the 2nd derivative of a quadratic curve, or the 3rd of a cubic)
///
#[inline]
pub fn derivative2<Point: Coordinate>(wnn1: Point, wnn2: Point) -> Point {
    wnn2-wnn1
}

///
/// Evaluates the derivative of a line at a position along it
///
/// (The derivative of a line is the same at every position)
///
#[inline]
pub fn derivative_at2<Point: Coordinate>(_t: Point::Scalar, w1: Point, w2: Point) -> Point {
    derivative2(w1, w2)
}

///
/// Evaluates the derivative of a quadratic bezier curve at a position along it
///
#[inline]
pub fn derivative_at3<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point) -> Point {
    let (d1, d2) = derivative3(w1, w2, w3);

    basis2(t, d1, d2)
}

///
/// Evaluates the derivative of a cubic bezier curve at a position along it
///
#[inline]
pub fn derivative_at4<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let (d1, d2, d3) = derivative4(w1, w2, w3, w4);

    basis3(t, d1, d2, d3)
}

///
/// Returns the unit tangent of a line
///
#[inline]
pub fn tangent2<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point) -> Point {
    derivative_at2(t, w1, w2).to_unit_vector()
}

///
/// Returns the unit tangent of a quadratic bezier curve at a position along it
///
#[inline]
pub fn tangent3<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point) -> Point {
    derivative_at3(t, w1, w2, w3).to_unit_vector()
}

///
/// Returns the unit tangent of a cubic bezier curve at a position along it
///
#[inline]
pub fn tangent4<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    derivative_at4(t, w1, w2, w3, w4).to_unit_vector()
}

///
/// Returns the unit tangent of a bezier curve with an arbitrary number of weights
///
/// The derivative points from the curve formed by dropping the last weight
/// towards the curve formed by dropping the first, scaled by the degree. The
/// scaling disappears when the result is normalized, so this evaluates the two
/// dropped-weight curves directly instead of materializing the derivative's
/// weights. Curves with fewer than two weights have no tangent and return the
/// origin.
///
pub fn tangent<Point: Coordinate>(t: Point::Scalar, points: &[Point]) -> Point {
    if points.len() < 2 {
        return Point::origin();
    }

    let left    = de_casteljau(t, &points[..points.len()-1]);
    let right   = de_casteljau(t, &points[1..]);

    (right-left).to_unit_vector()
}

///
/// Rotates a 2D vector a quarter turn anticlockwise
///
#[inline]
pub fn rotate_anticlockwise<Point: Coordinate+Coordinate2D>(vector: Point) -> Point {
    Point::from_components(&[-vector.y(), vector.x()])
}

///
/// Returns the unit normal of a line
///
/// Normals are only defined for 2 dimensional curves: the normal is the unit
/// tangent rotated a quarter turn anticlockwise.
///
#[inline]
pub fn normal2<Point: Coordinate+Coordinate2D>(t: Point::Scalar, w1: Point, w2: Point) -> Point {
    rotate_anticlockwise(tangent2(t, w1, w2))
}

///
/// Returns the unit normal of a quadratic bezier curve at a position along it
///
#[inline]
pub fn normal3<Point: Coordinate+Coordinate2D>(t: Point::Scalar, w1: Point, w2: Point, w3: Point) -> Point {
    rotate_anticlockwise(tangent3(t, w1, w2, w3))
}

///
/// Returns the unit normal of a cubic bezier curve at a position along it
///
#[inline]
pub fn normal4<Point: Coordinate+Coordinate2D>(t: Point::Scalar, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    rotate_anticlockwise(tangent4(t, w1, w2, w3, w4))
}

///
/// Returns the unit normal of a bezier curve with an arbitrary number of weights
///
pub fn normal<Point: Coordinate+Coordinate2D>(t: Point::Scalar, points: &[Point]) -> Point {
    debug_assert!(points.len() >= 2);

    if points.len() < 2 {
        // No tangent exists: treat the curve as pointing along the x axis
        return rotate_anticlockwise(Point::from_components(&[Point::Scalar::one(), Point::Scalar::zero()]));
    }

    rotate_anticlockwise(tangent(t, points))
}

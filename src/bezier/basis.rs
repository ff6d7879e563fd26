use super::super::coordinate::*;

///
/// The linear bezier weighted basis function
///
#[inline]
pub fn basis2<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point) -> Point {
    w1 + (w2-w1)*t
}

///
/// The quadratic bezier weighted basis function
///
#[inline]
pub fn basis3<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point) -> Point {
    let two                 = Point::Scalar::from_f64(2.0);

    let one_minus_t         = Point::Scalar::one()-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;

    w1*one_minus_t_squared
        + w2*(one_minus_t*t*two)
        + w3*(t*t)
}

///
/// The cubic bezier weighted basis function
///
#[inline]
pub fn basis4<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let three               = Point::Scalar::from_f64(3.0);

    let t_squared           = t*t;
    let t_cubed             = t_squared*t;

    let one_minus_t         = Point::Scalar::one()-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;
    let one_minus_t_cubed   = one_minus_t_squared*one_minus_t;

    w1*one_minus_t_cubed
        + w2*(one_minus_t_squared*t*three)
        + w3*(one_minus_t*t_squared*three)
        + w4*t_cubed
}

///
/// de Casteljau's algorithm for lines
///
#[inline]
pub fn de_casteljau2<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point) -> Point {
    let inverse = Point::Scalar::one()-t;

    w1*inverse + w2*t
}

///
/// de Casteljau's algorithm for quadratic bezier curves
///
#[inline]
pub fn de_casteljau3<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point) -> Point {
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);

    de_casteljau2(t, wn1, wn2)
}

///
/// de Casteljau's algorithm for cubic bezier curves
///
#[inline]
pub fn de_casteljau4<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);
    let wn3 = de_casteljau2(t, w3, w4);

    de_casteljau3(t, wn1, wn2, wn3)
}

///
/// Evaluates a bezier curve with an arbitrary number of weights
///
/// A single point evaluates to itself, and an empty set of weights to the
/// origin. Curves with up to four weights evaluate using the direct basis
/// functions; higher degrees evaluate recursively by interpolating between the
/// curve formed by dropping the last weight and the curve formed by dropping
/// the first.
///
pub fn de_casteljau<Point: Coordinate>(t: Point::Scalar, points: &[Point]) -> Point {
    match points.len() {
        0       => Point::origin(),
        1       => points[0],
        2       => basis2(t, points[0], points[1]),
        3       => basis3(t, points[0], points[1], points[2]),
        4       => basis4(t, points[0], points[1], points[2], points[3]),
        count   => {
            let left    = de_casteljau(t, &points[..count-1]);
            let right   = de_casteljau(t, &points[1..]);

            de_casteljau2(t, left, right)
        }
    }
}

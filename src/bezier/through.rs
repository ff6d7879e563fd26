use super::super::coordinate::*;

///
/// Returns the middle weight of the quadratic bezier curve that passes through
/// `point` when t is 0.5, given the start and end weights of the curve
///
pub fn curve_through3<Point: Coordinate>(start: Point, point: Point, end: Point) -> Point {
    let quarter = Point::Scalar::from_f64(0.25);
    let two     = Point::Scalar::from_f64(2.0);

    (point - start*quarter - end*quarter)*two
}

///
/// Returns the two inner weights of the cubic bezier curve that passes through
/// `point1` when t is 1/3 and through `point2` when t is 2/3, given the start
/// and end weights of the curve
///
pub fn curve_through4<Point: Coordinate>(start: Point, point1: Point, point2: Point, end: Point) -> (Point, Point) {
    let w2 =
        point1*Point::Scalar::from_f64(54.0/18.0)
        + point2*Point::Scalar::from_f64(-27.0/18.0)
        + start*Point::Scalar::from_f64(-15.0/18.0)
        + end*Point::Scalar::from_f64(6.0/18.0);

    let w3 =
        point1*Point::Scalar::from_f64(27.0/6.0)
        + start*Point::Scalar::from_f64(-8.0/6.0)
        + w2*Point::Scalar::from_f64(-12.0/6.0)
        + end*Point::Scalar::from_f64(-1.0/6.0);

    (w2, w3)
}

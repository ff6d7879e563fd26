use super::super::coordinate::*;

///
/// Returns the power basis coefficients of a quadratic bezier curve, highest
/// power first
///
/// The curve evaluates as `a*t^2 + b*t + c` for the returned `(a, b, c)`.
///
pub fn quadratic_coefficients<Point: Coordinate>(w1: Point, w2: Point, w3: Point) -> (Point, Point, Point) {
    let two = Point::Scalar::from_f64(2.0);

    (w1 - w2*two + w3, (w2 - w1)*two, w1)
}

///
/// Returns the power basis coefficients of a cubic bezier curve, highest power
/// first
///
/// The curve evaluates as `a*t^3 + b*t^2 + c*t + d` for the returned
/// `(a, b, c, d)`.
///
pub fn cubic_coefficients<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point, Point) {
    let three   = Point::Scalar::from_f64(3.0);
    let six     = Point::Scalar::from_f64(6.0);

    (
        w4 - w3*three + w2*three - w1,
        w3*three - w2*six + w1*three,
        (w2 - w1)*three,
        w1
    )
}

///
/// Returns the power basis coefficients of the derivative of a quadratic bezier
/// curve, highest power first
///
/// The derivative is a line, evaluating as `a*t + b` for the returned `(a, b)`.
///
pub fn quadratic_derivative_coefficients<Point: Coordinate>(w1: Point, w2: Point, w3: Point) -> (Point, Point) {
    let two = Point::Scalar::from_f64(2.0);

    ((w1 - w2*two + w3)*two, (w2 - w1)*two)
}

///
/// Returns the power basis coefficients of the derivative of a cubic bezier
/// curve, highest power first
///
/// The derivative is a quadratic curve, evaluating as `a*t^2 + b*t + c` for the
/// returned `(a, b, c)`.
///
pub fn cubic_derivative_coefficients<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point) {
    let two     = Point::Scalar::from_f64(2.0);
    let three   = Point::Scalar::from_f64(3.0);
    let six     = Point::Scalar::from_f64(6.0);

    (
        (w4 - w3*three + w2*three - w1)*three,
        (w3*three - w2*six + w1*three)*two,
        (w2 - w1)*three
    )
}

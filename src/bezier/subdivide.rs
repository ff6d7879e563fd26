use super::basis::*;
use super::super::scalar::*;
use super::super::coordinate::*;

///
/// True if t is a position that a curve can be split at (within the curve, with
/// a small tolerance at either end)
///
#[inline]
fn valid_split_position<S: Scalar>(t: S) -> bool {
    t+S::epsilon() > S::zero() && t-S::epsilon() < S::one()
}

///
/// Subdivides a quadratic bezier curve at a position, returning the weights of
/// the two component curves
///
pub fn subdivide3<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point) -> ((Point, Point, Point), (Point, Point, Point)) {
    debug_assert!(valid_split_position(t));

    // Weights (from de casteljau)
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);

    // Get the point at which the two curves join
    let p   = de_casteljau2(t, wn1, wn2);

    ((w1, wn1, p), (p, wn2, w3))
}

///
/// Subdivides a cubic bezier curve at a position, returning the weights of the
/// two component curves
///
pub fn subdivide4<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point, w4: Point) -> ((Point, Point, Point, Point), (Point, Point, Point, Point)) {
    debug_assert!(valid_split_position(t));

    // Weights (from de casteljau)
    let wn1     = de_casteljau2(t, w1, w2);
    let wn2     = de_casteljau2(t, w2, w3);
    let wn3     = de_casteljau2(t, w3, w4);

    // Further refine the weights
    let wnn1    = de_casteljau2(t, wn1, wn2);
    let wnn2    = de_casteljau2(t, wn2, wn3);

    // Get the point at which the two curves join
    let p       = de_casteljau2(t, wnn1, wnn2);

    // Curves are built from the weight calculations and the final point
    ((w1, wn1, wnn1, p), (p, wnn2, wn3, w4))
}

///
/// Returns the weights of the section of a quadratic bezier curve before a position
///
pub fn left_subdivide3<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point) -> (Point, Point, Point) {
    debug_assert!(valid_split_position(t));

    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);

    (w1, wn1, de_casteljau2(t, wn1, wn2))
}

///
/// Returns the weights of the section of a quadratic bezier curve after a position
///
pub fn right_subdivide3<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point) -> (Point, Point, Point) {
    debug_assert!(valid_split_position(t));

    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);

    (de_casteljau2(t, wn1, wn2), wn2, w3)
}

///
/// Returns the weights of the section of a cubic bezier curve before a position
///
pub fn left_subdivide4<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point, Point) {
    debug_assert!(valid_split_position(t));

    let wn1     = de_casteljau2(t, w1, w2);
    let wn2     = de_casteljau2(t, w2, w3);
    let wn3     = de_casteljau2(t, w3, w4);

    let wnn1    = de_casteljau2(t, wn1, wn2);
    let wnn2    = de_casteljau2(t, wn2, wn3);

    (w1, wn1, wnn1, de_casteljau2(t, wnn1, wnn2))
}

///
/// Returns the weights of the section of a cubic bezier curve after a position
///
pub fn right_subdivide4<Point: Coordinate>(t: Point::Scalar, w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point, Point) {
    debug_assert!(valid_split_position(t));

    let wn1     = de_casteljau2(t, w1, w2);
    let wn2     = de_casteljau2(t, w2, w3);
    let wn3     = de_casteljau2(t, w3, w4);

    let wnn1    = de_casteljau2(t, wn1, wn2);
    let wnn2    = de_casteljau2(t, wn2, wn3);

    (de_casteljau2(t, wnn1, wnn2), wnn2, wn3, w4)
}

///
/// Returns the weights of the section of a quadratic bezier curve between two positions
///
/// The weights that are returned describe a new curve: evaluating it at 0
/// produces the same point as evaluating the original curve at `t_min`, and
/// evaluating it at 1 the same point as the original at `t_max`.
///
pub fn section3<Point: Coordinate>(t_min: Point::Scalar, t_max: Point::Scalar, w1: Point, w2: Point, w3: Point) -> (Point, Point, Point) {
    debug_assert!(t_min < t_max);

    // Split away the part of the curve after t_max, then renormalize t_min to the remaining section
    let t_renormalized  = t_min/t_max;
    let (w1, w2, w3)    = left_subdivide3(t_max, w1, w2, w3);

    right_subdivide3(t_renormalized, w1, w2, w3)
}

///
/// Returns the weights of the section of a cubic bezier curve between two positions
///
/// The weights that are returned describe a new curve: evaluating it at 0
/// produces the same point as evaluating the original curve at `t_min`, and
/// evaluating it at 1 the same point as the original at `t_max`.
///
pub fn section4<Point: Coordinate>(t_min: Point::Scalar, t_max: Point::Scalar, w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point, Point) {
    debug_assert!(t_min < t_max);

    // Split away the part of the curve after t_max, then renormalize t_min to the remaining section
    let t_renormalized      = t_min/t_max;
    let (w1, w2, w3, w4)    = left_subdivide4(t_max, w1, w2, w3, w4);

    right_subdivide4(t_renormalized, w1, w2, w3, w4)
}

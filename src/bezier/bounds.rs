use roots::{find_roots_linear, find_roots_quadratic, Roots};

use super::basis::*;
use super::coefficients::*;
use super::super::geo::*;
use super::super::scalar::*;
use super::super::coordinate::*;

///
/// Collects the real roots of a polynomial into a vec
///
fn real_roots(roots: Roots<f64>) -> Vec<f64> {
    match roots {
        Roots::No(_)    => vec![],
        Roots::One(r)   => r.to_vec(),
        Roots::Two(r)   => r.to_vec(),
        Roots::Three(r) => r.to_vec(),
        Roots::Four(r)  => r.to_vec()
    }
}

///
/// Finds the tight axis-aligned bounding box of a quadratic bezier curve
///
/// The extremities of the curve are located by solving for the roots of its
/// derivative in each dimension, so this returns the bounds of the curve itself
/// rather than the looser bounds of its control polygon.
///
pub fn bounding_box3<Point: Coordinate, Bounds: BoundingBox<Point=Point>>(w1: Point, w2: Point, w3: Point) -> Bounds {
    let (a, b)      = quadratic_derivative_coefficients(w1, w2, w3);

    // The endpoints are always on the curve, so they seed the bounding box
    let mut bounds  = Bounds::from_min_max(Point::from_smallest_components(w1, w3), Point::from_biggest_components(w1, w3));

    // Grow around the extremities that lie within the curve
    for component_index in 0..Point::len() {
        let a1 = a.get(component_index).as_f64();
        let a0 = b.get(component_index).as_f64();

        for root in real_roots(find_roots_linear(a1, a0)) {
            if root >= 0.0 && root <= 1.0 {
                bounds = bounds.grow_to_include(basis3(Point::Scalar::from_f64(root), w1, w2, w3));
            }
        }
    }

    bounds
}

///
/// Finds the tight axis-aligned bounding box of a cubic bezier curve
///
/// The extremities of the curve are located by solving for the roots of its
/// derivative in each dimension, so this returns the bounds of the curve itself
/// rather than the looser bounds of its control polygon.
///
pub fn bounding_box4<Point: Coordinate, Bounds: BoundingBox<Point=Point>>(w1: Point, w2: Point, w3: Point, w4: Point) -> Bounds {
    let (a, b, c)   = cubic_derivative_coefficients(w1, w2, w3, w4);

    // The endpoints are always on the curve, so they seed the bounding box
    let mut bounds  = Bounds::from_min_max(Point::from_smallest_components(w1, w4), Point::from_biggest_components(w1, w4));

    // Grow around the extremities that lie within the curve
    for component_index in 0..Point::len() {
        let a2 = a.get(component_index).as_f64();
        let a1 = b.get(component_index).as_f64();
        let a0 = c.get(component_index).as_f64();

        for root in real_roots(find_roots_quadratic(a2, a1, a0)) {
            if root >= 0.0 && root <= 1.0 {
                bounds = bounds.grow_to_include(basis4(Point::Scalar::from_f64(root), w1, w2, w3, w4));
            }
        }
    }

    bounds
}

///
/// Finds the position of the cusp on a cubic bezier curve, if it has one
///
/// A cusp is a position where the curve's derivative vanishes in every
/// dimension at once, so the curve comes to a dead stop and leaves a sharp
/// point. This exists when the two dimensions of a 2D curve have a matching
/// derivative root.
///
pub fn find_cusp4<Point: Coordinate+Coordinate2D>(w1: Point, w2: Point, w3: Point, w4: Point) -> Option<Point::Scalar> {
    let (a, b, c)   = cubic_derivative_coefficients(w1, w2, w3, w4);

    let x_roots     = real_roots(find_roots_quadratic(a.x().as_f64(), b.x().as_f64(), c.x().as_f64()));
    let y_roots     = real_roots(find_roots_quadratic(a.y().as_f64(), b.y().as_f64(), c.y().as_f64()));

    let epsilon     = Point::Scalar::epsilon().as_f64() * 3.0;

    for x_root in x_roots.iter() {
        for y_root in y_roots.iter() {
            if f64::abs(x_root - y_root) < epsilon {
                // The derivative is zero in both dimensions at this position
                return Some(Point::Scalar::from_f64(*x_root));
            }
        }
    }

    None
}

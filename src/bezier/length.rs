use super::basis::*;
use super::super::scalar::*;
use super::super::coordinate::*;

/// Number of length samples per weight for curves of arbitrary degree
const SAMPLES_PER_WEIGHT: usize = 10;

///
/// Approximates the length of a circular arc from the length of its chord and
/// the length of a two-section polyline along it
///
/// `d1` is the straight-line distance between the arc's endpoints and `d2` the
/// distance from the start to a point midway along the arc plus the distance
/// from that point to the end. For shallow arcs, `d2 + (d2-d1)/3` is very close
/// to the true arc length.
///
#[inline]
pub fn circle_arc_approx<S: Scalar>(d1: S, d2: S) -> S {
    d2 + (d2-d1)*S::from_f64(1.0/3.0)
}

///
/// Returns the length of a line
///
#[inline]
pub fn length2<Point: Coordinate>(w1: Point, w2: Point) -> Point::Scalar {
    w1.distance_to(&w2)
}

///
/// Measures the length of a quadratic bezier curve
///
/// The curve is sampled at a fixed number of positions (chosen for the
/// precision of the scalar type), accumulating a circular arc approximation
/// across every window of three samples.
///
pub fn length3<Point: Coordinate>(w1: Point, w2: Point, w3: Point) -> Point::Scalar {
    arc_length_samples(Point::Scalar::QUAD_LENGTH_SAMPLES, w1, |t| basis3(t, w1, w2, w3))
}

///
/// Measures the length of a cubic bezier curve
///
/// The curve is sampled at a fixed number of positions (chosen for the
/// precision of the scalar type), accumulating a circular arc approximation
/// across every window of three samples.
///
pub fn length4<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> Point::Scalar {
    arc_length_samples(Point::Scalar::CUBIC_LENGTH_SAMPLES, w1, |t| basis4(t, w1, w2, w3, w4))
}

///
/// Measures the length of a bezier curve with an arbitrary number of weights
///
/// Zero or one weights describe a point, which has no length. Curves with more
/// than four weights are sampled in proportion to their degree.
///
pub fn length<Point: Coordinate>(points: &[Point]) -> Point::Scalar {
    match points.len() {
        0 | 1   => Point::Scalar::zero(),
        2       => length2(points[0], points[1]),
        3       => length3(points[0], points[1], points[2]),
        4       => length4(points[0], points[1], points[2], points[3]),
        count   => {
            let num_samples = (count-1)*SAMPLES_PER_WEIGHT + 1;

            arc_length_samples(num_samples, points[0], |t| de_casteljau(t, points))
        }
    }
}

///
/// Sums arc approximations over windows of three samples of a curve
///
/// `num_samples` must be odd so that the windows tile the curve exactly: each
/// window spans two sample steps, measuring the chord across the window against
/// the polyline through the middle sample.
///
fn arc_length_samples<Point: Coordinate>(num_samples: usize, start: Point, evaluate: impl Fn(Point::Scalar) -> Point) -> Point::Scalar {
    let num_steps   = Point::Scalar::from_f64((num_samples-1) as f64);
    let delta       = Point::Scalar::one()/num_steps;
    let end         = delta * (num_steps - Point::Scalar::from_f64(0.5));

    let mut length  = Point::Scalar::zero();
    let mut prior   = start;
    let mut t       = delta;

    while t < end {
        // Each window covers two steps: the middle sample and the far end
        let mid     = evaluate(t);
        t           = t + delta;
        let post    = evaluate(t);
        t           = t + delta;

        let chord   = prior.distance_to(&post);
        let line    = prior.distance_to(&mid) + mid.distance_to(&post);

        length      = length + circle_arc_approx(chord, line);
        prior       = post;
    }

    length
}

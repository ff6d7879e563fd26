use super::basis::*;
use super::through::*;
use super::subdivide::*;
use super::derivative::*;
use super::super::coordinate::*;

/// Flatness threshold for offsetting quadratic curves
const QUAD_FLATNESS: f64        = 0.921;

/// Flatness threshold for offsetting cubic curves
const CUBIC_FLATNESS: f64       = 0.93;

/// Flatness threshold for tapered offsets (the taper varies along each section,
/// so sections need to be flatter)
const TAPERED_FLATNESS: f64     = 0.97;

/// Number of times a section can be halved before we give up on flattening it
const MAX_SUBDIVISIONS: usize   = 64;

///
/// Offsets a quadratic bezier curve by a fixed distance, perpendicular to the
/// curve
///
/// The curve is walked from start to end, splitting it into sections that are
/// flat enough to be moved sideways as a single curve. Each section appends the
/// three weights of a new quadratic curve to `output`, so the result can be
/// read back in groups of three points. A positive `delta` offsets to the left
/// of the direction of travel and a negative one to the right.
///
/// The result is an approximation, at its best when `delta` is small next to
/// the size of the curve.
///
pub fn offset3<Point: Coordinate+Coordinate2D>(w1: Point, w2: Point, w3: Point, delta: Point::Scalar, output: &mut Vec<Point>) {
    let half        = Point::Scalar::from_f64(0.5);
    let flatness    = Point::Scalar::from_f64(QUAD_FLATNESS);

    // Section being offset, positioned at start..range on the original curve
    let mut base    = (w1, w2, w3);
    let mut start   = Point::Scalar::zero();
    let mut range   = Point::Scalar::one();

    let mut subdivisions = 0;

    while start < range {
        let (b1, b2, b3)    = base;

        // Unit vectors along the two legs of the control polygon
        let leg1            = (b2-b1).to_unit_vector();
        let leg2            = (b3-b2).to_unit_vector();

        if leg1.dot(&leg2) < flatness {
            // Not flat enough: halve the section and test again
            debug_assert!(subdivisions < MAX_SUBDIVISIONS);
            subdivisions    += 1;

            range           = (start+range)*half;
            base            = left_subdivide3(half, b1, b2, b3);
        } else {
            // Normals at either end of the section, plus the averaged normal at the midpoint
            let n1          = rotate_anticlockwise(leg1);
            let n2          = rotate_anticlockwise(leg2);
            let mid_normal  = (n1+n2).to_unit_vector();

            let offset_start    = b1 + n1*delta;
            let offset_mid      = basis3(half, b1, b2, b3) + mid_normal*delta;
            let offset_end      = b3 + n2*delta;

            output.push(offset_start);
            output.push(curve_through3(offset_start, offset_mid, offset_end));
            output.push(offset_end);

            if range < Point::Scalar::one() {
                // Move on to the remainder of the original curve
                start           = range;
                range           = Point::Scalar::one();
                base            = right_subdivide3(start, w1, w2, w3);
                subdivisions    = 0;
            } else {
                break;
            }
        }
    }
}

///
/// Offsets a cubic bezier curve by a fixed distance, perpendicular to the curve
///
/// Works the same way as `offset3`, except that each section appends the four
/// weights of a cubic curve to `output`. A positive `delta` offsets to the left
/// of the direction of travel and a negative one to the right.
///
pub fn offset4<Point: Coordinate+Coordinate2D>(w1: Point, w2: Point, w3: Point, w4: Point, delta: Point::Scalar, output: &mut Vec<Point>) {
    let half        = Point::Scalar::from_f64(0.5);
    let one_third   = Point::Scalar::from_f64(1.0/3.0);
    let two_thirds  = Point::Scalar::from_f64(2.0/3.0);
    let flatness    = Point::Scalar::from_f64(CUBIC_FLATNESS);

    // Cubic curves are rarely flat enough to offset whole, so begin with the first half
    let mut base    = left_subdivide4(half, w1, w2, w3, w4);
    let mut start   = Point::Scalar::zero();
    let mut range   = half;

    let mut subdivisions = 0;

    while start < range {
        let (b1, b2, b3, b4) = base;

        // Unit vectors along the first two legs of the control polygon
        let leg1            = (b2-b1).to_unit_vector();
        let leg2            = (b3-b2).to_unit_vector();

        if leg1.dot(&leg2) < flatness {
            // Not flat enough: halve the section and test again
            debug_assert!(subdivisions < MAX_SUBDIVISIONS);
            subdivisions    += 1;

            range           = (start+range)*half;
            base            = left_subdivide4(half, b1, b2, b3, b4);
        } else {
            // Normals at the ends of each leg, with averaged normals a third of the way in from each end
            let n1          = rotate_anticlockwise(leg1);
            let n2          = rotate_anticlockwise(leg2);
            let n3          = rotate_anticlockwise((b4-b3).to_unit_vector());

            let mid_normal1 = (n1+n2).to_unit_vector();
            let mid_normal2 = (n3+n2).to_unit_vector();

            let offset_start    = b1 + n1*delta;
            let offset_mid1     = basis4(one_third, b1, b2, b3, b4) + mid_normal1*delta;
            let offset_mid2     = basis4(two_thirds, b1, b2, b3, b4) + mid_normal2*delta;
            let offset_end      = b4 + n3*delta;

            let (mid_w2, mid_w3) = curve_through4(offset_start, offset_mid1, offset_mid2, offset_end);

            output.push(offset_start);
            output.push(mid_w2);
            output.push(mid_w3);
            output.push(offset_end);

            if range < Point::Scalar::one() {
                // Move on to the remainder of the original curve
                start           = range;
                range           = Point::Scalar::one();
                base            = right_subdivide4(start, w1, w2, w3, w4);
                subdivisions    = 0;
            } else {
                break;
            }
        }
    }
}

///
/// Offsets a cubic bezier curve by a distance that varies along the curve
///
/// The offset distance is itself a cubic bezier curve, given by the four taper
/// weights: the first weight is the distance at the start of the curve and the
/// last the distance at the end. The taper is subdivided in lockstep with the
/// curve, so every section is offset by the distances the taper takes over that
/// section. As with `offset4`, each section appends the four weights of a cubic
/// curve to `output`.
///
pub fn tapered_offset4<Point>(w1: Point, w2: Point, w3: Point, w4: Point, taper: [Point::Scalar; 4], output: &mut Vec<Point>)
where
    Point:          Coordinate+Coordinate2D,
    Point::Scalar:  Coordinate<Scalar=Point::Scalar>,
{
    let half        = Point::Scalar::from_f64(0.5);
    let one_third   = Point::Scalar::from_f64(1.0/3.0);
    let two_thirds  = Point::Scalar::from_f64(2.0/3.0);
    let flatness    = Point::Scalar::from_f64(TAPERED_FLATNESS);

    let [t1, t2, t3, t4] = taper;

    // The curve and the taper are split at the same positions so they stay in step
    let mut base        = left_subdivide4(half, w1, w2, w3, w4);
    let mut taper_base  = left_subdivide4(half, t1, t2, t3, t4);
    let mut start       = Point::Scalar::zero();
    let mut range       = half;

    let mut subdivisions = 0;

    while start < range {
        let (b1, b2, b3, b4)     = base;
        let (tb1, tb2, tb3, tb4) = taper_base;

        // Unit vectors along the first two legs of the control polygon
        let leg1            = (b2-b1).to_unit_vector();
        let leg2            = (b3-b2).to_unit_vector();

        if leg1.dot(&leg2) < flatness {
            // Not flat enough: halve the section and test again
            debug_assert!(subdivisions < MAX_SUBDIVISIONS);
            subdivisions    += 1;

            range           = (start+range)*half;
            base            = left_subdivide4(half, b1, b2, b3, b4);
            taper_base      = left_subdivide4(half, tb1, tb2, tb3, tb4);
        } else {
            // Normals at the ends of each leg, with averaged normals a third of the way in from each end
            let n1          = rotate_anticlockwise(leg1);
            let n2          = rotate_anticlockwise(leg2);
            let n3          = rotate_anticlockwise((b4-b3).to_unit_vector());

            let mid_normal1 = (n1+n2).to_unit_vector();
            let mid_normal2 = (n3+n2).to_unit_vector();

            // Offset distances for this section, read from the matching part of the taper
            let taper_mid1  = basis4(one_third, tb1, tb2, tb3, tb4);
            let taper_mid2  = basis4(two_thirds, tb1, tb2, tb3, tb4);

            let offset_start    = b1 + n1*tb1;
            let offset_mid1     = basis4(one_third, b1, b2, b3, b4) + mid_normal1*taper_mid1;
            let offset_mid2     = basis4(two_thirds, b1, b2, b3, b4) + mid_normal2*taper_mid2;
            let offset_end      = b4 + n3*tb4;

            let (mid_w2, mid_w3) = curve_through4(offset_start, offset_mid1, offset_mid2, offset_end);

            output.push(offset_start);
            output.push(mid_w2);
            output.push(mid_w3);
            output.push(offset_end);

            if range < Point::Scalar::one() {
                // Move on to the remainder of the original curve and taper
                start           = range;
                range           = Point::Scalar::one();
                base            = right_subdivide4(start, w1, w2, w3, w4);
                taper_base      = right_subdivide4(start, t1, t2, t3, t4);
                subdivisions    = 0;
            } else {
                break;
            }
        }
    }
}

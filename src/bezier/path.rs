use super::basis::*;
use super::curve::*;
use super::super::geo::*;

///
/// A path that passes smoothly through a series of points
///
/// Each group of four neighbouring points describes a cubic bezier segment, in
/// the manner of a Catmull-Rom spline: neighbouring segments share their join
/// point, so the path stays continuous however the points are placed. A closed
/// path wraps around to its first point; an open path begins at its first
/// point and ends at its last.
///
/// Paths with fewer than four points do not have any segments.
///
#[derive(Clone, PartialEq, Debug)]
pub struct SplinePath<Point: Coordinate> {
    /// The points that this path passes through
    pub points: Vec<Point>,

    /// True if this path wraps around to its first point
    pub closed: bool
}

impl<Point: Coordinate> Geo for SplinePath<Point> {
    type Point = Point;
}

impl<Point: Coordinate> SplinePath<Point> {
    ///
    /// Creates a path passing through the specified points
    ///
    pub fn from_points(points: Vec<Point>, closed: bool) -> SplinePath<Point> {
        SplinePath { points, closed }
    }

    ///
    /// Adds a point to the end of this path
    ///
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    ///
    /// True if this path wraps around to its first point
    ///
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    ///
    /// The number of cubic segments that make up this path
    ///
    pub fn num_segments(&self) -> usize {
        if self.points.len() > 3 {
            if self.closed {
                self.points.len()
            } else {
                self.points.len()-2
            }
        } else {
            0
        }
    }

    ///
    /// The segment index and the position within that segment corresponding to
    /// a position along the whole path
    ///
    /// Positions outside the 0 to 1 range are clamped, and a position of 1
    /// maps to the very end of the final segment.
    ///
    pub fn index_at(&self, t: Point::Scalar) -> (usize, Point::Scalar) {
        let t               = t.max(Point::Scalar::zero()).min(Point::Scalar::one());
        let num_segments    = self.num_segments();

        let scaled          = Point::Scalar::from_f64(num_segments as f64)*t;
        let fraction        = scaled - scaled.floor();
        let segment         = scaled.floor().as_f64() as usize;

        if segment >= num_segments && num_segments > 0 {
            (num_segments-1, Point::Scalar::one())
        } else {
            (segment, fraction)
        }
    }

    ///
    /// The cubic bezier curve for the segment at the specified index
    ///
    /// The segment weights are derived from the window of four points around
    /// the segment and the window one point further along: the anchors are the
    /// average of each window evaluated a third and two-thirds of the way
    /// along, which is what makes neighbouring segments join exactly.
    ///
    pub fn segment_at(&self, index: usize) -> CubicBezier<Point> {
        debug_assert!(index < self.num_segments());

        let half        = Point::Scalar::from_f64(0.5);
        let one_third   = Point::Scalar::from_f64(1.0/3.0);
        let two_thirds  = Point::Scalar::from_f64(2.0/3.0);

        let points      = &self.points;
        let num_points  = points.len();

        if self.closed {
            let (a1, a2, a3, a4) = (points[(index+num_points-1)%num_points], points[index], points[(index+1)%num_points], points[(index+2)%num_points]);
            let (b1, b2, b3, b4) = (points[index], points[(index+1)%num_points], points[(index+2)%num_points], points[(index+3)%num_points]);

            let a_first     = basis4(one_third, a1, a2, a3, a4);
            let a_second    = basis4(two_thirds, a1, a2, a3, a4);
            let b_first     = basis4(one_third, b1, b2, b3, b4);
            let b_second    = basis4(two_thirds, b1, b2, b3, b4);

            CubicBezier::new((a_first+a_second)*half, a_second, b_first, (b_first+b_second)*half)
        } else if index == 0 {
            // There is no window before the first point, so the path starts there instead
            let start       = points[0];
            let control1    = basis2(half, start, points[1]);

            let b_first     = basis4(one_third, points[0], points[1], points[2], points[3]);
            let b_second    = basis4(two_thirds, points[0], points[1], points[2], points[3]);

            CubicBezier::new(start, control1, b_first, (b_first+b_second)*half)
        } else if index == num_points-3 {
            // Similarly there is no window after the last point
            let a_first     = basis4(one_third, points[num_points-4], points[num_points-3], points[num_points-2], points[num_points-1]);
            let a_second    = basis4(two_thirds, points[num_points-4], points[num_points-3], points[num_points-2], points[num_points-1]);

            let end         = points[num_points-1];
            let control2    = basis2(half, end, points[num_points-2]);

            CubicBezier::new((a_first+a_second)*half, a_second, control2, end)
        } else {
            let (a1, a2, a3, a4) = (points[index-1], points[index], points[index+1], points[index+2]);
            let (b1, b2, b3, b4) = (points[index], points[index+1], points[index+2], points[index+3]);

            let a_first     = basis4(one_third, a1, a2, a3, a4);
            let a_second    = basis4(two_thirds, a1, a2, a3, a4);
            let b_first     = basis4(one_third, b1, b2, b3, b4);
            let b_second    = basis4(two_thirds, b1, b2, b3, b4);

            CubicBezier::new((a_first+a_second)*half, a_second, b_first, (b_first+b_second)*half)
        }
    }

    ///
    /// Iterator over the segments in this path, in order
    ///
    pub fn segments<'a>(&'a self) -> impl 'a+Iterator<Item=CubicBezier<Point>> {
        (0..self.num_segments()).map(move |index| self.segment_at(index))
    }

    ///
    /// The point on this path at position t, where 0 is the start of the path
    /// and 1 is the end
    ///
    pub fn point_at_pos(&self, t: Point::Scalar) -> Point {
        let (segment, t) = self.index_at(t);

        self.segment_at(segment).point_at_pos(t)
    }

    ///
    /// The total estimated arc length of this path
    ///
    pub fn length(&self) -> Point::Scalar {
        self.segments()
            .map(|segment| segment.length())
            .fold(Point::Scalar::zero(), |total, length| total+length)
    }
}

use flo_bezier::*;
use flo_bezier::bezier;

mod derivative;
mod length;
mod offset;

pub fn approx_equal(a: f64, b: f64) -> bool {
    f64::abs(a-b) < 0.0001
}

#[test]
fn read_curve_weights() {
    let curve = bezier::CubicBezier::new(Coord2(1.0, 1.0), Coord2(2.0, 2.0), Coord2(3.0, 3.0), Coord2(4.0, 4.0));

    assert!(curve.start_point() == Coord2(1.0, 1.0));
    assert!(curve.end_point() == Coord2(4.0, 4.0));
    assert!(curve[1] == Coord2(2.0, 2.0));
    assert!(curve[2] == Coord2(3.0, 3.0));
}

#[test]
fn read_curve_points() {
    let curve = bezier::CubicBezier::new(Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 4.0), Coord2(2.0, 2.0));

    for x in 0..100 {
        let t = (x as f64)/100.0;

        let point           = curve.point_at_pos(t);
        let another_point   = bezier::de_casteljau4(t, Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 4.0), Coord2(2.0, 2.0));

        assert!(point.distance_to(&another_point) < 0.0001);
    }
}

#[test]
fn change_curve_weights() {
    let mut curve = bezier::QuadBezier::new(Coord2(1.0, 1.0), Coord2(2.0, 2.0), Coord2(3.0, 3.0));

    curve[1] = Coord2(4.0, 4.0);

    assert!(curve.points[1] == Coord2(4.0, 4.0));
    assert!(curve.start_point() == Coord2(1.0, 1.0));
}

#[test]
fn quad_curve_length_matches_weights() {
    let curve = bezier::QuadBezier::new(Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(4.0, 2.0));

    assert!(approx_equal(curve.length(), bezier::length3(Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(4.0, 2.0))));
}

#[test]
fn curve_derivative_matches_weight_functions() {
    let (w1, w2, w3)    = (Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(4.0, 2.0));
    let quad            = bezier::QuadBezier::new(w1, w2, w3);
    let cubic           = bezier::CubicBezier::new(w1, w2, w3, Coord2(5.0, 6.0));

    assert!(quad.derivative() == bezier::derivative3(w1, w2, w3));
    assert!(cubic.derivative() == bezier::derivative4(w1, w2, w3, Coord2(5.0, 6.0)));
}

#[test]
fn curve_tangent_and_normal_match_weight_functions() {
    let (w1, w2, w3, w4)    = (Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(4.0, 2.0), Coord2(5.0, 6.0));
    let quad                = bezier::QuadBezier::new(w1, w2, w3);
    let cubic               = bezier::CubicBezier::new(w1, w2, w3, w4);

    assert!(quad.tangent_at(0.5) == bezier::tangent3(0.5, w1, w2, w3));
    assert!(quad.normal_at(0.5) == bezier::normal3(0.5, w1, w2, w3));
    assert!(cubic.tangent_at(0.5) == bezier::tangent4(0.5, w1, w2, w3, w4));
    assert!(cubic.normal_at(0.5) == bezier::normal4(0.5, w1, w2, w3, w4));
}

use super::*;

use flo_bezier::bezier;

#[test]
fn cubic_derivative_weights() {
    assert!(bezier::derivative4(1.0, 2.0, 4.0, 8.0) == (3.0, 6.0, 12.0));
}

#[test]
fn quad_derivative_weights() {
    assert!(bezier::derivative3(1.0, 5.0, 2.0) == (8.0, -6.0));
}

#[test]
fn line_derivative_weight() {
    assert!(bezier::derivative2(1.0, 5.0) == 4.0);
}

#[test]
fn cubic_derivative_matches_finite_differences() {
    let (w1, w2, w3, w4) = (Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(4.0, 2.0), Coord2(5.0, 6.0));

    for x in 1..100 {
        let t = (x as f64)/100.0;
        let h = 1e-5;

        let ahead       = bezier::basis4(t+h, w1, w2, w3, w4);
        let behind      = bezier::basis4(t-h, w1, w2, w3, w4);
        let estimate    = (ahead-behind)*(1.0/(2.0*h));
        let derivative  = bezier::derivative_at4(t, w1, w2, w3, w4);

        assert!(estimate.distance_to(&derivative) < 0.001);
    }
}

#[test]
fn quad_derivative_matches_finite_differences() {
    let (w1, w2, w3) = (Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(4.0, 2.0));

    for x in 1..100 {
        let t = (x as f64)/100.0;
        let h = 1e-5;

        let ahead       = bezier::basis3(t+h, w1, w2, w3);
        let behind      = bezier::basis3(t-h, w1, w2, w3);
        let estimate    = (ahead-behind)*(1.0/(2.0*h));
        let derivative  = bezier::derivative_at3(t, w1, w2, w3);

        assert!(estimate.distance_to(&derivative) < 0.001);
    }
}

#[test]
fn tangents_are_unit_length() {
    let (w1, w2, w3, w4) = (Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(4.0, 2.0), Coord2(5.0, 6.0));

    for x in 0..=100 {
        let t       = (x as f64)/100.0;
        let tangent = bezier::tangent4(t, w1, w2, w3, w4);

        assert!(f64::abs(tangent.magnitude()-1.0) < 0.0001);
    }
}

#[test]
fn tangent_at_start_points_along_first_leg() {
    let tangent     = bezier::tangent3(0.0, Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 0.0));
    let expected    = Coord2(1.0, 1.0).to_unit_vector();

    assert!(tangent.distance_to(&expected) < 0.0001);
}

#[test]
fn tangent_of_slice_matches_tangent_of_curve() {
    let (w1, w2, w3, w4) = (Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(4.0, 2.0), Coord2(5.0, 6.0));

    for x in 0..=100 {
        let t = (x as f64)/100.0;

        let from_slice  = bezier::tangent(t, &[w1, w2, w3, w4]);
        let from_curve  = bezier::tangent4(t, w1, w2, w3, w4);

        assert!(from_slice.distance_to(&from_curve) < 0.0001);
    }
}

#[test]
fn higher_degree_tangent_matches_finite_differences() {
    let points = [Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, -1.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)];

    for x in 1..100 {
        let t = (x as f64)/100.0;
        let h = 1e-5;

        let ahead       = bezier::de_casteljau(t+h, &points);
        let behind      = bezier::de_casteljau(t-h, &points);
        let direction   = (ahead-behind).to_unit_vector();
        let tangent     = bezier::tangent(t, &points);

        assert!(tangent.distance_to(&direction) < 0.001);
    }
}

#[test]
fn tangent_of_point_is_origin() {
    assert!(bezier::tangent(0.5, &[Coord2(1.0, 2.0)]) == Coord2(0.0, 0.0));
}

#[test]
fn rotate_anticlockwise_quarter_turn() {
    assert!(bezier::rotate_anticlockwise(Coord2(1.0, 0.0)) == Coord2(0.0, 1.0));
    assert!(bezier::rotate_anticlockwise(Coord2(0.0, 1.0)) == Coord2(-1.0, 0.0));
}

#[test]
fn normal_is_perpendicular_to_tangent() {
    let (w1, w2, w3, w4) = (Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(4.0, 2.0), Coord2(5.0, 6.0));

    for x in 0..=100 {
        let t       = (x as f64)/100.0;

        let tangent = bezier::tangent4(t, w1, w2, w3, w4);
        let normal  = bezier::normal4(t, w1, w2, w3, w4);

        assert!(f64::abs(normal.dot(&tangent)) < 0.0001);
        assert!(f64::abs(normal.magnitude()-1.0) < 0.0001);
    }
}

#[test]
fn normal_points_left_of_travel() {
    // Moving along +x, the left-hand side is +y
    let normal = bezier::normal2(0.5, Coord2(0.0, 0.0), Coord2(4.0, 0.0));

    assert!(normal.distance_to(&Coord2(0.0, 1.0)) < 0.0001);
}

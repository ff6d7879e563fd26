use super::*;

use flo_bezier::bezier;

#[test]
fn line_length_is_distance() {
    assert!(bezier::length2(Coord2(0.0, 0.0), Coord2(3.0, 4.0)) == 5.0);
}

#[test]
fn known_cubic_length() {
    // The arc length of this curve works out to exactly 4
    let length = bezier::length4(Coord2(-1.0, -1.0), Coord2(-1.0, 1.0), Coord2(1.0, 1.0), Coord2(1.0, -1.0));

    assert!(f64::abs(length-4.0) < 1e-6);
}

#[test]
fn known_cubic_length_single_precision() {
    let length = bezier::length4(Coord2(-1.0f32, -1.0), Coord2(-1.0, 1.0), Coord2(1.0, 1.0), Coord2(1.0, -1.0));

    assert!(f32::abs(length-4.0) < 1e-3);
}

#[test]
fn quad_length_matches_polyline() {
    let (w1, w2, w3) = (Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 0.0));

    let mut polyline    = 0.0;
    let mut last        = w1;
    for x in 1..=1000 {
        let next    = bezier::basis3((x as f64)/1000.0, w1, w2, w3);
        polyline    += last.distance_to(&next);
        last        = next;
    }

    assert!(f64::abs(bezier::length3(w1, w2, w3) - polyline) < 0.001);
}

#[test]
fn length_is_at_least_the_chord() {
    let (w1, w2, w3)        = (Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 0.0));
    let (c1, c2, c3, c4)    = (Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0), Coord2(3.0, 0.0));

    assert!(bezier::length3(w1, w2, w3) >= w1.distance_to(&w3));
    assert!(bezier::length4(c1, c2, c3, c4) >= c1.distance_to(&c4));
}

#[test]
fn straight_curve_length_is_distance() {
    let length = bezier::length4(Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 2.0), Coord2(3.0, 3.0));

    assert!(f64::abs(length - Coord2(0.0, 0.0).distance_to(&Coord2(3.0, 3.0))) < 1e-6);
}

#[test]
fn length_of_point_is_zero() {
    assert!(bezier::length::<Coord2>(&[]) == 0.0);
    assert!(bezier::length(&[Coord2(2.0, 3.0)]) == 0.0);
}

#[test]
fn slice_length_uses_degree() {
    let points = [Coord2(0.0, 0.0), Coord2(3.0, 4.0)];

    assert!(bezier::length(&points) == 5.0);
}

#[test]
fn higher_degree_length_matches_polyline() {
    let points = [Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, -1.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)];

    let mut polyline    = 0.0;
    let mut last        = points[0];
    for x in 1..=1000 {
        let next    = bezier::de_casteljau((x as f64)/1000.0, &points);
        polyline    += last.distance_to(&next);
        last        = next;
    }

    assert!(f64::abs(bezier::length(&points) - polyline) < 0.001);
}

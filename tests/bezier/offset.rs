use super::*;

use flo_bezier::bezier;

fn distance_to_quad(point: Coord2, w1: Coord2, w2: Coord2, w3: Coord2) -> f64 {
    (0..=1000)
        .map(|x| bezier::basis3((x as f64)/1000.0, w1, w2, w3))
        .map(|curve_point| point.distance_to(&curve_point))
        .fold(f64::MAX, f64::min)
}

fn distance_to_cubic(point: Coord2, w1: Coord2, w2: Coord2, w3: Coord2, w4: Coord2) -> f64 {
    (0..=1000)
        .map(|x| bezier::basis4((x as f64)/1000.0, w1, w2, w3, w4))
        .map(|curve_point| point.distance_to(&curve_point))
        .fold(f64::MAX, f64::min)
}

#[test]
fn quad_offset_stays_at_distance() {
    let (w1, w2, w3)    = (Coord2(0.0, 0.0), Coord2(1.0, 0.4), Coord2(2.0, 0.0));
    let mut offset      = vec![];

    bezier::offset3(w1, w2, w3, 0.25, &mut offset);

    assert!(offset.len() > 0);
    assert!(offset.len() % 3 == 0);

    for section in offset.chunks(3) {
        for x in 0..=10 {
            let t       = (x as f64)/10.0;
            let point   = bezier::basis3(t, section[0], section[1], section[2]);

            assert!(f64::abs(distance_to_quad(point, w1, w2, w3) - 0.25) < 0.01);
        }
    }
}

#[test]
fn quad_offset_starts_and_ends_on_normal() {
    let (w1, w2, w3)    = (Coord2(0.0, 0.0), Coord2(1.0, 0.4), Coord2(2.0, 0.0));
    let mut offset      = vec![];

    bezier::offset3(w1, w2, w3, 0.25, &mut offset);

    let expected_start  = w1 + bezier::normal3(0.0, w1, w2, w3)*0.25;
    let expected_end    = w3 + bezier::normal3(1.0, w1, w2, w3)*0.25;

    assert!(offset[0].distance_to(&expected_start) < 1e-6);
    assert!(offset[offset.len()-1].distance_to(&expected_end) < 1e-6);
}

#[test]
fn negative_delta_offsets_to_the_right() {
    let (w1, w2, w3)    = (Coord2(0.0, 0.0), Coord2(1.0, 0.4), Coord2(2.0, 0.0));
    let mut offset      = vec![];

    bezier::offset3(w1, w2, w3, -0.25, &mut offset);

    // The curve travels along +x, so a negative delta puts the offset below it
    assert!(offset[0].y() < w1.y());
    assert!(f64::abs(distance_to_quad(offset[0], w1, w2, w3) - 0.25) < 0.01);
}

#[test]
fn cubic_offset_stays_at_distance() {
    let (w1, w2, w3, w4)    = (Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0), Coord2(3.0, 0.0));
    let mut offset          = vec![];

    bezier::offset4(w1, w2, w3, w4, 0.5, &mut offset);

    assert!(offset.len() > 0);
    assert!(offset.len() % 4 == 0);

    for section in offset.chunks(4) {
        for x in 0..=10 {
            let t       = (x as f64)/10.0;
            let point   = bezier::basis4(t, section[0], section[1], section[2], section[3]);

            assert!(f64::abs(distance_to_cubic(point, w1, w2, w3, w4) - 0.5) < 0.05);
        }
    }
}

#[test]
fn cubic_offset_starts_and_ends_on_normal() {
    let (w1, w2, w3, w4)    = (Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0), Coord2(3.0, 0.0));
    let mut offset          = vec![];

    bezier::offset4(w1, w2, w3, w4, 0.5, &mut offset);

    let expected_start  = w1 + bezier::normal4(0.0, w1, w2, w3, w4)*0.5;
    let expected_end    = w4 + bezier::normal4(1.0, w1, w2, w3, w4)*0.5;

    assert!(offset[0].distance_to(&expected_start) < 1e-6);
    assert!(offset[offset.len()-1].distance_to(&expected_end) < 1e-6);
}

#[test]
fn zero_taper_rebuilds_curve() {
    let (w1, w2, w3, w4)    = (Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0), Coord2(3.0, 0.0));
    let mut offset          = vec![];

    bezier::tapered_offset4(w1, w2, w3, w4, [0.0, 0.0, 0.0, 0.0], &mut offset);

    assert!(offset.len() % 4 == 0);
    assert!(offset[0].distance_to(&w1) < 1e-9);
    assert!(offset[offset.len()-1].distance_to(&w4) < 1e-9);

    // Every section lies along the original curve
    for section in offset.chunks(4) {
        for x in 0..=10 {
            let t       = (x as f64)/10.0;
            let point   = bezier::basis4(t, section[0], section[1], section[2], section[3]);

            assert!(distance_to_cubic(point, w1, w2, w3, w4) < 0.01);
        }
    }

    // Neighbouring sections join exactly
    let sections = offset.chunks(4).collect::<Vec<_>>();
    for index in 0..sections.len()-1 {
        assert!(sections[index][3].distance_to(&sections[index+1][0]) < 1e-9);
    }
}

#[test]
fn taper_widens_along_curve() {
    let (w1, w2, w3, w4)    = (Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0), Coord2(3.0, 0.0));
    let mut offset          = vec![];

    bezier::tapered_offset4(w1, w2, w3, w4, [0.0, 0.5/3.0, 1.0/3.0, 0.5], &mut offset);

    assert!(offset.len() % 4 == 0);

    // The taper starts at 0, so the offset starts on the curve itself
    assert!(offset[0].distance_to(&w1) < 1e-9);

    // It finishes at the full distance of 0.5
    let expected_end = w4 + bezier::normal4(1.0, w1, w2, w3, w4)*0.5;
    assert!(offset[offset.len()-1].distance_to(&expected_end) < 1e-6);

    // Nothing strays further than the widest part of the taper
    for section in offset.chunks(4) {
        for x in 0..=10 {
            let t       = (x as f64)/10.0;
            let point   = bezier::basis4(t, section[0], section[1], section[2], section[3]);

            assert!(distance_to_cubic(point, w1, w2, w3, w4) < 0.55);
        }
    }
}

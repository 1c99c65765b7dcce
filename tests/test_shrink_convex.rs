use straight_skeleton::core::traits::FuzzyEq;
use straight_skeleton::{assert_fuzzy_eq, initialize_ring_set, polygon, shrink, shrink_polygon, Vector2};

#[test]
fn square_offsets_to_smaller_square() {
    let square = polygon![(-2.0, 2.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0)];
    let rings = shrink_polygon(&square, 0.5).unwrap();

    assert_eq!(rings.len(), 1);
    let ring = &rings[0];
    assert_eq!(ring.len(), 4);
    assert_fuzzy_eq!(ring[0], Vector2::new(-1.5, 1.5));
    assert_fuzzy_eq!(ring[1], Vector2::new(-1.5, -1.5));
    assert_fuzzy_eq!(ring[2], Vector2::new(1.5, -1.5));
    assert_fuzzy_eq!(ring[3], Vector2::new(1.5, 1.5));
}

#[test]
fn square_collapses_at_inradius() {
    let square = polygon![(-2.0, 2.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0)];
    let rings = shrink_polygon(&square, 2.0).unwrap();

    // the whole boundary meets at the center
    assert_eq!(rings.len(), 1);
    for p in rings[0].iter() {
        assert_fuzzy_eq!(*p, Vector2::new(0.0, 0.0));
    }
}

#[test]
fn pentagon_shrinks_without_events() {
    // every detected event lies farther than the half unit offset, so the
    // whole ring shifts along its bisectors in one step
    let pentagon = polygon![(-2.0, 2.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (0.0, 4.0)];
    let rings = shrink_polygon(&pentagon, 0.5).unwrap();

    assert_eq!(rings.len(), 1);
    let ring = &rings[0];
    assert_eq!(ring.len(), 5);

    let s = 2.0f64.sqrt();
    let shoulder_y = 2.0 - (s - 1.0) / 2.0;
    assert_fuzzy_eq!(ring[0], Vector2::new(-1.5, shoulder_y));
    assert_fuzzy_eq!(ring[1], Vector2::new(-1.5, -1.5));
    assert_fuzzy_eq!(ring[2], Vector2::new(1.5, -1.5));
    assert_fuzzy_eq!(ring[3], Vector2::new(1.5, shoulder_y));
    assert_fuzzy_eq!(ring[4], Vector2::new(0.0, 4.0 - s / 2.0));

    // every vertex pulled toward the centroid
    let centroid = Vector2::new(0.0, 0.8);
    let pentagon_pts = polygon![(-2.0, 2.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (0.0, 4.0)];
    for (out, inp) in ring.iter().zip(pentagon_pts) {
        assert!((*out - centroid).length() < (inp - centroid).length());
    }
}

#[test]
fn trapezoid_top_edge_collapses_before_budget_runs_out() {
    // the short top edge collapses at offset 1.0, merging two vertices into
    // one; the resulting triangle then consumes the leftover 0.2
    let trapezoid = polygon![(-3.0, 0.0), (3.0, 0.0), (1.0, 2.0), (-1.0, 2.0)];
    let rings = shrink_polygon(&trapezoid, 1.2).unwrap();

    assert_eq!(rings.len(), 1);
    let ring = &rings[0];
    assert_eq!(ring.len(), 3);

    let s = 2.0f64.sqrt();
    assert_fuzzy_eq!(ring[0], Vector2::new(1.2 * s - 1.8, 1.2));
    assert_fuzzy_eq!(ring[1], Vector2::new(1.8 - 1.2 * s, 1.2));
    assert_fuzzy_eq!(ring[2], Vector2::new(0.0, 3.0 - 1.2 * s));
}

#[test]
fn finalized_rings_report_exhausted_budget() {
    let square = polygon![(-2.0, 2.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0)];
    let result = shrink(initialize_ring_set(&square, 0.5).unwrap());
    assert_eq!(result.len(), 1);
    for ring in result.iter() {
        assert!(ring.remaining_dist().fuzzy_eq_zero());
    }
}

#[test]
fn shrink_is_deterministic() {
    let pentagon = polygon![(-2.0, 2.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (0.0, 4.0)];
    let first = shrink_polygon(&pentagon, 0.5).unwrap();
    let second = shrink_polygon(&pentagon, 0.5).unwrap();
    assert_eq!(first, second);
}

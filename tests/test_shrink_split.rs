use straight_skeleton::core::traits::FuzzyEq;
use straight_skeleton::{assert_fuzzy_eq, polygon, shrink_polygon, ShrinkError, Vector2};

fn shoelace_area(ring: &[Vector2<f64>]) -> f64 {
    let mut doubled = 0.0;
    for (i, p) in ring.iter().enumerate() {
        let q = ring[(i + 1) % ring.len()];
        doubled += p.perp_dot(q);
    }
    doubled / 2.0
}

fn centroid(ring: &[Vector2<f64>]) -> Vector2<f64> {
    let mut sum = Vector2::new(0.0, 0.0);
    for p in ring.iter() {
        sum = sum + *p;
    }
    sum.scale(1.0 / ring.len() as f64)
}

#[test]
fn notched_box_splits_into_two_rings() {
    // the reflex vertex at (0, 0.5) reaches the bottom edge before the
    // offset budget is spent, severing the box into two pockets
    let notched = polygon![
        (-4.0, 0.0),
        (4.0, 0.0),
        (4.0, 3.0),
        (1.0, 3.0),
        (0.0, 0.5),
        (-1.0, 3.0),
        (-4.0, 3.0),
    ];
    let rings = shrink_polygon(&notched, 0.4).unwrap();

    assert_eq!(rings.len(), 2);
    for ring in rings.iter() {
        assert_eq!(ring.len(), 4);
        // winding is preserved through the split
        assert!(shoelace_area(ring) > 0.0);
        // offset boundaries stay inside the input footprint
        for p in ring.iter() {
            assert!(p.y > 0.4 - 1e-9 && p.y < 2.6 + 1e-9);
            assert!(p.x.abs() < 3.6 + 1e-9);
        }
    }

    // one pocket on each side of the notch
    let (left, right) = if centroid(&rings[0]).x < 0.0 {
        (&rings[0], &rings[1])
    } else {
        (&rings[1], &rings[0])
    };
    assert!(left.iter().all(|p| p.x < 0.0));
    assert!(right.iter().all(|p| p.x > 0.0));
    assert_fuzzy_eq!(centroid(left).x, -centroid(right).x);
}

#[test]
fn shallow_notch_shrinks_as_one_ring() {
    // same box but the notch is too shallow to reach the bottom edge
    // within the budget, so no split fires
    let notched = polygon![
        (-4.0, 0.0),
        (4.0, 0.0),
        (4.0, 3.0),
        (1.0, 3.0),
        (0.0, 2.0),
        (-1.0, 3.0),
        (-4.0, 3.0),
    ];
    let rings = shrink_polygon(&notched, 0.4).unwrap();

    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].len(), 7);
}

#[test]
fn rejects_bad_input_through_public_api() {
    let square = polygon![(-2.0, 2.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0)];
    assert_eq!(
        shrink_polygon(&square, 0.0),
        Err(ShrinkError::NonPositiveDistance)
    );
    assert_eq!(
        shrink_polygon(&polygon![(0.0, 0.0), (1.0, 0.0)], 0.5),
        Err(ShrinkError::TooFewVertices(2))
    );
    assert_eq!(
        shrink_polygon(&polygon![(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)], 0.5),
        Err(ShrinkError::ClockwiseWinding)
    );
    assert_eq!(
        shrink_polygon(&polygon![(0.0, 0.0), (5.0, 0.0), (1.0, 3.0), (4.0, 4.0)], 0.5),
        Err(ShrinkError::SelfIntersecting { seg_a: 1, seg_b: 3 })
    );
}

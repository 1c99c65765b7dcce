use super::event::{next_ring_event, EventKind, SkeletonEvent};
use super::ring::{Ring, RingSet, VertexId, VertexIdGen};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::error::ShrinkError;

/// Validate a polygon and build the initial ring set: one ring holding every
/// input vertex with `target_distance` as its offset budget, edges and
/// bisectors derived.
///
/// The polygon must be simple, counter-clockwise wound, free of zero-length
/// edges, and `target_distance` must be positive.
pub fn initialize_ring_set<T>(
    polygon: &[Vector2<T>],
    target_distance: T,
) -> Result<RingSet<T>, ShrinkError>
where
    T: Real,
{
    validate_polygon(polygon)?;
    if !(target_distance > T::zero()) {
        return Err(ShrinkError::NonPositiveDistance);
    }

    let mut ids = VertexIdGen::new();
    let items: Vec<(VertexId, Vector2<T>)> =
        polygon.iter().map(|&p| (ids.next_id(), p)).collect();
    let ring = Ring::from_vertices(&items, target_distance);

    Ok(RingSet {
        rings: vec![ring],
        ids,
    })
}

/// Run the shrink driver to completion, returning the set of finalized
/// rings.
///
/// Each iteration pops one ring and either finalizes it (budget consumed),
/// discards it (negative budget or degenerate topology), or advances it by
/// one topological event and requeues the result. Edge events strictly reduce
/// a ring's remaining distance and split events strictly reduce the total
/// vertex count across descendants, so the loop terminates.
pub fn shrink<T>(ring_set: RingSet<T>) -> RingSet<T>
where
    T: Real,
{
    let RingSet {
        mut rings,
        mut ids,
    } = ring_set;
    let mut finalized = Vec::new();

    while let Some(mut ring) = rings.pop() {
        if ring.vertex_count() < 3 {
            continue;
        }
        if ring.remaining_dist().fuzzy_eq_zero() {
            finalized.push(ring);
            continue;
        }
        if ring.remaining_dist() < T::zero() {
            continue;
        }

        match next_ring_event(&ring) {
            None => {
                // no topological event ahead, consume the whole budget
                ring.shift_by(ring.remaining_dist());
                finalized.push(ring);
            }
            Some(event) => {
                for advanced in apply_event(ring, event, &mut ids) {
                    rings.push(advanced);
                }
            }
        }
    }

    RingSet {
        rings: finalized,
        ids,
    }
}

/// Shrink `polygon` inward by `target_distance`, returning the vertex
/// positions of every resulting boundary ring.
///
/// A single input polygon may produce several disjoint rings when split
/// events fire, or none at all when the polygon collapses entirely.
///
/// # Examples
///
/// ```
/// use straight_skeleton::{polygon, shrink_polygon};
///
/// let pentagon = polygon![(-2.0, 2.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (0.0, 4.0)];
/// let rings = shrink_polygon(&pentagon, 0.5).unwrap();
/// assert_eq!(rings.len(), 1);
/// assert!(rings[0].len() <= 5);
/// ```
pub fn shrink_polygon<T>(
    polygon: &[Vector2<T>],
    target_distance: T,
) -> Result<Vec<Vec<Vector2<T>>>, ShrinkError>
where
    T: Real,
{
    let ring_set = shrink(initialize_ring_set(polygon, target_distance)?);
    Ok(ring_set.iter().map(|r| r.positions()).collect())
}

/// Apply one event to `ring`, honoring it only when it fires strictly before
/// the remaining budget runs out; otherwise the ring is fully shifted and
/// left with a zero budget. Returns the ring(s) to requeue.
fn apply_event<T>(
    mut ring: Ring<T>,
    event: SkeletonEvent<T>,
    ids: &mut VertexIdGen,
) -> Vec<Ring<T>>
where
    T: Real,
{
    if event.priority < ring.remaining_dist() {
        match event.kind {
            EventKind::Edge => {
                if apply_edge_event(&mut ring, &event, ids) {
                    ring.shift_by(event.priority);
                    return vec![ring];
                }
            }
            EventKind::Split => {
                if let Some((a, b)) = apply_split_event(&ring, &event, ids) {
                    return vec![a, b];
                }
            }
        }
    }

    // event out of reach (or degenerate to apply): consume the whole budget
    ring.shift_by(ring.remaining_dist());
    vec![ring]
}

/// Merge the event's adjacent vertex pair into one new vertex at the
/// intersection point, shrinking the ring by one vertex.
fn apply_edge_event<T>(ring: &mut Ring<T>, event: &SkeletonEvent<T>, ids: &mut VertexIdGen) -> bool
where
    T: Real,
{
    let Some(second) = ring.next_id(event.a) else {
        return false;
    };
    let Some(anchor) = ring.prev_id(event.a) else {
        return false;
    };

    if ring.remove(event.a).is_none() || ring.remove(second).is_none() {
        return false;
    }
    ring.insert_after(anchor, ids.next_id(), event.point)
}

/// Cut the ring at a reflex vertex: the reflex vertex and the target edge are
/// replaced by two new vertices (one per side of the cut) and the remaining
/// vertices are partitioned into two independent rings, each keeping the
/// parent's unchanged offset budget.
///
/// Returns `None` when either replacement vertex has no defined position
/// (degenerate parallel configuration); the caller then falls back to the
/// no-event path.
fn apply_split_event<T>(
    ring: &Ring<T>,
    event: &SkeletonEvent<T>,
    ids: &mut VertexIdGen,
) -> Option<(Ring<T>, Ring<T>)>
where
    T: Real,
{
    let reflex = ring.get(event.a)?;
    let edge_start = ring.get(event.b)?;
    let target_edge = edge_start.edge_out?;

    // one new vertex on each side of the cut, where the reflex vertex's
    // incident edges meet the target edge
    let p1 = reflex.edge_in?.intersection(&target_edge)?;
    let p2 = reflex.edge_out?.intersection(&target_edge)?;

    // first ring: p1 closes the chain running from the target edge's end
    // around to the reflex vertex's predecessor
    let mut side_a = vec![(ids.next_id(), p1)];
    side_a.extend(chain_positions(ring, ring.next_id(event.b)?, event.a));

    // second ring: p2 closes the chain from the reflex vertex's successor
    // through the target edge's start
    let mut side_b = vec![(ids.next_id(), p2)];
    side_b.extend(chain_positions(ring, ring.next_id(event.a)?, event.b));
    side_b.push((event.b, edge_start.pos()));

    let remaining = ring.remaining_dist();
    Some((
        Ring::from_vertices(&side_a, remaining),
        Ring::from_vertices(&side_b, remaining),
    ))
}

/// Collect `(id, position)` pairs following next links from `start` up to
/// but excluding `stop`.
fn chain_positions<T>(
    ring: &Ring<T>,
    start: VertexId,
    stop: VertexId,
) -> Vec<(VertexId, Vector2<T>)>
where
    T: Real,
{
    let mut out = Vec::new();
    let mut cur = start;
    // bounded by the ring size in any well-formed ring
    for _ in 0..ring.vertex_count() {
        if cur == stop {
            break;
        }
        let Some(v) = ring.get(cur) else {
            break;
        };
        out.push((cur, v.pos()));
        cur = v.next;
    }
    out
}

fn validate_polygon<T>(polygon: &[Vector2<T>]) -> Result<(), ShrinkError>
where
    T: Real,
{
    if polygon.len() < 3 {
        return Err(ShrinkError::TooFewVertices(polygon.len()));
    }

    for (i, &p) in polygon.iter().enumerate() {
        let q = polygon[(i + 1) % polygon.len()];
        if p.fuzzy_eq(q) {
            return Err(ShrinkError::ZeroLengthEdge(i));
        }
    }

    // shoelace sum, positive for counter-clockwise winding
    let mut doubled_area = T::zero();
    for (i, &p) in polygon.iter().enumerate() {
        let q = polygon[(i + 1) % polygon.len()];
        doubled_area = doubled_area + p.perp_dot(q);
    }
    if doubled_area.fuzzy_eq_zero() || doubled_area < T::zero() {
        return Err(ShrinkError::ClockwiseWinding);
    }

    // reject crossings between non-adjacent boundary segments
    let n = polygon.len();
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a0, a1) = (polygon[i], polygon[(i + 1) % n]);
            let (b0, b1) = (polygon[j], polygon[(j + 1) % n]);
            if segments_properly_intersect(a0, a1, b0, b1) {
                return Err(ShrinkError::SelfIntersecting { seg_a: i, seg_b: j });
            }
        }
    }

    Ok(())
}

/// Parametric segment-segment crossing test; true only for a crossing
/// strictly interior to both segments (parallel overlaps excluded).
fn segments_properly_intersect<T>(
    a0: Vector2<T>,
    a1: Vector2<T>,
    b0: Vector2<T>,
    b1: Vector2<T>,
) -> bool
where
    T: Real,
{
    let da = a1 - a0;
    let db = b1 - b0;
    let denom = da.perp_dot(db);
    if denom.fuzzy_eq_zero() {
        return false;
    }

    let w = b0 - a0;
    let t = w.perp_dot(db) / denom;
    let u = w.perp_dot(da) / denom;
    let eps = T::fuzzy_epsilon();
    t > eps && t < T::one() - eps && u > eps && u < T::one() - eps
}

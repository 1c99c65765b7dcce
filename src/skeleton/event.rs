use super::ring::{Ring, VertexId};
use crate::core::math::{left_of_ray, Vector2};
use crate::core::traits::Real;

/// Kind of topological event hit by a shrinking ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Two adjacent edges collapse to a point, merging two vertices into one.
    Edge,
    /// A reflex vertex reaches another edge, splitting the ring in two.
    Split,
}

/// A detected event: the offset distance at which it fires (`priority`), the
/// computed intersection point, and the ids of the two vertices naming the
/// local topology to mutate.
///
/// For [EventKind::Edge], `a` and `b` are the adjacent pair whose shared edge
/// collapses (`b` follows `a`). For [EventKind::Split], `a` is the reflex
/// vertex and `b` the vertex starting the edge it splits.
#[derive(Debug, Copy, Clone)]
pub struct SkeletonEvent<T> {
    pub kind: EventKind,
    pub priority: T,
    pub point: Vector2<T>,
    pub a: VertexId,
    pub b: VertexId,
}

/// Binary min-heap of events keyed on priority (smaller offset distance pops
/// first). Supports arbitrary interleaved insert/pop; no decrease-key.
#[derive(Debug)]
struct EventQueue<T> {
    heap: Vec<SkeletonEvent<T>>,
}

impl<T> EventQueue<T>
where
    T: Real,
{
    fn new() -> Self {
        EventQueue { heap: Vec::new() }
    }

    fn push(&mut self, event: SkeletonEvent<T>) {
        self.heap.push(event);
        let mut i = self.heap.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].priority < self.heap[parent].priority {
                self.heap.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn pop(&mut self) -> Option<SkeletonEvent<T>> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();

        let mut i = 0;
        loop {
            let (left, right) = (2 * i + 1, 2 * i + 2);
            let mut smallest = i;
            if left < self.heap.len() && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
        min
    }
}

/// Find the closest topological event of the whole ring, if any: every
/// vertex's best candidate goes into a min-priority queue and the global
/// minimum wins.
pub fn next_ring_event<T>(ring: &Ring<T>) -> Option<SkeletonEvent<T>>
where
    T: Real,
{
    let mut queue = EventQueue::new();
    for id in ring.vertex_ids() {
        if let Some(event) = vertex_event(ring, id) {
            queue.push(event);
        }
    }
    queue.pop()
}

/// Best candidate event of a single vertex. Split candidates are only
/// evaluated for reflex vertices; when both an edge and a split candidate
/// exist the closer one wins, with equal priorities resolving to the split.
fn vertex_event<T>(ring: &Ring<T>, id: VertexId) -> Option<SkeletonEvent<T>>
where
    T: Real,
{
    let edge = edge_candidate(ring, id);
    let split = if is_reflex(ring, id) {
        split_candidate(ring, id)
    } else {
        None
    };

    match (edge, split) {
        (None, None) => None,
        (Some(e), None) => Some(e),
        (None, Some(s)) => Some(s),
        (Some(e), Some(s)) => {
            if s.priority > e.priority {
                Some(e)
            } else {
                Some(s)
            }
        }
    }
}

/// A vertex is reflex when it lies strictly left of the ray through its
/// neighbors, i.e. its interior angle exceeds a straight angle (the ring is
/// counter-clockwise).
fn is_reflex<T>(ring: &Ring<T>, id: VertexId) -> bool
where
    T: Real,
{
    let Some(v) = ring.get(id) else {
        return false;
    };
    match (ring.get(v.prev), ring.get(v.next)) {
        (Some(prev), Some(next)) => left_of_ray(v.pos, prev.pos, next.pos),
        _ => false,
    }
}

/// Closest edge-collapse candidate adjacent to `id`.
///
/// Each of the two edges incident to the vertex collapses where its own outer
/// neighbor lines meet; the candidate is ranked by the perpendicular distance
/// from that meet point to the collapsing edge. When both sides exist and the
/// next-side distance is not smaller, the prev-side pair is selected.
fn edge_candidate<T>(ring: &Ring<T>, id: VertexId) -> Option<SkeletonEvent<T>>
where
    T: Real,
{
    let v = ring.get(id)?;
    let prev = ring.get(v.prev)?;
    let next = ring.get(v.next)?;

    // collapse of edge (prev, v): its neighbors are prev's incoming edge and
    // v's outgoing edge
    let prev_side = prev
        .edge_in
        .zip(v.edge_out)
        .and_then(|(outer_in, outer_out)| outer_in.intersection(&outer_out))
        .zip(prev.edge_out)
        .map(|(p, collapsing)| (p, collapsing.distance_to(p)));

    // collapse of edge (v, next)
    let next_side = v
        .edge_in
        .zip(next.edge_out)
        .and_then(|(outer_in, outer_out)| outer_in.intersection(&outer_out))
        .zip(v.edge_out)
        .map(|(p, collapsing)| (p, collapsing.distance_to(p)));

    let (point, priority, a, b) = match (prev_side, next_side) {
        (None, None) => return None,
        (Some((p, d)), None) => (p, d, prev.id(), id),
        (None, Some((p, d))) => (p, d, id, next.id()),
        (Some((pp, dp)), Some((np, dn))) => {
            if dn >= dp {
                (pp, dp, prev.id(), id)
            } else {
                (np, dn, id, next.id())
            }
        }
    };

    Some(SkeletonEvent {
        kind: EventKind::Edge,
        priority,
        point,
        a,
        b,
    })
}

/// Closest split candidate of the reflex vertex `id`.
///
/// Every ring edge except the two incident to the vertex is a candidate
/// target: the vertex's bisector is intersected with the edge's supporting
/// line, the hit must fall inside the edge's bisector-bounded wedge, and the
/// nearest such hit (by euclidean distance to the vertex) wins. The event
/// priority is the hit's perpendicular distance to the vertex's outgoing
/// edge.
fn split_candidate<T>(ring: &Ring<T>, id: VertexId) -> Option<SkeletonEvent<T>>
where
    T: Real,
{
    let v = ring.get(id)?;
    let bisector = v.bisector?;
    let own_edge = v.edge_out?;

    let mut shortest: Option<T> = None;
    let mut best: Option<(Vector2<T>, T, VertexId)> = None;

    for w_id in ring.vertex_ids() {
        // skip the edges adjacent to the reflex vertex
        if w_id == id || w_id == v.prev {
            continue;
        }
        let Some(w) = ring.get(w_id) else {
            continue;
        };
        let Some(edge) = w.edge_out else {
            continue;
        };
        let Some(hit) = bisector.intersection(&edge) else {
            continue;
        };

        let dist = (hit - v.pos).length();
        if shortest.is_some_and(|s| dist >= s) {
            continue;
        }
        if in_bounds(ring, w_id, hit, v.pos) {
            shortest = Some(dist);
            best = Some((hit, own_edge.distance_to(hit), w_id));
        }
    }

    best.map(|(point, priority, b)| SkeletonEvent {
        kind: EventKind::Split,
        priority,
        point,
        a: id,
        b,
    })
}

/// Test whether a candidate split point lies within the wedge swept by the
/// edge starting at `w_id` as it shrinks.
///
/// The wedge is bounded by the rays from each edge endpoint through the apex
/// where the endpoint bisectors meet. When the bisectors are parallel (or
/// their meet falls on the wrong side of the edge) no finite apex exists;
/// the line through the reflex point parallel to the edge then supplies two
/// approximate apex points for the same two-sided ray test.
fn in_bounds<T>(ring: &Ring<T>, w_id: VertexId, pt: Vector2<T>, reflex_pos: Vector2<T>) -> bool
where
    T: Real,
{
    let Some(w) = ring.get(w_id) else {
        return false;
    };
    let Some(wn) = ring.get(w.next) else {
        return false;
    };
    let (Some(b1), Some(b2)) = (w.bisector, wn.bisector) else {
        return false;
    };

    let apex = b1
        .intersection(&b2)
        .filter(|&p| left_of_ray(p, w.pos, wn.pos));

    if let Some(apex) = apex {
        return !left_of_ray(pt, w.pos, apex) && left_of_ray(pt, wn.pos, apex);
    }

    let Some(edge) = w.edge_out else {
        return false;
    };
    let parallel = edge.parallel_through(reflex_pos);
    let (Some(e1), Some(e2)) = (b1.intersection(&parallel), b2.intersection(&parallel)) else {
        return false;
    };
    !left_of_ray(pt, w.pos, e1) && left_of_ray(pt, wn.pos, e2)
}

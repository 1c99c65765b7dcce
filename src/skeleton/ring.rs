use crate::core::math::{angular_bisector, Line, Vector2};
use crate::core::traits::Real;
use std::collections::BTreeMap;

/// Unique, monotonically increasing vertex identifier.
///
/// Ids are minted by a [VertexIdGen] owned by the [RingSet] and are never
/// reused across a shrink run, so an id names the same vertex for as long as
/// that vertex exists in any ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u64);

/// Mints [VertexId]s. Passed explicitly to every vertex-creating operation;
/// there is no global counter.
#[derive(Debug, Default)]
pub(crate) struct VertexIdGen {
    next: u64,
}

impl VertexIdGen {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next_id(&mut self) -> VertexId {
        let id = VertexId(self.next);
        self.next += 1;
        id
    }
}

/// One wavefront vertex: a position, links to its ring neighbors, and the
/// cached geometry derived from them.
///
/// `edge_in` is the supporting line through the previous vertex and this one,
/// `edge_out` the line through this one and the next. They and the angular
/// `bisector` are recomputed by [Ring::refresh_geometry] whenever the
/// surrounding topology changes; `None` means the geometry is degenerate
/// (coincident neighbor) or not yet derived.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: VertexId,
    pub(crate) pos: Vector2<T>,
    pub(crate) prev: VertexId,
    pub(crate) next: VertexId,
    pub(crate) edge_in: Option<Line<T>>,
    pub(crate) edge_out: Option<Line<T>>,
    pub(crate) bisector: Option<Line<T>>,
}

impl<T> Vertex<T>
where
    T: Real,
{
    fn new(id: VertexId, pos: Vector2<T>) -> Self {
        Vertex {
            id,
            pos,
            prev: id,
            next: id,
            edge_in: None,
            edge_out: None,
            bisector: None,
        }
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        self.pos
    }
}

/// One active boundary loop: a circular doubly-linked sequence of vertices
/// stored in an id-addressed arena, plus the offset distance this ring still
/// has to consume.
///
/// The linked structure is the source of truth for ordering; the arena map is
/// only storage. All traversals follow `next` links from the head vertex so
/// iteration order is deterministic.
#[derive(Debug, Clone)]
pub struct Ring<T> {
    verts: BTreeMap<VertexId, Vertex<T>>,
    head: Option<VertexId>,
    remaining: T,
}

impl<T> Ring<T>
where
    T: Real,
{
    /// Build a ring from `(id, position)` pairs in boundary order and derive
    /// the initial edges and bisectors.
    pub(crate) fn from_vertices(items: &[(VertexId, Vector2<T>)], remaining: T) -> Self {
        let mut verts = BTreeMap::new();
        for (i, &(id, pos)) in items.iter().enumerate() {
            let mut v = Vertex::new(id, pos);
            v.prev = items[(i + items.len() - 1) % items.len()].0;
            v.next = items[(i + 1) % items.len()].0;
            verts.insert(id, v);
        }

        let mut ring = Ring {
            verts,
            head: items.first().map(|&(id, _)| id),
            remaining,
        };
        ring.refresh_geometry();
        ring
    }

    /// Number of vertices currently in the ring.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    /// Offset distance this ring still has to consume.
    #[inline]
    pub fn remaining_dist(&self) -> T {
        self.remaining
    }

    #[inline]
    pub fn get(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.verts.get(&id)
    }

    pub(crate) fn next_id(&self, id: VertexId) -> Option<VertexId> {
        self.verts.get(&id).map(|v| v.next)
    }

    pub(crate) fn prev_id(&self, id: VertexId) -> Option<VertexId> {
        self.verts.get(&id).map(|v| v.prev)
    }

    /// Vertex ids in boundary order starting from the head vertex.
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        let mut out = Vec::with_capacity(self.verts.len());
        let Some(head) = self.head else {
            return out;
        };
        let mut cur = head;
        for _ in 0..self.verts.len() {
            out.push(cur);
            let next = self.next_id(cur);
            debug_assert!(next.is_some(), "next link of {:?} points outside the ring", cur);
            cur = next.unwrap_or(cur);
        }
        out
    }

    /// Vertex positions in boundary order.
    pub fn positions(&self) -> Vec<Vector2<T>> {
        self.vertex_ids()
            .into_iter()
            .filter_map(|id| self.get(id).map(|v| v.pos))
            .collect()
    }

    /// Insert a new vertex with `id` and `pos` directly after `anchor`.
    ///
    /// Returns `false` (leaving the ring untouched) if `anchor` is absent.
    pub(crate) fn insert_after(&mut self, anchor: VertexId, id: VertexId, pos: Vector2<T>) -> bool {
        let Some(after) = self.next_id(anchor) else {
            return false;
        };

        let mut v = Vertex::new(id, pos);
        v.prev = anchor;
        v.next = after;
        self.verts.insert(id, v);

        if let Some(a) = self.verts.get_mut(&anchor) {
            a.next = id;
        }
        if let Some(b) = self.verts.get_mut(&after) {
            b.prev = id;
        }
        true
    }

    /// Unlink and return the vertex with `id`, stitching its neighbors
    /// together. The head moves to the removed vertex's successor if needed.
    pub(crate) fn remove(&mut self, id: VertexId) -> Option<Vertex<T>> {
        let removed = self.verts.remove(&id)?;

        if let Some(p) = self.verts.get_mut(&removed.prev) {
            p.next = removed.next;
        }
        if let Some(n) = self.verts.get_mut(&removed.next) {
            n.prev = removed.prev;
        }

        if self.head == Some(id) {
            self.head = if self.verts.is_empty() {
                None
            } else {
                Some(removed.next)
            };
        }
        Some(removed)
    }

    /// Recompute every vertex's incident edge lines and angular bisector from
    /// the current positions and links.
    pub(crate) fn refresh_geometry(&mut self) {
        let snapshot: Vec<(VertexId, Vector2<T>, Vector2<T>, Vector2<T>)> = self
            .vertex_ids()
            .into_iter()
            .filter_map(|id| {
                let v = self.verts.get(&id)?;
                let prev = self.verts.get(&v.prev)?;
                let next = self.verts.get(&v.next)?;
                Some((id, prev.pos, v.pos, next.pos))
            })
            .collect();

        for (id, prev_pos, pos, next_pos) in snapshot {
            if let Some(v) = self.verts.get_mut(&id) {
                v.edge_in = Line::through(prev_pos, pos);
                v.edge_out = Line::through(pos, next_pos);
                v.bisector = angular_bisector(prev_pos, pos, next_pos);
            }
        }
    }

    /// Advance the wavefront: move every vertex along its bisector so that
    /// each edge ends up at perpendicular distance `dist` inward from where
    /// it was, and consume `dist` from the remaining budget.
    pub(crate) fn shift_by(&mut self, dist: T) {
        self.refresh_geometry();

        let targets: Vec<(VertexId, Vector2<T>)> = self
            .vertex_ids()
            .into_iter()
            .filter_map(|id| self.shifted_pos(id, dist).map(|p| (id, p)))
            .collect();
        for (id, pos) in targets {
            if let Some(v) = self.verts.get_mut(&id) {
                v.pos = pos;
            }
        }

        self.remaining = self.remaining - dist;
        self.refresh_geometry();
    }

    /// Where `id` lands when its outgoing edge is pushed inward by `dist`:
    /// the intersection of the vertex's bisector with the inward-parallel of
    /// its outgoing edge. Falls back to a plain normal translation when the
    /// bisector is absent or parallel to the edge.
    fn shifted_pos(&self, id: VertexId, dist: T) -> Option<Vector2<T>> {
        let v = self.verts.get(&id)?;
        let next = self.verts.get(&v.next)?;

        let edge_dir = next.pos - v.pos;
        if edge_dir.length().fuzzy_eq_zero() {
            return Some(v.pos);
        }

        let inward = edge_dir.perp().normalize();
        let translated = v.pos + inward.scale(dist);
        let offset_line = v.edge_out.map(|e| e.parallel_through(translated));
        let on_bisector = v
            .bisector
            .zip(offset_line)
            .and_then(|(b, l)| b.intersection(&l));
        Some(on_bisector.unwrap_or(translated))
    }
}

/// The pending collection of rings awaiting processing, together with the
/// vertex id generator shared by the whole run.
///
/// Grows by one on every split event and shrinks as rings finalize or
/// collapse; [shrink](crate::skeleton::shrink) drains it completely.
#[derive(Debug)]
pub struct RingSet<T> {
    pub(crate) rings: Vec<Ring<T>>,
    pub(crate) ids: VertexIdGen,
}

impl<T> RingSet<T>
where
    T: Real,
{
    /// Number of rings in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Iterate the rings in deterministic (insertion) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Ring<T>> {
        self.rings.iter()
    }

    /// Consume the set, yielding its rings.
    pub fn into_rings(self) -> Vec<Ring<T>> {
        self.rings
    }
}

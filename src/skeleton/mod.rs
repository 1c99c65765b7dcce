//! The event-driven shrink engine: active vertex rings, topological event
//! detection/selection, and the driver that consumes the offset distance.
mod event;
mod ring;
mod shrink;

pub use event::{next_ring_event, EventKind, SkeletonEvent};
pub use ring::{Ring, RingSet, Vertex, VertexId};
pub use shrink::{initialize_ring_set, shrink, shrink_polygon};
